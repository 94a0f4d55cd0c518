use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::engagement_model::LogActivityRequest;
use super::engagement_service::{EngagementService, EngagementServiceTrait};
use crate::activities::{Activity, ActivityKind, ActivityServiceTrait, ActivityTotals, NewActivity};
use crate::badges::{Badge, BadgeServiceTrait};
use crate::challenges::{Challenge, ChallengeServiceTrait};
use crate::opportunities::default_opportunities;
use crate::Result;

// ============== Mocks ==============

#[derive(Default)]
struct MockActivityService {
    logged: Mutex<Vec<NewActivity>>,
}

#[async_trait]
impl ActivityServiceTrait for MockActivityService {
    fn get_activities(&self) -> Result<Vec<Activity>> {
        Ok(Vec::new())
    }

    fn get_total_points(&self) -> Result<i64> {
        let logged = self.logged.lock().unwrap();
        Ok(logged.iter().map(|a| a.points).sum())
    }

    fn get_totals(&self) -> Result<ActivityTotals> {
        let logged = self.logged.lock().unwrap();
        Ok(ActivityTotals {
            total_points: logged.iter().map(|a| a.points).sum(),
            activity_count: logged.len() as i64,
        })
    }

    async fn log_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            title: new_activity.title.clone(),
            description: new_activity.description.clone(),
            points: new_activity.points,
            date: Utc::now(),
        };
        self.logged.lock().unwrap().push(new_activity);
        Ok(activity)
    }

    async fn reset(&self) -> Result<()> {
        self.logged.lock().unwrap().clear();
        Ok(())
    }
}

#[derive(Default)]
struct MockChallengeService {
    progress_calls: Mutex<Vec<(String, i64)>>,
}

#[async_trait]
impl ChallengeServiceTrait for MockChallengeService {
    async fn get_challenges(&self) -> Result<Vec<Challenge>> {
        Ok(Vec::new())
    }

    async fn record_progress(&self, challenge_id: &str, delta: i64) -> Result<()> {
        self.progress_calls
            .lock()
            .unwrap()
            .push((challenge_id.to_string(), delta));
        Ok(())
    }
}

#[derive(Default)]
struct MockBadgeService {
    next_awards: Mutex<Vec<String>>,
    evaluations: Mutex<usize>,
}

#[async_trait]
impl BadgeServiceTrait for MockBadgeService {
    fn get_earned_badges(&self) -> Result<Vec<Badge>> {
        Ok(Vec::new())
    }

    async fn award(&self, _badge_id: &str) -> Result<bool> {
        Ok(false)
    }

    async fn evaluate(&self) -> Vec<String> {
        *self.evaluations.lock().unwrap() += 1;
        std::mem::take(&mut *self.next_awards.lock().unwrap())
    }
}

struct Fixture {
    activities: Arc<MockActivityService>,
    challenges: Arc<MockChallengeService>,
    badges: Arc<MockBadgeService>,
    service: EngagementService,
}

fn make_service() -> Fixture {
    let activities = Arc::new(MockActivityService::default());
    let challenges = Arc::new(MockChallengeService::default());
    let badges = Arc::new(MockBadgeService::default());
    let service = EngagementService::new(
        activities.clone(),
        challenges.clone(),
        badges.clone(),
    );
    Fixture {
        activities,
        challenges,
        badges,
        service,
    }
}

fn request(kind: ActivityKind, amount: i64) -> LogActivityRequest {
    LogActivityRequest {
        kind,
        amount,
        note: None,
    }
}

// ============== Tests ==============

#[tokio::test]
async fn bike_commute_scores_points_and_bike_progress() {
    let fx = make_service();

    let outcome = fx
        .service
        .log_activity(request(ActivityKind::BikeCommute, 1))
        .await
        .unwrap();

    assert_eq!(outcome.activity.points, 20);
    assert_eq!(outcome.activity.title, "Bike Commute (1 miles)");
    assert!((outcome.co2_saved_kg - 0.411).abs() < 1e-9);
    assert_eq!(fx.activities.get_totals().unwrap().total_points, 20);

    let calls = fx.challenges.progress_calls.lock().unwrap();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], ("bike-to-work-week".to_string(), 1));
    // Unrelated challenges still get an explicit zero-delta touch.
    assert_eq!(calls[1], ("zero-waste-day".to_string(), 0));
    assert_eq!(calls[2], ("plant-ten-trees".to_string(), 0));
    assert_eq!(calls[3], ("meat-free-week".to_string(), 0));
}

#[tokio::test]
async fn points_and_co2_scale_with_amount() {
    let fx = make_service();

    let outcome = fx
        .service
        .log_activity(request(ActivityKind::PlantTree, 3))
        .await
        .unwrap();

    assert_eq!(outcome.activity.points, 150);
    assert_eq!(outcome.activity.title, "Planted Tree (3 trees)");
    assert!((outcome.co2_saved_kg - 66.0).abs() < 1e-9);

    let calls = fx.challenges.progress_calls.lock().unwrap();
    assert_eq!(calls[2], ("plant-ten-trees".to_string(), 3));
}

#[tokio::test]
async fn waste_category_kinds_advance_zero_waste() {
    let fx = make_service();

    fx.service
        .log_activity(request(ActivityKind::Recycle, 1))
        .await
        .unwrap();
    fx.service
        .log_activity(request(ActivityKind::ReusableBag, 2))
        .await
        .unwrap();

    let calls = fx.challenges.progress_calls.lock().unwrap();
    let zero_waste: i64 = calls
        .iter()
        .filter(|(id, _)| id == "zero-waste-day")
        .map(|(_, d)| d)
        .sum();
    // One unit of progress per log, regardless of amount.
    assert_eq!(zero_waste, 2);
}

#[tokio::test]
async fn note_replaces_catalog_description() {
    let fx = make_service();

    let outcome = fx
        .service
        .log_activity(LogActivityRequest {
            kind: ActivityKind::ReduceMeat,
            amount: 1,
            note: Some("Lentil curry night".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(outcome.activity.description, "Lentil curry night");
}

#[tokio::test]
async fn zero_amount_is_rejected() {
    let fx = make_service();

    let result = fx.service.log_activity(request(ActivityKind::Recycle, 0)).await;

    assert!(result.is_err());
    assert!(fx.activities.logged.lock().unwrap().is_empty());
    assert!(fx.challenges.progress_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn logging_reports_newly_earned_badges() {
    let fx = make_service();
    *fx.badges.next_awards.lock().unwrap() = vec!["first-steps".to_string()];

    let outcome = fx
        .service
        .log_activity(request(ActivityKind::BikeCommute, 1))
        .await
        .unwrap();

    assert_eq!(outcome.new_badges, vec!["first-steps".to_string()]);
    assert_eq!(*fx.badges.evaluations.lock().unwrap(), 1);
}

#[tokio::test]
async fn joining_an_opportunity_logs_its_points() {
    let fx = make_service();
    let opportunity = default_opportunities().remove(0);

    let outcome = fx.service.join_opportunity(&opportunity).await.unwrap();

    assert_eq!(outcome.activity.title, "Joined: Beach Cleanup Day");
    assert_eq!(outcome.activity.points, 50);
    assert_eq!(outcome.co2_saved_kg, 0.0);
    // Joining touches no challenges, only badges.
    assert!(fx.challenges.progress_calls.lock().unwrap().is_empty());
    assert_eq!(*fx.badges.evaluations.lock().unwrap(), 1);
}
