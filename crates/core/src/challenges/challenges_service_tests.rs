use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::challenges_constants::{BIKE_WEEK_CHALLENGE, PLANT_TREES_CHALLENGE};
use super::challenges_model::Challenge;
use super::challenges_service::ChallengeService;
use super::challenges_traits::{ChallengeRepositoryTrait, ChallengeServiceTrait};
use crate::errors::Result;
use crate::store::StoreValue;

// ============== Mock Repository ==============

#[derive(Default)]
struct MockChallengeRepository {
    stored: Mutex<Option<Vec<Challenge>>>,
    corrupt: Mutex<bool>,
    save_count: Mutex<usize>,
}

impl MockChallengeRepository {
    fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChallengeRepositoryTrait for MockChallengeRepository {
    fn load_challenges(&self) -> Result<StoreValue<Vec<Challenge>>> {
        if *self.corrupt.lock().unwrap() {
            return Ok(StoreValue::Corrupt);
        }
        match self.stored.lock().unwrap().clone() {
            Some(challenges) => Ok(StoreValue::Present(challenges)),
            None => Ok(StoreValue::Absent),
        }
    }

    async fn save_challenges(&self, challenges: Vec<Challenge>) -> Result<()> {
        *self.stored.lock().unwrap() = Some(challenges);
        *self.corrupt.lock().unwrap() = false;
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}

fn make_service() -> (ChallengeService, Arc<MockChallengeRepository>) {
    let repo = Arc::new(MockChallengeRepository::new());
    (ChallengeService::new(repo.clone()), repo)
}

// ============== Tests ==============

#[tokio::test]
async fn first_access_seeds_five_challenges() {
    let (service, repo) = make_service();

    let challenges = service.get_challenges().await.unwrap();

    assert_eq!(challenges.len(), 5);
    assert!(challenges.iter().all(|c| c.current == 0 && !c.completed));
    assert!(repo.stored.lock().unwrap().is_some());
}

#[tokio::test]
async fn second_access_is_a_read_through() {
    let (service, repo) = make_service();

    service.get_challenges().await.unwrap();
    let saves_after_seed = *repo.save_count.lock().unwrap();
    service.get_challenges().await.unwrap();

    assert_eq!(*repo.save_count.lock().unwrap(), saves_after_seed);
}

#[tokio::test]
async fn progress_accumulates_and_completes_at_target() {
    let (service, _) = make_service();
    service.get_challenges().await.unwrap();

    for _ in 0..5 {
        service
            .record_progress(BIKE_WEEK_CHALLENGE, 1)
            .await
            .unwrap();
    }

    let challenges = service.get_challenges().await.unwrap();
    let bike = challenges
        .iter()
        .find(|c| c.id == BIKE_WEEK_CHALLENGE)
        .unwrap();
    assert_eq!(bike.current, 5);
    assert!(bike.completed);
}

#[tokio::test]
async fn overshoot_is_clamped_to_target() {
    let (service, _) = make_service();

    // Target for the tree challenge is 10; a 12-unit delta clamps.
    service
        .record_progress(PLANT_TREES_CHALLENGE, 12)
        .await
        .unwrap();

    let challenges = service.get_challenges().await.unwrap();
    let trees = challenges
        .iter()
        .find(|c| c.id == PLANT_TREES_CHALLENGE)
        .unwrap();
    assert_eq!(trees.current, trees.target);
    assert!(trees.completed);
}

#[tokio::test]
async fn negative_delta_never_goes_below_zero() {
    let (service, _) = make_service();

    service
        .record_progress(BIKE_WEEK_CHALLENGE, -3)
        .await
        .unwrap();

    let challenges = service.get_challenges().await.unwrap();
    let bike = challenges
        .iter()
        .find(|c| c.id == BIKE_WEEK_CHALLENGE)
        .unwrap();
    assert_eq!(bike.current, 0);
    assert!(!bike.completed);
}

#[tokio::test]
async fn unknown_id_is_a_silent_noop() {
    let (service, _) = make_service();
    let before = service.get_challenges().await.unwrap();

    service.record_progress("no-such-challenge", 5).await.unwrap();

    let after = service.get_challenges().await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn zero_delta_still_persists() {
    let (service, repo) = make_service();
    service.get_challenges().await.unwrap();
    let saves_before = *repo.save_count.lock().unwrap();

    service.record_progress(BIKE_WEEK_CHALLENGE, 0).await.unwrap();

    assert_eq!(*repo.save_count.lock().unwrap(), saves_before + 1);
}

#[tokio::test]
async fn corrupt_store_serves_defaults_without_rewriting() {
    let (service, repo) = make_service();
    *repo.corrupt.lock().unwrap() = true;

    let challenges = service.get_challenges().await.unwrap();

    assert_eq!(challenges.len(), 5);
    // Read path must not have written anything.
    assert_eq!(*repo.save_count.lock().unwrap(), 0);
}
