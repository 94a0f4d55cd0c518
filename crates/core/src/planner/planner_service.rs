use super::planner_model::{
    ActionPlan, CommuteMode, Interest, PlanImpact, PlannerInput, Setting, UserType,
};
use crate::constants::TREE_CO2_LBS_PER_YEAR;

/// Builds a personalized plan from the survey answers. Pure and
/// deterministic: the same input always yields the same plan.
pub fn generate_action_plan(input: &PlannerInput) -> ActionPlan {
    let mut actions: Vec<String> = Vec::new();
    let mut co2_saved_lbs: i64 = 0;

    let mut push = |actions: &mut Vec<String>, text: &str| actions.push(text.to_string());

    match input.user_type {
        UserType::Student => {
            push(&mut actions, "Start an eco-club at school to inspire classmates");
            push(&mut actions, "Create educational posters about environmental issues");
            co2_saved_lbs += 50;
        }
        UserType::Adult => {
            push(&mut actions, "Advocate for sustainable policies in your workplace");
            push(&mut actions, "Mentor others about environmental responsibility");
            co2_saved_lbs += 75;
        }
    }

    match input.setting {
        Setting::City => {
            push(&mut actions, "Use public transportation or bike for daily commutes");
            push(&mut actions, "Support local urban gardens and green spaces");
            co2_saved_lbs += 200;
        }
        Setting::Suburban => {
            push(&mut actions, "Plant native trees and create wildlife-friendly gardens");
            push(&mut actions, "Organize community clean-up events");
            co2_saved_lbs += 150;
        }
    }

    match input.commute {
        CommuteMode::Walk | CommuteMode::Bike => {
            push(&mut actions, "Share your low-carbon commute story to inspire others");
            co2_saved_lbs += 100;
        }
        CommuteMode::Public => {
            push(&mut actions, "Encourage carpooling or transit use among neighbors");
            co2_saved_lbs += 300;
        }
        CommuteMode::Car => {
            push(&mut actions, "Explore carpooling options or consider an electric vehicle");
            push(&mut actions, "Combine errands to reduce trips");
            co2_saved_lbs += 500;
        }
    }

    match input.interest {
        Interest::Animals => {
            push(&mut actions, "Support local wildlife rehabilitation centers");
            push(&mut actions, "Create a wildlife-friendly backyard with native plants");
            push(&mut actions, "Participate in citizen science projects tracking animals");
        }
        Interest::Climate => {
            push(&mut actions, "Calculate and track your carbon footprint monthly");
            push(&mut actions, "Switch to renewable energy providers if available");
            push(&mut actions, "Reduce meat consumption by trying \"Meatless Mondays\"");
        }
        Interest::Plants => {
            push(&mut actions, "Plant pollinator-friendly flowers and herbs");
            push(&mut actions, "Join or start a community garden");
            push(&mut actions, "Learn about and share native plant species");
        }
        Interest::Oceans => {
            push(&mut actions, "Eliminate single-use plastics from your routine");
            push(&mut actions, "Choose sustainable seafood options");
            push(&mut actions, "Participate in beach or waterway clean-up events");
        }
    }

    push(&mut actions, "Share your eco-journey on social media to inspire others");
    push(&mut actions, "Continue learning and adapting your environmental habits");

    let trees_equivalent =
        (co2_saved_lbs as f64 / TREE_CO2_LBS_PER_YEAR as f64).round() as i64;

    ActionPlan {
        title: format!(
            "Your Personalized {}-Focused Action Plan",
            input.interest.label()
        ),
        actions,
        impact: PlanImpact {
            co2_saved_lbs,
            trees_equivalent,
            description: format!(
                "By following these actions, you could potentially offset approximately \
                 {co2_saved_lbs} pounds of CO2 annually, equivalent to planting \
                 {trees_equivalent} trees! Remember, every small action contributes to a \
                 healthier planet."
            ),
        },
    }
}

// ============== Tests ==============
