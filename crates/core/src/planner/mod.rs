//! Personalized action-plan generation from a short lifestyle survey.

mod planner_model;
mod planner_service;

pub use planner_model::{ActionPlan, CommuteMode, Interest, PlanImpact, PlannerInput, Setting, UserType};
pub use planner_service::generate_action_plan;
