//! Challenge tracker module - domain models, services, and traits.

mod challenges_constants;
mod challenges_model;
mod challenges_service;
#[cfg(test)]
mod challenges_service_tests;
mod challenges_traits;

pub use challenges_constants::{
    default_challenges, BIKE_WEEK_CHALLENGE, ENERGY_SAVER_CHALLENGE, MEAT_FREE_CHALLENGE,
    PLANT_TREES_CHALLENGE, ZERO_WASTE_CHALLENGE,
};
pub use challenges_model::{Challenge, ChallengeCadence, ChallengeStatus};
pub use challenges_service::ChallengeService;
pub use challenges_traits::{ChallengeRepositoryTrait, ChallengeServiceTrait};
