//! Badge evaluator module - domain models, services, and traits.

mod badges_constants;
mod badges_model;
mod badges_service;
mod badges_traits;

pub use badges_constants::{find_badge, BADGE_ECO_WARRIOR, BADGE_FIRST_STEPS};
pub use badges_model::{Badge, BadgeRarity};
pub use badges_service::BadgeService;
pub use badges_traits::{BadgeRepositoryTrait, BadgeServiceTrait};
