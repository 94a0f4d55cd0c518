//! Activity ledger module - domain models, services, and traits.

mod activities_constants;
mod activities_model;
mod activities_service;
mod activities_traits;

pub use activities_constants::{activity_details, ActivityCategory, ActivityDetails, ActivityKind};
pub use activities_model::{Activity, ActivityTotals, NewActivity};
pub use activities_service::ActivityService;
pub use activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
