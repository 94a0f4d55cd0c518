//! Local environmental opportunity discovery: a fixed fallback set,
//! location-aware generation, and distance-annotated listing.

mod opportunities_constants;
mod opportunities_model;
mod opportunities_service;

pub use opportunities_constants::{default_opportunities, DEFAULT_LOCATION};
pub use opportunities_model::{GeoPoint, Opportunity, OpportunityKind, OpportunityView};
pub use opportunities_service::{
    generate_nearby, haversine_km, list_default_opportunities, list_opportunities,
    OpportunityQuery,
};
