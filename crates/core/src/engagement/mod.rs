//! Engagement orchestration: catalog-driven activity logging wired
//! through the ledger, the challenge tracker, and badge evaluation.

mod engagement_model;
mod engagement_service;
#[cfg(test)]
mod engagement_service_tests;

pub use engagement_model::{LogActivityRequest, LoggedOutcome};
pub use engagement_service::{EngagementService, EngagementServiceTrait};
