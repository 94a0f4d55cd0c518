//! EcoLog Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for EcoLog: the activity
//! ledger, challenge tracker, badge evaluator, and the supporting
//! engagement features. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod activities;
pub mod badges;
pub mod carbon;
pub mod challenges;
pub mod constants;
pub mod donations;
pub mod engagement;
pub mod enviro;
pub mod errors;
pub mod leaderboard;
pub mod opportunities;
pub mod planner;
pub mod profile;
pub mod store;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use store::StoreValue;
