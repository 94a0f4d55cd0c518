//! Leaderboard module - read-only ranking over the ledger aggregate.

mod leaderboard_model;
mod leaderboard_service;

pub use leaderboard_model::LeaderboardEntry;
pub use leaderboard_service::{compose_leaderboard, LeaderboardService};
