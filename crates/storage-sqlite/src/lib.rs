//! SQLite storage implementation for EcoLog.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `ecolog-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. `core` is database-agnostic and works with traits.
//!
//! The whole persisted state is one key-value table (`app_store`) holding
//! JSON documents and scalar strings, mirroring the flat namespace the
//! domain layer expects.

pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

// Repository implementations
pub mod activities;
pub mod badges;
pub mod challenges;
pub mod profile;

// Re-export database utilities
pub use db::{create_pool, exec_write, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from ecolog-core for convenience
pub use ecolog_core::errors::{DatabaseError, Error, Result};
