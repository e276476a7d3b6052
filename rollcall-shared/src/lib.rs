//! # Rollcall Shared Library
//!
//! Shared types and business logic for the Rollcall school-management
//! backend, used by the API server (and any future tooling).
//!
//! ## Module Organization
//!
//! - `models`: Database models and typed finders (the persistence gateway)
//! - `services`: Attendance business logic
//! - `auth`: Password hashing and JWT token issuing
//! - `db`: Connection pool and migration helpers

pub mod auth;
pub mod db;
pub mod models;
pub mod services;

/// Current version of the Rollcall shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
