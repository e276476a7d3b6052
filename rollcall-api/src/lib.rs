//! # Rollcall API Server Library
//!
//! Core functionality for the Rollcall school-management API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers
//! - `seed`: One-time startup seeding of the principal account

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
