//! Shared types, errors, and configuration for Compta.
//!
//! This crate provides common types used across all other crates:
//! - Money parsing and display with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error taxonomy
//! - Configuration management
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
