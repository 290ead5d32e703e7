//! # API Shared
//!
//! Shared definitions for the outline APIs.
//!
//! Contains:
//! - Wire types for requests and responses (`types` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `outline` CLI for common functionality.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
