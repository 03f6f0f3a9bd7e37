//! # API Shared
//!
//! Shared utilities and definitions for the body map server surfaces.
//!
//! Contains:
//! - Request/response bodies with OpenAPI schemas (`dto` module)
//! - `BodyMapService`, the stateless request facade over the engine
//! - `HealthService`

pub mod dto;
pub mod health;
pub mod service;

pub use dto::*;
pub use health::HealthService;
pub use service::BodyMapService;
