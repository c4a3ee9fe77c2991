//! Compounding Service - year-by-year compound growth behind AWS Lambda handlers
//!
//! This library provides:
//! - The compounding engine (pure recurrence plus rounding policy)
//! - A per-year schedule view used by the command line tool
//! - Typed request/response schema, CORS and routing for the Lambda functions
//! - Environment-driven service configuration

pub mod growth;
pub mod api;
pub mod config;

// Re-export commonly used types
pub use growth::{
    compute_growth, compute_growth_with, CompoundingRequest, GrowthSchedule, RoundingPolicy,
};
pub use config::ServiceConfig;
