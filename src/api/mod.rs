//! Transport layer: typed request schema, errors, CORS and Lambda handlers
//!
//! Two Lambda entry points share this module:
//! - `router` serves the HTTP routes through `lambda_http`
//! - `proxy` handles raw API Gateway proxy events through `lambda_runtime`

mod error;
mod schema;
pub mod handlers;
pub mod router;
pub mod proxy;

pub use error::ApiError;
pub use schema::{GrowthRequest, GrowthResponse, MessageBody};
pub use router::route;
pub use proxy::handle_proxy_event;

// ============================================================================
// CORS
// ============================================================================

pub const CORS_ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
pub const CORS_ALLOW_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
