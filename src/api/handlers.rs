//! Transport-independent request handlers
//!
//! Each handler returns the serialized response body or an `ApiError`; the
//! Lambda adapters turn those into their own response types.

use super::error::ApiError;
use super::schema::{GrowthRequest, GrowthResponse, MessageBody};
use crate::config::ServiceConfig;
use crate::growth::compute_growth_with;
use log::{error, info, warn};

pub const HEALTH_MESSAGE: &str = "Nothing here, used for health check. Try /banks instead.";
pub const HELLO_MESSAGE: &str = "Hello, World!";

/// Parse a growth request body, run the engine, and serialize the result
pub fn compound(body: &[u8], config: &ServiceConfig) -> Result<String, ApiError> {
    let request: GrowthRequest = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected request body: {}", e);
        ApiError::InvalidBody(e)
    })?;
    info!(
        "Compounding principal={} annualRate={} years={}",
        request.principal, request.annual_rate, request.years
    );

    let validated = request.validate(config).inspect_err(|e| warn!("Rejected request: {}", e))?;
    let balances = compute_growth_with(&validated, config.rounding);
    let response = GrowthResponse::new(balances, config.rounding);

    serde_json::to_string(&response).map_err(|e| {
        error!("Failed to serialize response: {}", e);
        ApiError::Serialization(e)
    })
}

pub fn hello() -> String {
    MessageBody::new(HELLO_MESSAGE).to_json()
}

/// Raw contents of the configured static banks file
pub async fn banks(config: &ServiceConfig) -> Result<Vec<u8>, ApiError> {
    tokio::fs::read(&config.banks_response_path)
        .await
        .map_err(|e| {
            error!(
                "Unable to read {}: {}",
                config.banks_response_path.display(),
                e
            );
            ApiError::StaticFile(e)
        })
}
