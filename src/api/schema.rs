//! JSON request and response bodies

use super::error::ApiError;
use crate::config::ServiceConfig;
use crate::growth::{CompoundingRequest, RoundingPolicy};
use serde::{Deserialize, Serialize};

/// Body of `POST /compound`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRequest {
    pub principal: f64,
    /// Percent per year (10 = 10%)
    pub annual_rate: f64,
    #[serde(alias = "periods")]
    pub years: i64,
}

impl GrowthRequest {
    /// Check the request against the service limits and convert it for the engine
    ///
    /// Negative principal is passed through; the engine computes it as-is.
    pub fn validate(&self, config: &ServiceConfig) -> Result<CompoundingRequest, ApiError> {
        if !self.principal.is_finite() {
            return Err(ApiError::InvalidInput("principal must be a finite number".into()));
        }
        if !self.annual_rate.is_finite() {
            return Err(ApiError::InvalidInput("annualRate must be a finite number".into()));
        }
        if self.years < 0 {
            return Err(ApiError::InvalidInput("years must be a non-negative integer".into()));
        }
        if self.years > i64::from(config.max_years) {
            return Err(ApiError::TooManyPeriods {
                years: self.years,
                max: config.max_years,
            });
        }

        Ok(CompoundingRequest::new(
            self.principal,
            self.annual_rate,
            self.years as u32,
        ))
    }
}

/// Successful growth response
///
/// Rounded schedules are reported as `gainsPerYear`, raw ones as
/// `amountsPerYear`. Non-finite balances serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gains_per_year: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amounts_per_year: Option<Vec<f64>>,
}

impl GrowthResponse {
    pub const SUCCESS: &'static str = "Calculation successful";

    pub fn new(balances: Vec<f64>, rounding: RoundingPolicy) -> Self {
        let (gains_per_year, amounts_per_year) = if rounding.is_rounded() {
            (Some(balances), None)
        } else {
            (None, Some(balances))
        };
        Self {
            message: Self::SUCCESS.to_string(),
            gains_per_year,
            amounts_per_year,
        }
    }

    pub fn balances(&self) -> &[f64] {
        self.gains_per_year
            .as_deref()
            .or(self.amounts_per_year.as_deref())
            .unwrap_or(&[])
    }
}

/// `{"message": ...}` body used for greetings and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"message":"Internal error"}"#.to_string())
    }
}
