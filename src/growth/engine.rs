//! Annual compounding recurrence

use super::rounding::round_cents;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inputs to a single growth computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundingRequest {
    /// Starting balance; not range-checked by the engine
    pub principal: f64,
    /// Annual rate in percent (10.0 = 10%); negative values model decline
    pub annual_rate_percent: f64,
    /// Number of annual compounding periods
    pub periods: u32,
}

impl CompoundingRequest {
    pub fn new(principal: f64, annual_rate_percent: f64, periods: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            periods,
        }
    }

    /// Growth factor applied once per period: `1 + rate / 100`
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.annual_rate_percent / 100.0
    }
}

/// How recorded balances are rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Full floating-point precision at every period
    Raw,
    /// Accumulate in full precision, round each recorded balance to cents
    #[default]
    Presentation,
    /// Round each period to cents and compound on the rounded balance
    EachPeriod,
}

impl RoundingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingPolicy::Raw => "raw",
            RoundingPolicy::Presentation => "presentation",
            RoundingPolicy::EachPeriod => "each-period",
        }
    }

    /// Whether recorded balances are rounded to cents
    pub fn is_rounded(&self) -> bool {
        !matches!(self, RoundingPolicy::Raw)
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rounding policy '{0}' (expected raw, presentation or each-period)")]
pub struct ParseRoundingPolicyError(String);

impl FromStr for RoundingPolicy {
    type Err = ParseRoundingPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(RoundingPolicy::Raw),
            "presentation" | "rounded" => Ok(RoundingPolicy::Presentation),
            "each-period" | "each_period" => Ok(RoundingPolicy::EachPeriod),
            other => Err(ParseRoundingPolicyError(other.to_string())),
        }
    }
}

/// Balance after each period, full precision
///
/// Element `i` is the balance after period `i + 1`. `periods == 0` yields an
/// empty vector. Total over all inputs: non-finite values propagate.
pub fn compute_growth(principal: f64, annual_rate_percent: f64, periods: u32) -> Vec<f64> {
    compute_growth_with(
        &CompoundingRequest::new(principal, annual_rate_percent, periods),
        RoundingPolicy::Raw,
    )
}

/// Balance after each period under the given rounding policy
pub fn compute_growth_with(request: &CompoundingRequest, policy: RoundingPolicy) -> Vec<f64> {
    let factor = request.growth_factor();
    let mut balance = request.principal;
    let mut balances = Vec::with_capacity(request.periods as usize);

    for _ in 1..=request.periods {
        balance *= factor;
        let recorded = match policy {
            RoundingPolicy::Raw => balance,
            RoundingPolicy::Presentation => round_cents(balance),
            RoundingPolicy::EachPeriod => {
                balance = round_cents(balance);
                balance
            }
        };
        balances.push(recorded);
    }

    balances
}
