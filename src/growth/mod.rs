//! Compounding engine for annual growth of a principal

mod engine;
mod rounding;
mod schedule;

pub use engine::{
    compute_growth, compute_growth_with, CompoundingRequest, ParseRoundingPolicyError,
    RoundingPolicy,
};
pub use rounding::{round_cents, round_to};
pub use schedule::{GrowthSchedule, ScheduleRow};

// ============================================================================
// Reporting Precision
// ============================================================================
// Reported balances are rounded to whole cents. Raw schedules keep full
// floating-point precision at every period.

/// Decimal places used by the reporting variant
pub const REPORTING_DECIMALS: u32 = 2;
