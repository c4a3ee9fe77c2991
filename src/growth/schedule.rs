//! Year-by-year schedule with interest earned per period

use super::engine::{compute_growth_with, CompoundingRequest, RoundingPolicy};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;

/// One period of a growth schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Period number (1-indexed)
    pub year: u32,
    /// Balance at end of period
    pub balance: f64,
    /// Balance change over the period
    pub interest: f64,
}

/// Full schedule for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSchedule {
    pub request: CompoundingRequest,
    pub rounding: RoundingPolicy,
    pub rows: Vec<ScheduleRow>,
}

impl GrowthSchedule {
    /// Run the engine and pair each balance with the interest it earned
    pub fn build(request: CompoundingRequest, rounding: RoundingPolicy) -> Self {
        let balances = compute_growth_with(&request, rounding);

        let mut prior = request.principal;
        let rows = balances
            .into_iter()
            .zip(1u32..)
            .map(|(balance, year)| {
                let interest = balance - prior;
                prior = balance;
                ScheduleRow { year, balance, interest }
            })
            .collect();

        Self { request, rounding, rows }
    }

    /// Balance at the end of the last period, or the principal if there are none
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.balance).unwrap_or(self.request.principal)
    }

    pub fn total_interest(&self) -> f64 {
        self.final_balance() - self.request.principal
    }

    pub fn balances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.balance).collect()
    }

    /// Write the rows as CSV with a `year,balance,interest` header
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Build one schedule per rate in parallel, returned in input order
    pub fn compare_rates(
        principal: f64,
        rates: &[f64],
        periods: u32,
        rounding: RoundingPolicy,
    ) -> Vec<GrowthSchedule> {
        rates
            .par_iter()
            .map(|&rate| {
                GrowthSchedule::build(CompoundingRequest::new(principal, rate, periods), rounding)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_rows() {
        let schedule = GrowthSchedule::build(
            CompoundingRequest::new(1_000.0, 10.0, 3),
            RoundingPolicy::Presentation,
        );

        assert_eq!(schedule.rows.len(), 3);
        assert_eq!(schedule.rows[0].year, 1);
        assert_eq!(schedule.rows[2].year, 3);
        assert_eq!(schedule.balances(), vec![1_100.0, 1_210.0, 1_331.0]);
        assert_relative_eq!(schedule.rows[0].interest, 100.0, epsilon = 1e-9);
        assert_relative_eq!(schedule.rows[2].interest, 121.0, epsilon = 1e-9);
        assert_relative_eq!(schedule.total_interest(), 331.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_sums_to_total() {
        let schedule = GrowthSchedule::build(
            CompoundingRequest::new(25_000.0, 6.5, 20),
            RoundingPolicy::Raw,
        );
        let summed: f64 = schedule.rows.iter().map(|r| r.interest).sum();
        assert_relative_eq!(summed, schedule.total_interest(), max_relative = 1e-9);
    }

    #[test]
    fn test_csv_round_trip() {
        let schedule = GrowthSchedule::build(
            CompoundingRequest::new(1_000.0, 10.0, 3),
            RoundingPolicy::Presentation,
        );
        let mut buffer = Vec::new();
        schedule.write_csv(&mut buffer).expect("write csv");

        let text = String::from_utf8(buffer.clone()).expect("utf-8");
        assert!(text.starts_with("year,balance,interest\n"));

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let rows: Vec<ScheduleRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("read csv");
        assert_eq!(rows, schedule.rows);
    }

    #[test]
    fn test_compare_rates_keeps_order() {
        let rates = [7.0, -2.0, 0.0, 12.5, 3.0, 1.0, -8.0, 20.0];
        let schedules = GrowthSchedule::compare_rates(1_000.0, &rates, 15, RoundingPolicy::Raw);

        assert_eq!(schedules.len(), rates.len());
        for (schedule, rate) in schedules.iter().zip(rates) {
            assert_eq!(schedule.request.annual_rate_percent, rate);
            assert_eq!(schedule.rows.len(), 15);
            let expected = GrowthSchedule::build(
                CompoundingRequest::new(1_000.0, rate, 15),
                RoundingPolicy::Raw,
            );
            assert_eq!(schedule.final_balance(), expected.final_balance());
        }
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = GrowthSchedule::build(
            CompoundingRequest::new(750.0, 4.0, 0),
            RoundingPolicy::Raw,
        );
        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.final_balance(), 750.0);
        assert_eq!(schedule.total_interest(), 0.0);
    }
}
