//! Print a year-by-year compound growth table
//!
//! Optionally writes the schedule to CSV, or compares final balances across
//! several rates.

use anyhow::{bail, Context, Result};
use clap::Parser;
use compounding_service::{CompoundingRequest, GrowthSchedule, RoundingPolicy};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "growth_table", about = "Year-by-year compound growth of a principal")]
struct Args {
    /// Starting principal
    #[arg(long)]
    principal: f64,

    /// Annual rate in percent (10 = 10%)
    #[arg(long, allow_negative_numbers = true)]
    rate: f64,

    /// Number of years to project
    #[arg(long)]
    years: u32,

    /// raw, presentation or each-period
    #[arg(long, default_value_t = RoundingPolicy::Presentation)]
    rounding: RoundingPolicy,

    /// Write the schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Comma-separated rates to compare against each other
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    compare_rates: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.principal.is_finite() || !args.rate.is_finite() {
        bail!("principal and rate must be finite numbers");
    }

    let start = Instant::now();
    let request = CompoundingRequest::new(args.principal, args.rate, args.years);
    let schedule = GrowthSchedule::build(request, args.rounding);
    log::debug!("Computed {} periods in {:?}", schedule.rows.len(), start.elapsed());

    println!(
        "Principal {:.2} at {}% for {} years ({} rounding)",
        args.principal, args.rate, args.years, args.rounding
    );
    println!("{:<6} {:>20} {:>18}", "Year", "Balance", "Interest");
    for row in &schedule.rows {
        println!("{:<6} {:>20.2} {:>18.2}", row.year, row.balance, row.interest);
    }
    println!("\nFinal balance:  {:.2}", schedule.final_balance());
    println!("Total interest: {:.2}", schedule.total_interest());

    if let Some(path) = &args.csv {
        write_csv(path, &schedule)?;
        println!("Schedule written to {}", path.display());
    }

    if !args.compare_rates.is_empty() {
        compare_rates(&args);
    }

    Ok(())
}

fn write_csv(path: &Path, schedule: &GrowthSchedule) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    schedule.write_csv(file)?;
    Ok(())
}

fn compare_rates(args: &Args) {
    let schedules = GrowthSchedule::compare_rates(
        args.principal,
        &args.compare_rates,
        args.years,
        args.rounding,
    );

    println!("\nRate comparison over {} years:", args.years);
    println!("{:>8} {:>20} {:>18}", "Rate %", "Final balance", "Total interest");
    for schedule in &schedules {
        println!(
            "{:>8.3} {:>20.2} {:>18.2}",
            schedule.request.annual_rate_percent,
            schedule.final_balance(),
            schedule.total_interest()
        );
    }
}
