//! Illustrate an entire book of policies from a CSV file
//!
//! Outputs per-year totals across all policies still in force

use anyhow::Context;
use clap::Parser;
use financial_planner::{
    policy::{load_default_book, load_policies, loader::DEFAULT_BOOK_PATH},
    projection::ProjectionResult,
    ProjectionConfig, ScenarioRunner,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Project a CSV book of illustration policies")]
struct Args {
    /// Policy book (policy_id,current_age,annual_premium,sum_assured,payment_term);
    /// defaults to the bundled sample book
    #[arg(long)]
    book: Option<PathBuf>,

    /// Crediting rate; defaults to the config's standard preset
    #[arg(long)]
    rate: Option<f64>,

    /// Directory with assumption tables; defaults to data/assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,

    #[arg(long, default_value = "book_projection_output.csv")]
    output: PathBuf,
}

/// Aggregated yearly results across all policies
#[derive(Debug, Clone, Default)]
struct AggregatedRow {
    year: u32,
    policies_in_force: u32,
    total_premium: f64,
    total_account_value: f64,
    total_surrender_value: f64,
    total_death_benefit: f64,
    total_cost_of_insurance: f64,
    total_bonus: f64,
}

fn aggregate(results: &[ProjectionResult], max_years: u32) -> Vec<AggregatedRow> {
    let mut aggregated: Vec<AggregatedRow> = (1..=max_years)
        .map(|year| AggregatedRow { year, ..Default::default() })
        .collect();

    for result in results {
        for row in &result.rows {
            let idx = (row.year - 1) as usize;
            if let Some(agg) = aggregated.get_mut(idx) {
                if row.account_value > 0.0 {
                    agg.policies_in_force += 1;
                }
                agg.total_premium += row.premium_paid;
                agg.total_account_value += row.account_value;
                agg.total_surrender_value += row.surrender_value;
                agg.total_death_benefit += row.death_benefit;
                agg.total_cost_of_insurance += row.cost_of_insurance;
                agg.total_bonus += row.bonus;
            }
        }
    }

    aggregated
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let policies = match &args.book {
        Some(path) => {
            println!("Loading policies from {}...", path.display());
            load_policies(path)
                .with_context(|| format!("loading policy book {}", path.display()))?
        }
        None => {
            println!("Loading sample book from {}...", DEFAULT_BOOK_PATH);
            load_default_book().context("loading the sample policy book")?
        }
    };
    println!("Loaded {} policies in {:?}", policies.len(), start.elapsed());

    let config = match &args.assumptions {
        Some(path) => ProjectionConfig::from_csv_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => ProjectionConfig::from_csv().context("loading default assumptions")?,
    };
    let max_years = config.max_years;
    let runner = ScenarioRunner::with_config(config);
    let rate = args.rate.unwrap_or(runner.config().default_interest_rate);

    let proj_start = Instant::now();
    let results = runner.run_batch(&policies, rate);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let lapsed = results.iter().filter(|r| r.lapsed()).count();
    let aggregated = aggregate(&results, max_years);

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writeln!(
        file,
        "Year,InForce,Premium,AccountValue,SurrenderValue,DeathBenefit,COI,Bonus"
    )?;
    for row in aggregated.iter().filter(|r| r.policies_in_force > 0 || r.total_premium > 0.0) {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.year,
            row.policies_in_force,
            row.total_premium,
            row.total_account_value,
            row.total_surrender_value,
            row.total_death_benefit,
            row.total_cost_of_insurance,
            row.total_bonus,
        )?;
    }
    println!("Output written to {}", args.output.display());

    println!("\nBook Summary at {:.2}%:", rate * 100.0);
    println!("  Policies: {}, lapsed before horizon: {}", policies.len(), lapsed);
    if let Some(first) = aggregated.first() {
        println!(
            "  Year 1:  in force={}, premium={:.0}, AV={:.0}",
            first.policies_in_force, first.total_premium, first.total_account_value
        );
    }
    if let Some(year10) = aggregated.get(9) {
        println!(
            "  Year 10: in force={}, premium={:.0}, AV={:.0}",
            year10.policies_in_force, year10.total_premium, year10.total_account_value
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
