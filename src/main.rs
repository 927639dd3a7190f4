//! Financial Planner CLI
//!
//! Command-line interface for goal plans and policy illustrations

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

use financial_planner::{
    calculate_plan,
    goals::{EducationRequest, ProtectionRequest, RetirementRequest, SocialInsurance},
    GoalRequest, IllustrationPolicy, PlanResult, ProjectionConfig, ProjectionResult,
    ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "financial_planner", version, about = "Goal funding plans and policy illustrations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Retirement fund plan
    Retirement {
        #[arg(long)]
        current_age: f64,
        #[arg(long, default_value_t = 60.0)]
        retire_age: f64,
        #[arg(long, default_value_t = 80.0)]
        life_expectancy: f64,
        #[arg(long)]
        monthly_expense: f64,
        #[arg(long, default_value_t = 0.04)]
        inflation: f64,
        #[arg(long, default_value_t = 0.06)]
        investment: f64,
        #[arg(long, default_value_t = 0.0)]
        savings: f64,
        /// Monthly salary on which social insurance is paid (enables the pension offset)
        #[arg(long)]
        si_salary: Option<f64>,
    },
    /// Child education fund plan
    Education {
        #[arg(long)]
        child_age: f64,
        #[arg(long, default_value_t = 18.0)]
        start_age: f64,
        #[arg(long, default_value_t = 4.0)]
        duration: f64,
        #[arg(long)]
        annual_tuition: f64,
        #[arg(long, default_value_t = 0.05)]
        inflation: f64,
        #[arg(long, default_value_t = 0.06)]
        investment: f64,
        #[arg(long, default_value_t = 0.0)]
        savings: f64,
    },
    /// Income protection needs analysis
    Protection {
        #[arg(long)]
        annual_income: f64,
        #[arg(long, default_value_t = 10.0)]
        support_years: f64,
        #[arg(long, default_value_t = 0.0)]
        existing_cover: f64,
        #[arg(long, default_value_t = 0.0)]
        loans: f64,
        #[arg(long, default_value_t = 0.0)]
        emergency_fund: f64,
    },
    /// Any goal plan from a JSON request file
    Plan {
        #[arg(long)]
        input: PathBuf,
    },
    /// Year-by-year illustration of one policy
    Project {
        #[command(flatten)]
        policy: PolicyArgs,
        /// Crediting rate; defaults to the config's standard preset
        #[arg(long)]
        rate: Option<f64>,
        /// Write the full schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Illustration at the standard and high presets side by side
    Compare {
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

#[derive(Debug, Args)]
struct PolicyArgs {
    #[arg(long)]
    age: u32,
    #[arg(long)]
    premium: f64,
    #[arg(long)]
    sum_assured: f64,
    #[arg(long)]
    term: u32,
    /// Directory with initial_charges.csv, bonuses.csv and coi_rates.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

impl PolicyArgs {
    fn policy(&self) -> IllustrationPolicy {
        IllustrationPolicy::new(self.age, self.premium, self.sum_assured, self.term)
    }

    fn runner(&self) -> anyhow::Result<ScenarioRunner> {
        match &self.assumptions {
            Some(path) => ScenarioRunner::from_csv_path(path)
                .with_context(|| format!("loading assumptions from {}", path.display())),
            None => Ok(ScenarioRunner::with_config(ProjectionConfig::default())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Retirement {
            current_age,
            retire_age,
            life_expectancy,
            monthly_expense,
            inflation,
            investment,
            savings,
            si_salary,
        } => {
            let request = GoalRequest::Retirement(RetirementRequest {
                current_age,
                retire_age,
                life_expectancy,
                current_monthly_expense: monthly_expense,
                inflation_rate: inflation,
                investment_rate: investment,
                current_savings: savings,
                social_insurance: si_salary.map(|salary_for_si| SocialInsurance {
                    has_si: true,
                    salary_for_si,
                }),
            });
            print_plan(&calculate_plan(&request));
        }
        Command::Education {
            child_age,
            start_age,
            duration,
            annual_tuition,
            inflation,
            investment,
            savings,
        } => {
            let request = GoalRequest::Education(EducationRequest {
                child_age,
                university_start_age: start_age,
                university_duration_years: duration,
                current_annual_tuition: annual_tuition,
                inflation_rate: inflation,
                investment_rate: investment,
                current_savings: savings,
            });
            print_plan(&calculate_plan(&request));
        }
        Command::Protection {
            annual_income,
            support_years,
            existing_cover,
            loans,
            emergency_fund,
        } => {
            let request = GoalRequest::Protection(ProtectionRequest {
                annual_income,
                support_years,
                existing_cover,
                loans,
                emergency_fund,
            });
            print_plan(&calculate_plan(&request));
        }
        Command::Plan { input } => {
            let file = File::open(&input)
                .with_context(|| format!("opening {}", input.display()))?;
            let request: GoalRequest = serde_json::from_reader(file)
                .with_context(|| format!("parsing goal request in {}", input.display()))?;
            let plan = calculate_plan(&request);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Project { policy, rate, csv } => {
            let runner = policy.runner()?;
            let rate = rate.unwrap_or(runner.config().default_interest_rate);
            let result = runner.run(&policy.policy(), rate);

            print_schedule(&result);

            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                result.write_csv(file)?;
                println!("\nFull schedule written to: {}", path.display());
            }
        }
        Command::Compare { policy } => {
            let runner = policy.runner()?;
            let comparison = runner.run_presets(&policy.policy());

            println!(
                "{:>4} {:>4} {:>18} {:>18} {:>18}",
                "Year", "Age", "Premiums", "AV @ standard", "AV @ high"
            );
            println!("{}", "-".repeat(66));
            for (low, high) in comparison
                .default_rate
                .rows
                .iter()
                .zip(comparison.high_rate.rows.iter())
            {
                println!(
                    "{:>4} {:>4} {:>18.0} {:>18.0} {:>18.0}",
                    low.year, low.age, low.accumulated_premium, low.account_value, high.account_value
                );
            }
            print_summary(&comparison.default_rate);
            print_summary(&comparison.high_rate);
        }
    }

    Ok(())
}

fn print_plan(plan: &PlanResult) {
    println!("Goal: {}", plan.goal_type.as_str());
    println!("  Required amount:       {:>20.0}", plan.required_amount);
    println!("  Current amount:        {:>20.0}", plan.current_amount);
    println!("  Shortfall:             {:>20.0}", plan.shortfall);
    println!("  Monthly saving needed: {:>20.0}", plan.monthly_saving_needed);
    println!("  Funded:                {:>20}", if plan.is_funded() { "yes" } else { "no" });
    println!("\nDetails:");
    for (key, value) in &plan.details {
        println!("  {:<28} {:>16.2}", key, value);
    }
}

fn print_schedule(result: &ProjectionResult) {
    println!(
        "Illustration at {:.2}% ({} of {} years):",
        result.interest_rate * 100.0,
        result.rows.len(),
        result.horizon_years
    );
    println!(
        "{:>4} {:>4} {:>16} {:>18} {:>18} {:>18} {:>18}",
        "Year", "Age", "Premium", "Accum. premium", "Account value", "Surrender value", "Death benefit"
    );
    println!("{}", "-".repeat(104));

    for row in &result.rows {
        println!(
            "{:>4} {:>4} {:>16.0} {:>18.0} {:>18.0} {:>18.0} {:>18.0}",
            row.year,
            row.age,
            row.premium_paid,
            row.accumulated_premium,
            row.account_value,
            row.surrender_value,
            row.death_benefit,
        );
    }

    print_summary(result);
}

fn print_summary(result: &ProjectionResult) {
    let summary = result.summary();
    println!("\nSummary at {:.2}%:", summary.interest_rate * 100.0);
    println!("  Years projected:   {}", summary.years_projected);
    println!("  Total premium:     {:.0}", summary.total_premium);
    println!("  Final AV:          {:.0}", summary.final_account_value);
    println!("  Final surrender:   {:.0}", summary.final_surrender_value);
    match summary.lapse_year {
        Some(year) => println!("  Lapsed in year:    {}", year),
        None => println!("  Lapsed:            no"),
    }
    match summary.break_even_year {
        Some(year) => println!("  Break-even year:   {}", year),
        None => println!("  Break-even year:   none"),
    }
    match summary.surrender_yield {
        Some(irr) => println!("  Surrender yield:   {:.2}%", irr * 100.0),
        None => println!("  Surrender yield:   n/a"),
    }
}
