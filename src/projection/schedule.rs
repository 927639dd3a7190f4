//! Year-by-year illustration output

use serde::{Deserialize, Serialize};
use std::io::Write;

use super::irr::surrender_yield;
use crate::error::Result;

/// A single row of the illustration for one policy year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    // Timing
    pub year: u32,
    pub age: u32,

    // Premium
    pub premium_paid: f64,
    pub accumulated_premium: f64,

    // Values
    pub account_value: f64,
    pub surrender_value: f64,
    pub death_benefit: f64,

    // Roll-forward components
    #[serde(default)]
    pub premium_charge: f64,
    #[serde(default)]
    pub allocated_premium: f64,
    #[serde(default)]
    pub interest: f64,
    #[serde(default)]
    pub cost_of_insurance: f64,
    #[serde(default)]
    pub admin_fee: f64,
    #[serde(default)]
    pub bonus: f64,
}

/// Complete illustration for one policy at one crediting rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Policy identifier
    pub policy_id: u32,

    /// Annual crediting rate used for the run
    pub interest_rate: f64,

    /// Years the illustration would run without a lapse
    pub horizon_years: u32,

    /// Yearly rows, ascending by policy year
    pub rows: Vec<YearProjection>,
}

impl ProjectionResult {
    pub fn new(policy_id: u32, interest_rate: f64, horizon_years: u32) -> Self {
        Self {
            policy_id,
            interest_rate,
            horizon_years,
            rows: Vec::new(),
        }
    }

    /// Add a row
    pub fn add_row(&mut self, row: YearProjection) {
        self.rows.push(row);
    }

    /// The policy ran out of account value before or at the end of the schedule
    pub fn lapsed(&self) -> bool {
        self.rows.last().map(|r| r.account_value <= 0.0).unwrap_or(false)
    }

    /// Year in which the account value hit zero
    pub fn lapse_year(&self) -> Option<u32> {
        if self.lapsed() {
            self.rows.last().map(|r| r.year)
        } else {
            None
        }
    }

    /// First year the surrender value covers all premiums paid so far
    pub fn break_even_year(&self) -> Option<u32> {
        self.rows
            .iter()
            .find(|r| r.accumulated_premium > 0.0 && r.surrender_value >= r.accumulated_premium)
            .map(|r| r.year)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.rows.last();

        ProjectionSummary {
            policy_id: self.policy_id,
            interest_rate: self.interest_rate,
            years_projected: self.rows.len() as u32,
            total_premium: last.map(|r| r.accumulated_premium).unwrap_or(0.0),
            total_cost_of_insurance: self.rows.iter().map(|r| r.cost_of_insurance).sum(),
            total_bonus: self.rows.iter().map(|r| r.bonus).sum(),
            final_account_value: last.map(|r| r.account_value).unwrap_or(0.0),
            final_surrender_value: last.map(|r| r.surrender_value).unwrap_or(0.0),
            final_death_benefit: last.map(|r| r.death_benefit).unwrap_or(0.0),
            lapsed: self.lapsed(),
            lapse_year: self.lapse_year(),
            break_even_year: self.break_even_year(),
            surrender_yield: surrender_yield(&self.rows),
        }
    }

    /// Write the rows as CSV with a header line
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Summary statistics for an illustration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub policy_id: u32,
    pub interest_rate: f64,
    pub years_projected: u32,
    pub total_premium: f64,
    pub total_cost_of_insurance: f64,
    pub total_bonus: f64,
    pub final_account_value: f64,
    pub final_surrender_value: f64,
    pub final_death_benefit: f64,
    pub lapsed: bool,
    pub lapse_year: Option<u32>,
    pub break_even_year: Option<u32>,
    /// Annual IRR of surrendering at the final year
    pub surrender_yield: Option<f64>,
}
