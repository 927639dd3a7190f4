//! Loyalty and maintenance bonuses credited to the account

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PlanningError;

/// What a bonus rate is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusBasis {
    /// Percentage of the premium paid in the bonus year
    Premium,
    /// Percentage of the account value at the time of crediting
    AccountValue,
}

impl FromStr for BonusBasis {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "premium" | "percent_premium" => Ok(BonusBasis::Premium),
            "account_value" | "percent_account_value" | "av" => Ok(BonusBasis::AccountValue),
            other => Err(PlanningError::UnknownBonusBasis(other.to_string())),
        }
    }
}

/// One scheduled bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub year: u32,
    pub rate: f64,
    #[serde(rename = "type")]
    pub basis: BonusBasis,
}

impl Bonus {
    /// Bonus amount given the year's premium and the account value it credits to
    pub fn amount(&self, premium: f64, account_value: f64) -> f64 {
        if !self.rate.is_finite() {
            return 0.0;
        }
        match self.basis {
            BonusBasis::Premium => premium * self.rate,
            BonusBasis::AccountValue => account_value * self.rate,
        }
    }
}

/// Ordered list of bonuses; several entries may share a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusSchedule {
    bonuses: Vec<Bonus>,
}

impl BonusSchedule {
    /// Build a schedule, ordering entries by year (stable for equal years)
    pub fn new(mut bonuses: Vec<Bonus>) -> Self {
        bonuses.sort_by_key(|b| b.year);
        Self { bonuses }
    }

    pub fn none() -> Self {
        Self { bonuses: Vec::new() }
    }

    /// Illustrative schedule: a premium bonus in year 5, then growing
    /// account-value bonuses every five years
    pub fn default_loyalty() -> Self {
        Self::new(vec![
            Bonus { year: 5, rate: 0.10, basis: BonusBasis::Premium },
            Bonus { year: 10, rate: 0.02, basis: BonusBasis::AccountValue },
            Bonus { year: 15, rate: 0.03, basis: BonusBasis::AccountValue },
            Bonus { year: 20, rate: 0.04, basis: BonusBasis::AccountValue },
        ])
    }

    /// Total bonus credited in `policy_year`
    pub fn total_for_year(&self, policy_year: u32, premium: f64, account_value: f64) -> f64 {
        self.bonuses
            .iter()
            .filter(|b| b.year == policy_year)
            .map(|b| b.amount(premium, account_value))
            .sum()
    }

    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }
}

impl Default for BonusSchedule {
    fn default() -> Self {
        Self::default_loyalty()
    }
}
