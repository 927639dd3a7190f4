//! Core engine for yearly account value roll-forwards

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::schedule::{ProjectionResult, YearProjection};
use super::state::ProjectionState;
use crate::assumptions::{BonusSchedule, CoiRateTable, InitialChargeSchedule, LoadedAssumptions};
use crate::error::Result;
use crate::policy::IllustrationPolicy;
use crate::tvm::finite_or_zero;

/// Standard illustration crediting rate
pub const DEFAULT_INTEREST_RATE: f64 = 0.05;

/// Optimistic illustration crediting rate
pub const HIGH_INTEREST_RATE: f64 = 0.07;

/// Flat administration fee per policy year
pub const DEFAULT_ANNUAL_ADMIN_FEE: f64 = 480_000.0;

/// Longest illustration in policy years
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Illustrations stop when the insured reaches this age
pub const TERMINAL_AGE: u32 = 99;

/// Policy years during which nothing is paid on surrender
pub const SURRENDER_PENALTY_YEARS: u32 = 2;

/// Configuration for an illustration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Preset for the standard illustration
    pub default_interest_rate: f64,

    /// Preset for the optimistic illustration
    pub high_interest_rate: f64,

    /// Front-load charges by policy year
    pub initial_charges: InitialChargeSchedule,

    /// Scheduled bonuses
    pub bonuses: BonusSchedule,

    /// Cost-of-insurance ladder by attained age
    pub coi_rates: CoiRateTable,

    /// Administration fee deducted every policy year
    pub admin_fee: f64,

    /// Cap on projected policy years; values above `MAX_PROJECTION_YEARS` are ignored
    pub max_years: u32,

    /// Age at which the illustration ends; never later than `TERMINAL_AGE`
    pub terminal_age: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_interest_rate: DEFAULT_INTEREST_RATE,
            high_interest_rate: HIGH_INTEREST_RATE,
            initial_charges: InitialChargeSchedule::default(),
            bonuses: BonusSchedule::default(),
            coi_rates: CoiRateTable::default(),
            admin_fee: DEFAULT_ANNUAL_ADMIN_FEE,
            max_years: MAX_PROJECTION_YEARS,
            terminal_age: TERMINAL_AGE,
        }
    }
}

impl ProjectionConfig {
    /// Defaults with charge, bonus and COI tables read from an assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Ok(Self::default().with_assumptions(loaded))
    }

    /// Defaults with tables from data/assumptions/
    pub fn from_csv() -> Result<Self> {
        Ok(Self::default().with_assumptions(LoadedAssumptions::load_default()?))
    }

    pub fn with_assumptions(mut self, loaded: LoadedAssumptions) -> Self {
        self.initial_charges = loaded.initial_charges;
        self.bonuses = loaded.bonuses;
        self.coi_rates = loaded.coi_rates;
        self
    }

    /// Both illustration presets, standard first
    pub fn preset_rates(&self) -> [f64; 2] {
        [self.default_interest_rate, self.high_interest_rate]
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the yearly roll-forward for a single policy at a flat crediting rate
    ///
    /// Stops early once the account value is exhausted; the last row then
    /// shows an account value of 0.
    pub fn project_policy(&self, policy: &IllustrationPolicy, interest_rate: f64) -> ProjectionResult {
        let policy = policy.sanitized();
        let interest_rate = finite_or_zero("interest_rate", interest_rate);
        let horizon = policy.projection_years(
            self.config.max_years.min(MAX_PROJECTION_YEARS),
            self.config.terminal_age.min(TERMINAL_AGE),
        );

        let mut result = ProjectionResult::new(policy.policy_id, interest_rate, horizon);
        let mut state = ProjectionState::from_policy(&policy);

        for _ in 0..horizon {
            state.advance_year(&policy);

            let row = self.project_year(&policy, &mut state, interest_rate);
            result.add_row(row);

            if state.is_lapsed() {
                log::debug!(
                    "policy {} lapsed in year {} at age {}",
                    policy.policy_id,
                    state.policy_year,
                    state.attained_age
                );
                break;
            }
        }

        result
    }

    /// Roll the account forward over one policy year
    fn project_year(
        &self,
        policy: &IllustrationPolicy,
        state: &mut ProjectionState,
        interest_rate: f64,
    ) -> YearProjection {
        let year = state.policy_year;
        let prior_value = state.account_value;

        let premium_paid = if policy.premium_due(year) {
            policy.annual_premium
        } else {
            0.0
        };
        state.accumulated_premium += premium_paid;

        let allocated_premium = self.config.initial_charges.allocate(year, premium_paid);
        let interest = (prior_value + allocated_premium) * interest_rate;
        let credited_value = prior_value + allocated_premium + interest;

        let sum_at_risk = (policy.sum_assured - credited_value).max(0.0);
        let cost_of_insurance = self.config.coi_rates.charge(state.attained_age, sum_at_risk);
        let admin_fee = finite_or_zero("admin_fee", self.config.admin_fee);

        let bonus = self
            .config
            .bonuses
            .total_for_year(year, premium_paid, credited_value);

        let account_value = (credited_value + bonus - cost_of_insurance - admin_fee).max(0.0);
        state.account_value = account_value;

        let surrender_value = if year <= SURRENDER_PENALTY_YEARS {
            0.0
        } else {
            account_value
        };

        YearProjection {
            year,
            age: state.attained_age,
            premium_paid,
            accumulated_premium: state.accumulated_premium,
            account_value,
            surrender_value,
            death_benefit: policy.sum_assured.max(account_value),
            premium_charge: premium_paid - allocated_premium,
            allocated_premium,
            interest,
            cost_of_insurance,
            admin_fee,
            bonus,
        }
    }
}
