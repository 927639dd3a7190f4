//! Plan result returned by every goal calculator

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::tvm::round_money;

/// Kind of financial goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Retirement,
    Protection,
    Education,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Retirement => "retirement",
            GoalType::Protection => "protection",
            GoalType::Education => "education",
        }
    }
}

/// Funding plan for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub goal_type: GoalType,

    /// Target fund at the goal horizon
    pub required_amount: f64,

    /// What existing savings (or cover) amount to at the horizon
    pub current_amount: f64,

    /// `max(0, required_amount - current_amount)`
    pub shortfall: f64,

    /// Level monthly contribution that closes the shortfall
    pub monthly_saving_needed: f64,

    /// Goal-specific intermediate values, keyed by name
    pub details: BTreeMap<String, f64>,
}

impl PlanResult {
    /// Build a result from unrounded amounts
    ///
    /// Required and current amounts are rounded first and the shortfall is
    /// taken between the rounded values, so the published figures always add up.
    pub fn new(goal_type: GoalType, required_amount: f64, current_amount: f64) -> Self {
        let required_amount = round_money(required_amount);
        let current_amount = round_money(current_amount);
        Self {
            goal_type,
            required_amount,
            current_amount,
            shortfall: (required_amount - current_amount).max(0.0),
            monthly_saving_needed: 0.0,
            details: BTreeMap::new(),
        }
    }

    /// Set the monthly contribution (rounded, never negative)
    pub fn with_monthly_saving(mut self, amount: f64) -> Self {
        self.monthly_saving_needed = round_money(amount.max(0.0));
        self
    }

    /// Record an intermediate value
    pub fn with_detail(mut self, key: &str, value: f64) -> Self {
        self.details.insert(key.to_string(), value);
        self
    }

    pub fn detail(&self, key: &str) -> Option<f64> {
        self.details.get(key).copied()
    }

    pub fn is_funded(&self) -> bool {
        self.shortfall <= 0.0
    }
}
