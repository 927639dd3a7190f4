//! Hypothetical policy used for an investment-linked illustration

use serde::{Deserialize, Serialize};

use crate::tvm::finite_or_zero;

/// A single policy to illustrate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IllustrationPolicy {
    /// Identifier carried through to results (0 for ad-hoc illustrations)
    pub policy_id: u32,

    /// Age of the insured at issue
    pub current_age: u32,

    /// Planned annual premium
    pub annual_premium: f64,

    /// Guaranteed death benefit
    pub sum_assured: f64,

    /// Number of years premiums are paid
    pub payment_term: u32,
}

impl Default for IllustrationPolicy {
    fn default() -> Self {
        Self {
            policy_id: 0,
            current_age: 30,
            annual_premium: 0.0,
            sum_assured: 0.0,
            payment_term: 0,
        }
    }
}

impl IllustrationPolicy {
    pub fn new(current_age: u32, annual_premium: f64, sum_assured: f64, payment_term: u32) -> Self {
        Self {
            policy_id: 0,
            current_age,
            annual_premium,
            sum_assured,
            payment_term,
        }
    }

    pub fn with_id(mut self, policy_id: u32) -> Self {
        self.policy_id = policy_id;
        self
    }

    /// Copy with non-finite amounts replaced by 0
    pub fn sanitized(&self) -> Self {
        Self {
            annual_premium: finite_or_zero("annual_premium", self.annual_premium),
            sum_assured: finite_or_zero("sum_assured", self.sum_assured),
            ..self.clone()
        }
    }

    /// Whether a premium falls due in the given policy year
    pub fn premium_due(&self, policy_year: u32) -> bool {
        policy_year >= 1 && policy_year <= self.payment_term
    }

    /// Attained age at the start of a policy year (1-indexed)
    pub fn attained_age(&self, policy_year: u32) -> u32 {
        self.current_age + policy_year.saturating_sub(1)
    }

    /// Number of policy years to project under the year and age caps
    pub fn projection_years(&self, max_years: u32, terminal_age: u32) -> u32 {
        max_years.min(terminal_age.saturating_sub(self.current_age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_due() {
        let policy = IllustrationPolicy::new(30, 20_000_000.0, 1_000_000_000.0, 15);
        assert!(!policy.premium_due(0));
        assert!(policy.premium_due(1));
        assert!(policy.premium_due(15));
        assert!(!policy.premium_due(16));
    }

    #[test]
    fn test_attained_age() {
        let policy = IllustrationPolicy::new(30, 0.0, 0.0, 0);
        assert_eq!(policy.attained_age(1), 30);
        assert_eq!(policy.attained_age(10), 39);
    }

    #[test]
    fn test_projection_years() {
        assert_eq!(IllustrationPolicy::new(30, 0.0, 0.0, 0).projection_years(50, 99), 50);
        assert_eq!(IllustrationPolicy::new(60, 0.0, 0.0, 0).projection_years(50, 99), 39);
        assert_eq!(IllustrationPolicy::new(99, 0.0, 0.0, 0).projection_years(50, 99), 0);
        assert_eq!(IllustrationPolicy::new(105, 0.0, 0.0, 0).projection_years(50, 99), 0);
    }

    #[test]
    fn test_sanitized() {
        let policy = IllustrationPolicy::new(40, f64::NAN, f64::INFINITY, 10).sanitized();
        assert_eq!(policy.annual_premium, 0.0);
        assert_eq!(policy.sum_assured, 0.0);
        assert_eq!(policy.payment_term, 10);
    }
}
