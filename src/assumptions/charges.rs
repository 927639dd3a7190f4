//! Front-load (initial) premium charges by policy year

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Share of each year's premium deducted before allocation, by policy year
///
/// Years not listed carry no charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitialChargeSchedule {
    /// Charge rate by policy year (1-indexed)
    rates: BTreeMap<u32, f64>,
}

impl InitialChargeSchedule {
    pub fn new(rates: BTreeMap<u32, f64>) -> Self {
        Self { rates }
    }

    /// No front-load at all
    pub fn none() -> Self {
        Self { rates: BTreeMap::new() }
    }

    /// Illustrative four-year front-load
    pub fn default_four_year() -> Self {
        let rates = BTreeMap::from([
            (1, 0.85), // Year 1
            (2, 0.50), // Year 2
            (3, 0.15), // Year 3
            (4, 0.10), // Year 4
        ]);
        Self { rates }
    }

    /// Charge rate for a policy year; 0 when the year is not listed or the
    /// stored rate is not a finite number
    pub fn rate_for_year(&self, policy_year: u32) -> f64 {
        match self.rates.get(&policy_year) {
            Some(rate) if rate.is_finite() => *rate,
            _ => 0.0,
        }
    }

    /// Premium left for the account after the charge
    pub fn allocate(&self, policy_year: u32, premium: f64) -> f64 {
        premium * (1.0 - self.rate_for_year(policy_year))
    }
}

impl Default for InitialChargeSchedule {
    fn default() -> Self {
        Self::default_four_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_charges() {
        let charges = InitialChargeSchedule::default_four_year();

        assert_eq!(charges.rate_for_year(1), 0.85);
        assert_eq!(charges.rate_for_year(3), 0.15);
        assert_eq!(charges.rate_for_year(4), 0.10);
        assert_eq!(charges.rate_for_year(5), 0.0);
        assert_eq!(charges.rate_for_year(0), 0.0);
    }

    #[test]
    fn test_allocate() {
        let charges = InitialChargeSchedule::default_four_year();
        assert!((charges.allocate(2, 20_000_000.0) - 10_000_000.0).abs() < 1e-6);
        assert_eq!(charges.allocate(9, 20_000_000.0), 20_000_000.0);
    }

    #[test]
    fn test_non_finite_rate_counts_as_zero() {
        let charges = InitialChargeSchedule::new(BTreeMap::from([(1, f64::NAN)]));
        assert_eq!(charges.rate_for_year(1), 0.0);
    }

    #[test]
    fn test_json_uses_year_keys() {
        let charges: InitialChargeSchedule = serde_json::from_str(r#"{"1": 0.6, "2": 0.3}"#).unwrap();
        assert_eq!(charges.rate_for_year(1), 0.6);
        assert_eq!(charges.rate_for_year(2), 0.3);
        assert_eq!(charges.rate_for_year(3), 0.0);
    }
}
