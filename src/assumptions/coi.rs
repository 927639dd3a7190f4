//! Age-banded cost-of-insurance rates
//!
//! The default ladder is a generic placeholder for illustrations, not any
//! insurer's pricing basis. Callers override it through `ProjectionConfig`.

use serde::{Deserialize, Serialize};

/// One band: applies from `min_age` until the next band starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoiBand {
    pub min_age: u32,
    /// Annual charge per 1,000 of sum at risk
    pub rate_per_mille: f64,
}

/// Cost-of-insurance ladder keyed by attained age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoiRateTable {
    /// Bands sorted by ascending `min_age`
    bands: Vec<CoiBand>,
}

impl CoiRateTable {
    pub fn new(mut bands: Vec<CoiBand>) -> Self {
        bands.sort_by_key(|b| b.min_age);
        Self { bands }
    }

    /// Generic ladder: 1, 3, 8, 15, 30 per mille from ages 0, 40, 50, 60, 70
    pub fn generic() -> Self {
        Self::new(vec![
            CoiBand { min_age: 0, rate_per_mille: 1.0 },
            CoiBand { min_age: 40, rate_per_mille: 3.0 },
            CoiBand { min_age: 50, rate_per_mille: 8.0 },
            CoiBand { min_age: 60, rate_per_mille: 15.0 },
            CoiBand { min_age: 70, rate_per_mille: 30.0 },
        ])
    }

    /// Annual charge rate (as a fraction of sum at risk) for an attained age
    pub fn annual_rate(&self, attained_age: u32) -> f64 {
        let per_mille = self
            .bands
            .iter()
            .take_while(|b| b.min_age <= attained_age)
            .last()
            .map(|b| b.rate_per_mille)
            .unwrap_or(0.0);

        if per_mille.is_finite() {
            per_mille / 1000.0
        } else {
            0.0
        }
    }

    /// Annual cost of insurance on `sum_at_risk`
    pub fn charge(&self, attained_age: u32, sum_at_risk: f64) -> f64 {
        sum_at_risk.max(0.0) * self.annual_rate(attained_age)
    }
}

impl Default for CoiRateTable {
    fn default() -> Self {
        Self::generic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generic_bands() {
        let table = CoiRateTable::generic();

        assert_relative_eq!(table.annual_rate(25), 0.001);
        assert_relative_eq!(table.annual_rate(39), 0.001);
        assert_relative_eq!(table.annual_rate(40), 0.003);
        assert_relative_eq!(table.annual_rate(55), 0.008);
        assert_relative_eq!(table.annual_rate(60), 0.015);
        assert_relative_eq!(table.annual_rate(98), 0.030);
    }

    #[test]
    fn test_charge_on_sum_at_risk() {
        let table = CoiRateTable::generic();
        assert_relative_eq!(table.charge(45, 1_000_000_000.0), 3_000_000.0);
        assert_eq!(table.charge(45, -5.0), 0.0);
    }

    #[test]
    fn test_unsorted_bands_and_gaps() {
        let table = CoiRateTable::new(vec![
            CoiBand { min_age: 50, rate_per_mille: 5.0 },
            CoiBand { min_age: 18, rate_per_mille: 2.0 },
        ]);
        // Below the first band there is no charge
        assert_eq!(table.annual_rate(10), 0.0);
        assert_relative_eq!(table.annual_rate(30), 0.002);
        assert_relative_eq!(table.annual_rate(51), 0.005);
    }
}
