//! Scenario runner for batch illustrations
//!
//! Holds one config and runs many policies or crediting rates against it.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::policy::IllustrationPolicy;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Standard and optimistic illustrations of the same policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetComparison {
    pub default_rate: ProjectionResult,
    pub high_rate: ProjectionResult,
}

/// Pre-configured runner for batch illustrations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("data/assumptions"))?;
///
/// let results = runner.run_batch(&policies, 0.05);
/// let comparison = runner.run_presets(&policies[0]);
/// ```
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default in-memory config
    pub fn new() -> Self {
        Self::with_config(ProjectionConfig::default())
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::with_config(ProjectionConfig::from_csv_path(path)?))
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single illustration at the given rate
    pub fn run(&self, policy: &IllustrationPolicy, interest_rate: f64) -> ProjectionResult {
        self.engine.project_policy(policy, interest_rate)
    }

    /// Illustrate many policies at one rate, in parallel; output order follows input
    pub fn run_batch(&self, policies: &[IllustrationPolicy], interest_rate: f64) -> Vec<ProjectionResult> {
        log::info!("projecting {} policies at {:.2}%", policies.len(), interest_rate * 100.0);
        policies
            .par_iter()
            .map(|policy| self.engine.project_policy(policy, interest_rate))
            .collect()
    }

    /// Illustrate one policy at both config presets
    pub fn run_presets(&self, policy: &IllustrationPolicy) -> PresetComparison {
        let [default_rate, high_rate] = self.engine.config().preset_rates();
        PresetComparison {
            default_rate: self.engine.project_policy(policy, default_rate),
            high_rate: self.engine.project_policy(policy, high_rate),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_policy() -> IllustrationPolicy {
        IllustrationPolicy::new(35, 24_000_000.0, 1_200_000_000.0, 20)
    }

    #[test]
    fn test_higher_rate_higher_value() {
        let runner = ScenarioRunner::new();
        let results: Vec<_> = [0.03, 0.05, 0.07]
            .iter()
            .map(|&rate| runner.run(&test_policy(), rate))
            .collect();

        assert!(results[2].summary().final_account_value > results[0].summary().final_account_value);
    }

    #[test]
    fn test_presets() {
        let runner = ScenarioRunner::new();
        let comparison = runner.run_presets(&test_policy());

        assert_eq!(comparison.default_rate.interest_rate, 0.05);
        assert_eq!(comparison.high_rate.interest_rate, 0.07);
        assert!(
            comparison.high_rate.summary().final_account_value
                >= comparison.default_rate.summary().final_account_value
        );
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let policies: Vec<_> = (0..8)
            .map(|i| IllustrationPolicy::new(25 + i * 5, 10_000_000.0 + i as f64 * 1e6, 800_000_000.0, 15).with_id(i))
            .collect();

        let batch = runner.run_batch(&policies, 0.05);
        assert_eq!(batch.len(), policies.len());
        for (policy, result) in policies.iter().zip(&batch) {
            assert_eq!(result.policy_id, policy.policy_id);
            assert_eq!(*result, runner.run(policy, 0.05));
        }
    }
}
