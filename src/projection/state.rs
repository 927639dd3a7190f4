//! Roll-forward state carried between policy years

use crate::policy::IllustrationPolicy;

/// State of the illustrated account at the end of the latest projected year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Policy year just projected (0 before the first year)
    pub policy_year: u32,

    /// Attained age at the start of `policy_year`
    pub attained_age: u32,

    /// Account value carried into the next year
    pub account_value: f64,

    /// Premiums paid to date
    pub accumulated_premium: f64,
}

impl ProjectionState {
    /// Initialize state at issue
    pub fn from_policy(policy: &IllustrationPolicy) -> Self {
        Self {
            policy_year: 0,
            attained_age: policy.current_age,
            account_value: 0.0,
            accumulated_premium: 0.0,
        }
    }

    /// Advance to next policy year
    pub fn advance_year(&mut self, policy: &IllustrationPolicy) {
        self.policy_year += 1;
        self.attained_age = policy.attained_age(self.policy_year);
    }

    pub fn is_lapsed(&self) -> bool {
        self.policy_year > 0 && self.account_value <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_year() {
        let policy = IllustrationPolicy::new(40, 1000.0, 10_000.0, 5);
        let mut state = ProjectionState::from_policy(&policy);
        assert!(!state.is_lapsed());

        state.advance_year(&policy);
        assert_eq!(state.policy_year, 1);
        assert_eq!(state.attained_age, 40);

        state.advance_year(&policy);
        assert_eq!(state.attained_age, 41);
        assert!(state.is_lapsed());
    }
}
