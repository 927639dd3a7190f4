//! Goal request records as supplied by the CRM forms

use serde::{Deserialize, Serialize};

use crate::tvm::finite_or_zero;

/// Social insurance participation used to offset retirement expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialInsurance {
    pub has_si: bool,
    /// Monthly salary on which social insurance contributions are based
    pub salary_for_si: f64,
}

/// Retirement funding goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementRequest {
    pub current_age: f64,
    pub retire_age: f64,
    pub life_expectancy: f64,
    /// Today's monthly living expense
    pub current_monthly_expense: f64,
    pub inflation_rate: f64,
    pub investment_rate: f64,
    pub current_savings: f64,
    pub social_insurance: Option<SocialInsurance>,
}

impl RetirementRequest {
    /// Copy with every non-finite number replaced by 0
    pub fn sanitized(&self) -> Self {
        Self {
            current_age: finite_or_zero("current_age", self.current_age),
            retire_age: finite_or_zero("retire_age", self.retire_age),
            life_expectancy: finite_or_zero("life_expectancy", self.life_expectancy),
            current_monthly_expense: finite_or_zero(
                "current_monthly_expense",
                self.current_monthly_expense,
            ),
            inflation_rate: finite_or_zero("inflation_rate", self.inflation_rate),
            investment_rate: finite_or_zero("investment_rate", self.investment_rate),
            current_savings: finite_or_zero("current_savings", self.current_savings),
            social_insurance: self.social_insurance.as_ref().map(|si| SocialInsurance {
                has_si: si.has_si,
                salary_for_si: finite_or_zero("salary_for_si", si.salary_for_si),
            }),
        }
    }
}

/// Income replacement (protection) goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectionRequest {
    pub annual_income: f64,
    /// Years the family needs the income replaced
    pub support_years: f64,
    /// Sum assured already in force
    pub existing_cover: f64,
    /// Outstanding loans to be cleared
    pub loans: f64,
    pub emergency_fund: f64,
}

impl ProtectionRequest {
    pub fn sanitized(&self) -> Self {
        Self {
            annual_income: finite_or_zero("annual_income", self.annual_income),
            support_years: finite_or_zero("support_years", self.support_years),
            existing_cover: finite_or_zero("existing_cover", self.existing_cover),
            loans: finite_or_zero("loans", self.loans),
            emergency_fund: finite_or_zero("emergency_fund", self.emergency_fund),
        }
    }
}

/// Child education funding goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRequest {
    pub child_age: f64,
    pub university_start_age: f64,
    pub university_duration_years: f64,
    /// Tuition per year at today's prices
    pub current_annual_tuition: f64,
    pub inflation_rate: f64,
    pub investment_rate: f64,
    pub current_savings: f64,
}

impl EducationRequest {
    pub fn sanitized(&self) -> Self {
        Self {
            child_age: finite_or_zero("child_age", self.child_age),
            university_start_age: finite_or_zero(
                "university_start_age",
                self.university_start_age,
            ),
            university_duration_years: finite_or_zero(
                "university_duration_years",
                self.university_duration_years,
            ),
            current_annual_tuition: finite_or_zero(
                "current_annual_tuition",
                self.current_annual_tuition,
            ),
            inflation_rate: finite_or_zero("inflation_rate", self.inflation_rate),
            investment_rate: finite_or_zero("investment_rate", self.investment_rate),
            current_savings: finite_or_zero("current_savings", self.current_savings),
        }
    }
}

/// Any goal request, tagged by `goal_type` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "goal_type", rename_all = "snake_case")]
pub enum GoalRequest {
    Retirement(RetirementRequest),
    Protection(ProtectionRequest),
    Education(EducationRequest),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_request_from_json() {
        let json = r#"{
            "goal_type": "retirement",
            "current_age": 35,
            "retire_age": 60,
            "social_insurance": { "has_si": true, "salary_for_si": 15000000 }
        }"#;

        let request: GoalRequest = serde_json::from_str(json).unwrap();
        match request {
            GoalRequest::Retirement(r) => {
                assert_eq!(r.current_age, 35.0);
                assert_eq!(r.retire_age, 60.0);
                // Omitted fields default to 0
                assert_eq!(r.life_expectancy, 0.0);
                assert_eq!(r.inflation_rate, 0.0);
                let si = r.social_insurance.unwrap();
                assert!(si.has_si);
                assert_eq!(si.salary_for_si, 15_000_000.0);
            }
            other => panic!("unexpected goal: {:?}", other),
        }
    }

    #[test]
    fn test_sanitized_replaces_nan() {
        let request = EducationRequest {
            child_age: f64::NAN,
            inflation_rate: f64::NAN,
            current_annual_tuition: 50_000_000.0,
            ..Default::default()
        };

        let clean = request.sanitized();
        assert_eq!(clean.child_age, 0.0);
        assert_eq!(clean.inflation_rate, 0.0);
        assert_eq!(clean.current_annual_tuition, 50_000_000.0);
    }
}
