//! Goal funding calculators (retirement, protection, education)

mod education;
mod protection;
mod request;
mod result;
mod retirement;

pub use education::calculate_education;
pub use protection::calculate_protection;
pub use request::{
    EducationRequest, GoalRequest, ProtectionRequest, RetirementRequest, SocialInsurance,
};
pub use result::{GoalType, PlanResult};
pub use retirement::{calculate_retirement, PENSION_REPLACEMENT_RATIO};

/// Run the calculator matching the request's goal type
pub fn calculate_plan(request: &GoalRequest) -> PlanResult {
    match request {
        GoalRequest::Retirement(r) => calculate_retirement(r),
        GoalRequest::Protection(p) => calculate_protection(p),
        GoalRequest::Education(e) => calculate_education(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_goal_type() {
        let json = r#"{
            "goal_type": "protection",
            "annual_income": 240000000,
            "support_years": 10,
            "existing_cover": 500000000,
            "loans": 300000000,
            "emergency_fund": 100000000
        }"#;
        let request: GoalRequest = serde_json::from_str(json).unwrap();

        let plan = calculate_plan(&request);
        assert_eq!(plan.goal_type, GoalType::Protection);
        assert_eq!(plan.shortfall, 2_300_000_000.0);
    }

    #[test]
    fn test_every_goal_respects_non_negativity() {
        let requests = vec![
            GoalRequest::Retirement(RetirementRequest {
                current_age: 70.0,
                retire_age: 60.0,
                life_expectancy: 55.0,
                current_monthly_expense: -1.0,
                inflation_rate: -0.5,
                investment_rate: f64::NAN,
                current_savings: -100.0,
                social_insurance: None,
            }),
            GoalRequest::Protection(ProtectionRequest {
                annual_income: -10.0,
                support_years: 5.0,
                existing_cover: 1e12,
                loans: 0.0,
                emergency_fund: 0.0,
            }),
            GoalRequest::Education(EducationRequest {
                child_age: 20.0,
                university_start_age: 18.0,
                university_duration_years: -4.0,
                current_annual_tuition: f64::INFINITY,
                inflation_rate: 0.03,
                investment_rate: -0.02,
                current_savings: 0.0,
            }),
        ];

        for request in &requests {
            let plan = calculate_plan(request);
            assert!(plan.shortfall >= 0.0, "{:?}", plan);
            assert!(plan.monthly_saving_needed >= 0.0, "{:?}", plan);
        }
    }
}
