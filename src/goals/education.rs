//! Education fund calculator
//!
//! Tuition is inflated to the year the child starts university and the study
//! years are valued as an annuity-due at the real rate, as for retirement.

use super::request::EducationRequest;
use super::result::{GoalType, PlanResult};
use crate::tvm::{
    annuity_due_payment, future_value, pv_annuity_due, real_rate, years_between,
};

pub fn calculate_education(request: &EducationRequest) -> PlanResult {
    let r = request.sanitized();

    let years_to_university = years_between(r.child_age, r.university_start_age);
    let study_years = r.university_duration_years.max(0.0);

    let future_annual_tuition =
        future_value(r.current_annual_tuition, r.inflation_rate, years_to_university);

    let study_rate = real_rate(r.investment_rate, r.inflation_rate);
    let required_fund = pv_annuity_due(future_annual_tuition, study_rate, study_years);

    let projected_savings =
        future_value(r.current_savings, r.investment_rate, years_to_university);

    let plan = PlanResult::new(GoalType::Education, required_fund, projected_savings);

    // With no saving window left the whole gap is due now
    let monthly = if plan.shortfall <= 0.0 {
        0.0
    } else if years_to_university > 0.0 {
        annuity_due_payment(
            plan.shortfall,
            r.investment_rate / 12.0,
            years_to_university * 12.0,
        )
    } else {
        plan.shortfall
    };

    log::debug!(
        "education plan: required={} projected={} shortfall={}",
        plan.required_amount,
        plan.current_amount,
        plan.shortfall
    );

    plan.with_monthly_saving(monthly)
        .with_detail("years_to_university", years_to_university)
        .with_detail("university_duration_years", study_years)
        .with_detail("future_annual_tuition", future_annual_tuition.round())
        .with_detail("real_rate_pct", study_rate * 100.0)
}
