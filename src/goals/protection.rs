//! Income protection calculator
//!
//! A point-in-time needs analysis: replaced income plus debts plus an
//! emergency reserve, less cover already in force. Protection gaps are closed
//! with insurance cover, so no monthly saving is ever proposed.

use super::request::ProtectionRequest;
use super::result::{GoalType, PlanResult};

pub fn calculate_protection(request: &ProtectionRequest) -> PlanResult {
    let r = request.sanitized();

    let support_years = r.support_years.max(0.0);
    let income_replacement = r.annual_income * support_years;
    let required_cover = income_replacement + r.loans + r.emergency_fund;

    let plan = PlanResult::new(GoalType::Protection, required_cover, r.existing_cover);

    log::debug!(
        "protection plan: required={} existing={} gap={}",
        plan.required_amount,
        plan.current_amount,
        plan.shortfall
    );

    plan.with_monthly_saving(0.0)
        .with_detail("support_years", support_years)
        .with_detail("income_replacement", income_replacement.round())
        .with_detail("loans", r.loans.round())
        .with_detail("emergency_fund", r.emergency_fund.round())
}
