//! Retirement fund calculator
//!
//! Inflates today's expenses to the retirement date, nets off an estimated
//! social insurance pension, and values the drawdown years as an annuity-due
//! at the real (inflation-adjusted) rate of return.

use super::request::RetirementRequest;
use super::result::{GoalType, PlanResult};
use crate::tvm::{
    annuity_due_payment, future_value, pv_annuity_due, real_rate, years_between,
};

/// Share of the contribution salary paid out as pension
pub const PENSION_REPLACEMENT_RATIO: f64 = 0.60;

pub fn calculate_retirement(request: &RetirementRequest) -> PlanResult {
    let r = request.sanitized();

    let years_to_retire = years_between(r.current_age, r.retire_age);
    let years_in_retirement = years_between(r.retire_age, r.life_expectancy);

    let future_monthly_expense =
        future_value(r.current_monthly_expense, r.inflation_rate, years_to_retire);

    let estimated_pension = match &r.social_insurance {
        Some(si) if si.has_si => {
            future_value(si.salary_for_si, r.inflation_rate, years_to_retire)
                * PENSION_REPLACEMENT_RATIO
        }
        _ => 0.0,
    };

    let net_monthly_need = (future_monthly_expense - estimated_pension).max(0.0);
    let net_annual_need = net_monthly_need * 12.0;

    // Savings keep earning during drawdown while expenses keep inflating
    let drawdown_rate = real_rate(r.investment_rate, r.inflation_rate);
    let required_fund = pv_annuity_due(net_annual_need, drawdown_rate, years_in_retirement);

    let projected_savings = future_value(r.current_savings, r.investment_rate, years_to_retire);

    let plan = PlanResult::new(GoalType::Retirement, required_fund, projected_savings);

    let monthly = if plan.shortfall > 0.0 && years_to_retire > 0.0 {
        annuity_due_payment(plan.shortfall, r.investment_rate / 12.0, years_to_retire * 12.0)
    } else {
        0.0
    };

    log::debug!(
        "retirement plan: required={} projected={} shortfall={}",
        plan.required_amount,
        plan.current_amount,
        plan.shortfall
    );

    plan.with_monthly_saving(monthly)
        .with_detail("years_to_retire", years_to_retire)
        .with_detail("years_in_retirement", years_in_retirement)
        .with_detail("future_monthly_expense", future_monthly_expense.round())
        .with_detail("estimated_pension", estimated_pension.round())
        .with_detail("net_monthly_need", net_monthly_need.round())
        .with_detail("real_rate_pct", drawdown_rate * 100.0)
}
