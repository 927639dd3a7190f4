//! Time-value-of-money primitives shared by the goal calculators
//!
//! All rates are annual decimal fractions unless the function says otherwise.
//! Periods are `f64` so fractional horizons (e.g. ages entered as 30.5) work.

/// Below this magnitude a discount rate is treated as zero
pub const RATE_EPSILON: f64 = 1e-6;

/// Normalise a numeric input: finite values pass through, anything else is 0
///
/// `field` names the input for the warning log.
pub fn finite_or_zero(field: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("non-finite value for {}: {}, treating as 0", field, value);
        0.0
    }
}

/// Span in years between two ages, floored at 0
pub fn years_between(from: f64, to: f64) -> f64 {
    (to - from).max(0.0)
}

/// Compound a present sum forward
///
/// A rate below -100% over a fractional horizon has no real value; the result is then 0.
pub fn future_value(present_value: f64, rate: f64, periods: f64) -> f64 {
    finite_or_zero("future_value", present_value * (1.0 + rate).powf(periods))
}

/// Present value of `periods` equal payments made at the start of each period
///
/// Falls back to `payment * periods` when `|rate| < RATE_EPSILON`.
pub fn pv_annuity_due(payment: f64, rate: f64, periods: f64) -> f64 {
    if periods <= 0.0 {
        return 0.0;
    }
    if rate.abs() < RATE_EPSILON {
        return payment * periods;
    }

    let v = 1.0 / (1.0 + rate);
    finite_or_zero(
        "pv_annuity_due",
        payment * (1.0 - v.powf(periods)) / rate * (1.0 + rate),
    )
}

/// Future value factor of an annuity-due: FV of 1 paid at the start of each period
pub fn fv_annuity_due_factor(rate: f64, periods: f64) -> f64 {
    if rate.abs() < RATE_EPSILON {
        return periods;
    }
    ((1.0 + rate).powf(periods) - 1.0) / rate * (1.0 + rate)
}

/// Level start-of-period payment whose accumulated value after `periods` equals `target`
///
/// Zero or negative `periods` means there is no time to save: returns 0.
pub fn annuity_due_payment(target: f64, rate: f64, periods: f64) -> f64 {
    if periods <= 0.0 {
        return 0.0;
    }
    if rate.abs() < RATE_EPSILON {
        return target / periods;
    }
    finite_or_zero("annuity_due_payment", target / fv_annuity_due_factor(rate, periods))
}

/// Real rate of return via the Fisher relation
///
/// An inflation rate of exactly -100% has no real rate; the result is then 0.
pub fn real_rate(nominal: f64, inflation: f64) -> f64 {
    let rate = (1.0 + nominal) / (1.0 + inflation) - 1.0;
    if rate.is_finite() {
        rate
    } else {
        0.0
    }
}

/// Round a monetary amount to the nearest whole currency unit
pub fn round_money(amount: f64) -> f64 {
    amount.round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_future_value() {
        assert_relative_eq!(future_value(1000.0, 0.05, 2.0), 1102.5, epsilon = 1e-9);
        assert_eq!(future_value(1000.0, 0.05, 0.0), 1000.0);
    }

    #[test]
    fn test_pv_annuity_due() {
        // 100 at the start of each of 3 years at 10%: 100 + 90.909 + 82.645
        let pv = pv_annuity_due(100.0, 0.10, 3.0);
        assert_abs_diff_eq!(pv, 273.5537, epsilon = 1e-3);
    }

    #[test]
    fn test_pv_annuity_due_zero_rate() {
        assert_eq!(pv_annuity_due(120.0, 0.0, 20.0), 2400.0);
        assert_eq!(pv_annuity_due(120.0, 5e-7, 20.0), 2400.0);
        assert_eq!(pv_annuity_due(120.0, 0.05, 0.0), 0.0);
    }

    #[test]
    fn test_annuity_due_payment_round_trips_factor() {
        let payment = annuity_due_payment(1_000_000.0, 0.005, 120.0);
        let accumulated = payment * fv_annuity_due_factor(0.005, 120.0);
        assert_relative_eq!(accumulated, 1_000_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_annuity_due_payment_zero_rate() {
        assert_eq!(annuity_due_payment(1200.0, 0.0, 12.0), 100.0);
        assert_eq!(annuity_due_payment(1200.0, 0.01, 0.0), 0.0);
    }

    #[test]
    fn test_real_rate() {
        assert_relative_eq!(real_rate(0.06, 0.04), 1.06 / 1.04 - 1.0);
        assert_eq!(real_rate(0.05, 0.05), 0.0);
        assert_eq!(real_rate(0.05, -1.0), 0.0);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero("rate", f64::NAN), 0.0);
        assert_eq!(finite_or_zero("rate", f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero("rate", 0.07), 0.07);
    }

    #[test]
    fn test_negative_base_fractional_horizon() {
        assert_eq!(future_value(1000.0, -1.5, 29.5), 0.0);
        assert_eq!(pv_annuity_due(1000.0, -1.5, 2.5), 0.0);
        assert_eq!(annuity_due_payment(1000.0, -1.5, 2.5), 0.0);
        // Whole periods stay well defined
        assert_relative_eq!(future_value(1000.0, -1.5, 2.0), 250.0);
    }

    #[test]
    fn test_years_between_floors_at_zero() {
        assert_eq!(years_between(60.0, 55.0), 0.0);
        assert_eq!(years_between(30.0, 60.0), 30.0);
    }
}
