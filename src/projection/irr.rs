//! Yield on surrender: the annual IRR of paying the illustrated premiums and
//! cashing out the surrender value at the end of the schedule

use super::schedule::YearProjection;

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 200;
const MIN_RATE: f64 = -0.99;
const MAX_RATE: f64 = 10.0;

/// Annual IRR of `cashflows`, where index `t` is the flow at the start of year `t`
///
/// Returns `None` when the flows never change sign or no root is bracketed.
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    let has_inflow = cashflows.iter().any(|&cf| cf > TOLERANCE);
    let has_outflow = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    if !has_inflow || !has_outflow {
        return None;
    }

    let mut rate = 0.05;
    for _ in 0..MAX_ITERATIONS {
        let (npv, slope) = npv_with_slope(cashflows, rate);
        if slope.abs() < 1e-20 {
            break;
        }

        let next = (rate - npv / slope).clamp(MIN_RATE, MAX_RATE);
        if (next - rate).abs() < TOLERANCE {
            return Some(next);
        }
        rate = next;
    }

    bisect(cashflows)
}

/// Yield earned by a policyholder who surrenders at the final projected year
pub fn surrender_yield(rows: &[YearProjection]) -> Option<f64> {
    let last = rows.last()?;
    let mut cashflows = vec![0.0; rows.len() + 1];

    // Premiums are paid at the start of each policy year
    for (t, row) in rows.iter().enumerate() {
        cashflows[t] -= row.premium_paid;
    }
    cashflows[rows.len()] += last.surrender_value;

    calculate_irr(&cashflows)
}

fn npv_with_slope(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let growth = 1.0 + rate;
    cashflows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(npv, slope), (t, &cf)| {
            let t = t as f64;
            (
                npv + cf / growth.powf(t),
                slope - t * cf / growth.powf(t + 1.0),
            )
        })
}

fn npv(cashflows: &[f64], rate: f64) -> f64 {
    npv_with_slope(cashflows, rate).0
}

fn bisect(cashflows: &[f64]) -> Option<f64> {
    let mut low = MIN_RATE;
    let mut high = MAX_RATE;
    let mut npv_low = npv(cashflows, low);

    if npv_low * npv(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv(cashflows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}
