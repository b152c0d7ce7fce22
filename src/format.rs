//! Numeric formatting for axis labels and the status readout
//!
//! Two fixed-notation forms share one scientific-notation escape hatch:
//! any nonzero value with magnitude below 1e-4 or above 1e4 renders as
//! `<mantissa>E<exponent>` with a single-digit mantissa. Zero always
//! renders in fixed notation.

use crate::constants::format::{
    LABEL_DECIMALS, SCIENTIFIC_ABOVE, SCIENTIFIC_BELOW, STATUS_DECIMALS,
};

/// Axis-label form: fixed with up to six decimals, trailing zeros trimmed
pub fn label(x: f64) -> String {
    if needs_scientific(x) {
        return scientific(x);
    }
    let s = format!("{:.*}", LABEL_DECIMALS, x);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Status-readout form: fixed with exactly four decimals
pub fn status(x: f64) -> String {
    if needs_scientific(x) {
        return scientific(x);
    }
    format!("{:.*}", STATUS_DECIMALS, x)
}

fn needs_scientific(x: f64) -> bool {
    let mag = x.abs();
    mag > 0.0 && (mag < SCIENTIFIC_BELOW || mag > SCIENTIFIC_ABOVE)
}

/// `<mantissa>E<exponent>` with the mantissa rounded to one digit
fn scientific(x: f64) -> String {
    let mut exp = x.abs().log10().floor() as i32;
    let mut mantissa = (x / 10f64.powi(exp)).round();
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }
    format!("{}E{}", mantissa as i64, exp)
}
