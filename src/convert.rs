//! Amount scaling between human decimals and base units.
//!
//! Two deliberately separate paths, mirroring the upstream payload contract:
//!
//! - [`convert_to_decimals`] scales by `10^decimals` from the mint table and
//!   rounds to the nearest base unit. Used for the taking amount.
//! - [`scale_usdc_amount`] scales by the fixed `10^6` literal and does NOT
//!   round. Used for the making amount, which is always USDC.
//!
//! Do not unify these: the making amount is pinned to `10^6` independently of
//! the table, so if USDC were ever not 6 decimals the two paths would
//! diverge. That fragility is part of the contract, not a bug to fix here.
//!
//! Amounts travel as `f64`, so values a double cannot represent exactly pick
//! up the usual representation error before scaling. There is also no
//! finite/non-negative bounds check: `"NaN"` and `"inf"` parse as floats and
//! flow through to the order service, which rejects them itself.

use crate::error::AdapterError;

/// Scale a human decimal amount to base units for a token with `decimals`
/// precision, rounding halves away from zero. Returns a base-10 string.
pub fn convert_to_decimals(value: &str, decimals: u8) -> Result<String, AdapterError> {
    let parsed = parse_amount(value)?;
    let scaled = parsed * 10f64.powi(i32::from(decimals));
    Ok(format!("{}", scaled.round()))
}

/// Scale a human USDC amount by the fixed `10^6` multiplier, without
/// rounding. Any fractional residue is rendered as-is.
pub fn scale_usdc_amount(value: &str) -> Result<String, AdapterError> {
    let parsed = parse_amount(value)?;
    Ok(format!("{}", parsed * 1_000_000f64))
}

fn parse_amount(value: &str) -> Result<f64, AdapterError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AdapterError::new(format!("invalid decimal amount: {value}")))
}
