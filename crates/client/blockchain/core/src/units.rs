//! Conversion between display currency units and integer base units.
//!
//! The scale factor is `10^decimals`. The decimals value is configuration
//! (native-currency precision of the deployed chain), defaulting to
//! [`DEFAULT_DECIMALS`]. Excess fractional digits truncate; conversion never
//! rounds up.

use thiserror::Error;

/// Native-currency precision assumed when no configuration is supplied.
pub const DEFAULT_DECIMALS: u32 = 18;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("Empty amount")]
    Empty,

    #[error("Invalid amount `{0}`")]
    Malformed(String),

    #[error("Amount `{0}` overflows the base-unit range")]
    Overflow(String),
}

/// Parse a display-unit decimal string (e.g. `"0.5"`) into base units.
///
/// Fractional digits beyond `decimals` are truncated.
pub fn to_base_units(display: &str, decimals: u32) -> Result<u128, UnitsError> {
    let display = display.trim();
    if display.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (int_part, frac_part) = match display.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (display, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(UnitsError::Malformed(display.to_owned()));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(UnitsError::Malformed(display.to_owned()));
    }

    let scale = 10u128
        .checked_pow(decimals)
        .ok_or_else(|| UnitsError::Overflow(display.to_owned()))?;

    let int_value: u128 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| UnitsError::Overflow(display.to_owned()))?
    };

    let frac_digits = &frac_part[..frac_part.len().min(decimals as usize)];
    let frac_value: u128 = if frac_digits.is_empty() {
        0
    } else {
        let parsed: u128 = frac_digits
            .parse()
            .map_err(|_| UnitsError::Overflow(display.to_owned()))?;
        parsed * 10u128.pow(decimals - frac_digits.len() as u32)
    };

    int_value
        .checked_mul(scale)
        .and_then(|value| value.checked_add(frac_value))
        .ok_or_else(|| UnitsError::Overflow(display.to_owned()))
}

/// Format a base-unit amount as a display-unit decimal string.
///
/// Trailing fractional zeros are trimmed, so the output is canonical:
/// `500_000_000_000_000_000` base units at 18 decimals renders as `"0.5"`.
pub fn to_display_units(base: u128, decimals: u32) -> String {
    let Some(scale) = 10u128.checked_pow(decimals) else {
        return base.to_string();
    };

    let int = base / scale;
    let frac = base % scale;
    if frac == 0 {
        return int.to_string();
    }

    let digits = format!("{frac:0width$}", width = decimals as usize);
    format!("{int}.{}", digits.trim_end_matches('0'))
}
