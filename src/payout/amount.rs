// src/payout/amount.rs
//
// Input validation for the values users type, and ISK display formatting.
use std::num::NonZeroU32;

use crate::error::PayoutError;

/// Lenient pool parser: keeps only digits and '.', so "1,000,000.50 ISK"
/// reads as 1000000.5. Negative input is rejected rather than stripped.
pub fn parse_pool_amount(text: &str) -> Result<f64, PayoutError> {
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        return Err(PayoutError::InvalidPoolAmount(s!(text)));
    }
    let cleaned: String = trimmed.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    if cleaned.is_empty() || cleaned == "." || cleaned.matches('.').count() > 1 {
        return Err(PayoutError::InvalidPoolAmount(s!(text)));
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PayoutError::InvalidPoolAmount(s!(text)))
}

pub fn parse_share_weight(text: &str) -> Result<NonZeroU32, PayoutError> {
    text.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| PayoutError::InvalidShareWeight(s!(text)))
}

/// `Ok(None)` means "off".
pub fn parse_dynamic_default(text: &str) -> Result<Option<NonZeroU32>, PayoutError> {
    let t = text.trim();
    if t.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    t.parse::<NonZeroU32>()
        .map(Some)
        .map_err(|_| PayoutError::InvalidDynamicDefault(s!(text)))
}

/// Two decimals with ',' thousands separators: 1234567.891 → "1,234,567.89".
pub fn format_isk(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" reads badly; only sign values that survive rounding.
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    join!(if negative { "-" } else { "" }, &grouped, ".", frac)
}
