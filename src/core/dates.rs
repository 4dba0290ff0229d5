use crate::core::error::ScoringError;
use chrono::{DateTime, NaiveDate, Utc};

/// Ten 365-day years in milliseconds; a gap this wide scores zero
const MAX_DIFF_MS: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.0 * 10.0;

/// Parse a birth date
///
/// Accepts `YYYY-MM-DD` (what a browser date input submits) and RFC 3339
/// timestamps, which are reduced to their UTC calendar date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, ScoringError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScoringError::InvalidDate("date is empty".into()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| ScoringError::InvalidDate(format!("could not parse {:?}", trimmed)))
}

/// Date-only compatibility estimate (0-100)
///
/// Linear falloff: identical dates score 100, ten years apart or more
/// scores 0.
#[inline]
pub fn date_compatibility(a: NaiveDate, b: NaiveDate) -> u8 {
    let difference_ms = a.signed_duration_since(b).num_milliseconds().abs() as f64;
    let score = 100.0 - (difference_ms / MAX_DIFF_MS) * 100.0;

    score.clamp(0.0, 100.0).round() as u8
}

/// Parse both dates and score them
pub fn score_date_compatibility(date_a: &str, date_b: &str) -> Result<u8, ScoringError> {
    let a = parse_birth_date(date_a)?;
    let b = parse_birth_date(date_b)?;

    Ok(date_compatibility(a, b))
}
