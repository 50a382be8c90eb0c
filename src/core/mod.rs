//! Core data model: methods, reference sources, class records and counts.

pub mod counts;
pub mod method;
pub mod record;
pub mod source;

pub use counts::{CountIndex, CountTriple};
pub use method::{Method, METHODS};
pub use record::{is_valid_score, ClassRecord, MethodScores};
pub use source::SourceKey;

/// Parses a non-negative whole number, accepting integer-valued decimals
/// such as `"200.0"`.
pub(crate) fn parse_whole_number(raw: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_string());
    }
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| "not a number".to_string())?;
    if !value.is_finite() {
        return Err("not a finite number".to_string());
    }
    if value < 0.0 {
        return Err("must not be negative".to_string());
    }
    if value.fract() != 0.0 {
        return Err("must be a whole number".to_string());
    }
    // u64::MAX rounds up to 2^64 as f64, which is already out of range.
    if value >= u64::MAX as f64 {
        return Err("too large".to_string());
    }
    Ok(value as u64)
}
