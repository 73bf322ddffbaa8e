//! Field coercion helpers for raw CSV cells.
//!
//! Every helper is total: unparseable input becomes `None` instead of an
//! error, so a single bad cell never aborts the row it belongs to.

/// Trims a text cell, mapping empty strings to `None`.
#[must_use]
pub fn clean_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Parses a finite floating-point number.
#[must_use]
pub fn parse_float(value: Option<&str>) -> Option<f64> {
    let parsed = value?.trim().parse::<f64>().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Parses an area cell, stripping thousands separators first
/// (`"1,234.5"` becomes `1234.5`).
#[must_use]
pub fn parse_area(value: Option<&str>) -> Option<f64> {
    let stripped = value?.replace(',', "");
    parse_float(Some(&stripped))
}

/// Parses an integer cell.
///
/// Integral float text such as `"12.0"` is accepted; anything with a
/// fractional part is not.
#[must_use]
pub fn parse_integer(value: Option<&str>) -> Option<i64> {
    let trimmed = value?.trim();
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    let float = parse_float(Some(trimmed))?;
    #[allow(clippy::cast_possible_truncation)]
    let truncated = float as i64;
    #[allow(clippy::cast_precision_loss)]
    let exact = (truncated as f64 - float).abs() < f64::EPSILON;
    exact.then_some(truncated)
}
