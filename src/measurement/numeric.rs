//! Lenient cell coercion. Failures become `None`, never errors.

/// Parse a numeric cell. Blank, non-numeric, `NaN` and infinite values are missing.
#[must_use]
pub fn coerce_f64(cell: &str) -> Option<f64> {
    let value: f64 = cell.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse an input size. Sizes must be positive whole numbers; `"1000"` and
/// `"1000.0"` are both accepted.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_size(cell: &str) -> Option<u64> {
    let trimmed = cell.trim();
    if let Ok(size) = trimmed.parse::<u64>() {
        return (size > 0).then_some(size);
    }
    let value = coerce_f64(trimmed)?;
    // u64::MAX as f64 rounds up, so compare strictly below it
    if value < 1.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value as u64)
}

/// Normalize a scenario name: surrounding whitespace trimmed, case preserved.
/// A blank scenario is missing.
#[must_use]
pub fn coerce_scenario(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
