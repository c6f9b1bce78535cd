//! Number and label formatting for chart text.

/// Fixed-point value with `decimals` digits, e.g. `12.35`.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Whole number with comma thousands separators, e.g. `1,234,567`.
#[must_use]
pub fn with_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && digits.chars().any(|c| c != '0') {
        grouped.insert(0, '-');
    }
    grouped
}

/// First character upper-cased, the rest lower-cased.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
