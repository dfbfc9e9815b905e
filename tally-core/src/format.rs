//! Formatting helpers shared across presentation layers.

/// Format a number with at most two decimals, trimming trailing zeros.
///
/// `1.142857` becomes `"1.14"`, `3.20` becomes `"3.2"`, `2.0` becomes `"2"`.
pub fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Pluralize a unit name for a formatted quantity.
pub fn pluralize(quantity: &str, unit: &str) -> String {
    if quantity == "1" {
        format!("{} {}", quantity, unit)
    } else {
        format!("{} {}s", quantity, unit)
    }
}
