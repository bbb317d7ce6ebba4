//! Shared formatting utilities for UI components.

/// Format a count with thousand separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a millimetre amount with one decimal.
pub fn format_mm(val: f64) -> String {
    if val.is_finite() {
        format!("{:.1}", val)
    } else {
        "-".to_string()
    }
}

/// Format an optional amount; absent values show a dash.
pub fn format_optional(val: Option<f64>) -> String {
    val.map_or_else(|| "-".to_string(), format_mm)
}
