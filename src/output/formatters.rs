//! Formatting utilities for terminal output

/// Format a count with thousands separators
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Share of `part` in `whole` as a percentage, zero when `whole` is zero
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Bar of `width` cells filled in proportion to `part / whole`
#[must_use]
pub fn ratio_bar(part: usize, whole: usize, width: usize) -> String {
    // Cast is safe: clamped to [0, width]
    let filled = ((percentage(part, whole) / 100.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
