//! Formatting utilities for terminal output

/// Badge showing a word's length, e.g. `④` for a four-letter word
///
/// Circled digits cover 1 through 20; longer words get a parenthesized number.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = word.chars().count();
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({n})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pluralize a count, e.g. `3 words` / `1 word`
#[must_use]
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
