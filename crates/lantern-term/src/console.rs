//! Console-width rules.

/// Width of the console in columns.
///
/// Read from the `COLUMNS` environment variable; falls back to 80 when
/// unset, unparsable, or zero.
pub fn console_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&w| w > 0)
        .unwrap_or(80)
}

/// Print a horizontal rule as wide as the console.
pub fn rule() {
    println!("{}", rule_string(console_width()));
}

/// Print `label` followed by a rule filling the rest of the console line.
pub fn rule_labeled(label: &str) {
    println!("{}", rule_labeled_string(label, console_width()));
}

pub(crate) fn rule_string(width: usize) -> String {
    "-".repeat(width.saturating_sub(1))
}

pub(crate) fn rule_labeled_string(label: &str, width: usize) -> String {
    let used = label.chars().count() + 1;
    format!(
        "{label} {}",
        "-".repeat(width.saturating_sub(1).saturating_sub(used))
    )
}
