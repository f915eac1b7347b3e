//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Render a downtime figure for human output.
///
/// Example: 14.5 → "14h 30m", None → "--"
pub fn hours2readable(hours: Option<f64>) -> String {
    match hours {
        None => "--".to_string(),
        Some(h) => {
            let total_minutes = (h * 60.0).round() as i64;
            format!("{:02}h {:02}m", total_minutes / 60, total_minutes % 60)
        }
    }
}

/// Downtime figure for export rows: fixed two decimals, "N/A" when absent.
pub fn hours2export(hours: Option<f64>) -> String {
    match hours {
        None => "N/A".to_string(),
        Some(h) => format!("{:.2}", h),
    }
}
