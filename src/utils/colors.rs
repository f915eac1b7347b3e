/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color for a lifecycle status string.
/// ok → green, reported → yellow, confirmed → red, fixed → blue.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "ok" => GREEN,
        "reported" => YELLOW,
        "confirmed" => RED,
        "fixed" => BLUE,
        _ => RESET,
    }
}

/// Returns GREY when the field is empty (None or ""), RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}
