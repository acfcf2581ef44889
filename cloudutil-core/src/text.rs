//! Small renderers for boolean flags and battery levels.

/// "yes" / "no".
pub fn friendly_bool(value: bool) -> &'static str {
    friendly_bool_or(value, "yes", "no")
}

/// [`friendly_bool`] with caller-chosen words.
pub fn friendly_bool_or<'a>(value: bool, if_true: &'a str, if_false: &'a str) -> &'a str {
    if value { if_true } else { if_false }
}

/// "enabled" / "disabled".
pub fn enabled(value: bool) -> &'static str {
    friendly_bool_or(value, "enabled", "disabled")
}

/// Render a fractional battery level (`0.0..=1.0`) as a percentage.
///
/// Rounded to at most three decimal places, trailing zeros trimmed:
/// `0.85` renders as "85%", `0.725` as "72.5%".
pub fn battery_percent(level: f64) -> String {
    let percent = (level * 100.0 * 1000.0).round() / 1000.0;
    if percent == percent.trunc() {
        format!("{percent:.0}%")
    } else {
        format!("{percent}%")
    }
}
