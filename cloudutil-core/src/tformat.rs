//! Human-readable elapsed-time formatting.
//!
//! Converts an elapsed amount of time ("now minus some past timestamp")
//! into a string like "2 weeks, 3 days and 4 hours". Purely arithmetic:
//! weeks are 7 days and days are 24 hours, with no calendar, timezone or
//! leap-second awareness.

use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_WEEK: u64 = 604_800;

/// Anything that can be read as an elapsed second count.
///
/// Negative values lose their sign: the formatter only deals in
/// magnitudes, not direction. Magnitudes beyond `u64::MAX` seconds
/// saturate.
pub trait IntoSeconds {
    fn into_seconds(self) -> f64;
}

impl IntoSeconds for f64 {
    fn into_seconds(self) -> f64 {
        self
    }
}

impl IntoSeconds for f32 {
    fn into_seconds(self) -> f64 {
        f64::from(self)
    }
}

impl IntoSeconds for u64 {
    fn into_seconds(self) -> f64 {
        self as f64
    }
}

impl IntoSeconds for i64 {
    fn into_seconds(self) -> f64 {
        self as f64
    }
}

impl IntoSeconds for u32 {
    fn into_seconds(self) -> f64 {
        f64::from(self)
    }
}

impl IntoSeconds for i32 {
    fn into_seconds(self) -> f64 {
        f64::from(self)
    }
}

impl IntoSeconds for Duration {
    fn into_seconds(self) -> f64 {
        self.as_secs_f64()
    }
}

/// A whole second count decomposed into display units, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    pub fn from_seconds(total: u64) -> Self {
        let mut days = total / SECONDS_PER_DAY;
        let mut rest = total % SECONDS_PER_DAY;
        let weeks = days / 7;
        days %= 7;
        let hours = rest / SECONDS_PER_HOUR;
        rest %= SECONDS_PER_HOUR;
        let minutes = rest / SECONDS_PER_MINUTE;
        let seconds = rest % SECONDS_PER_MINUTE;
        Self {
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Inverse of [`Breakdown::from_seconds`].
    pub fn total_seconds(&self) -> u64 {
        self.weeks * SECONDS_PER_WEEK
            + self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    fn phrases(&self) -> Vec<String> {
        let units = [
            (self.weeks, "week"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];
        units
            .iter()
            .filter(|(magnitude, _)| *magnitude > 0)
            .map(|(magnitude, unit)| unit_phrase(*magnitude, unit))
            .collect()
    }
}

/// Rendering options for [`format_time_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormat {
    /// Interpret the amount as milliseconds instead of seconds.
    pub milliseconds: bool,
    /// Insert "and" before the final unit instead of a plain comma.
    pub pretty: bool,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            milliseconds: false,
            pretty: true,
        }
    }
}

/// Format an elapsed time with the default options (seconds, pretty).
///
/// ```
/// use cloudutil_core::tformat::format_time;
///
/// assert_eq!(format_time(3661), "1 hour, 1 minute and 1 second");
/// ```
pub fn format_time(amount: impl IntoSeconds) -> String {
    format_time_with(amount, TimeFormat::default())
}

/// Format an elapsed time.
///
/// The amount is rounded to the nearest whole second before decomposition.
/// Ties round to even (`0.5` rounds down to "less than a second", `1.5`
/// and `2.5` both round to "2 seconds"), so results are stable at exact
/// half-second inputs.
pub fn format_time_with(amount: impl IntoSeconds, options: TimeFormat) -> String {
    let mut seconds = amount.into_seconds();
    if options.milliseconds {
        seconds /= 1000.0;
    }
    let total = seconds.abs().round_ties_even() as u64;
    let phrases = Breakdown::from_seconds(total).phrases();
    if phrases.is_empty() {
        return "less than a second".to_owned();
    }
    let last = if options.pretty { Some("and") } else { None };
    pretty_sequence(&phrases, last)
}

/// Join a sequence into a comma-separated list, optionally placing a
/// conjunction ("and", "or", ...) before the final element.
///
/// ```
/// use cloudutil_core::tformat::pretty_sequence;
///
/// let langs = ["python", "c++", "basic", "assembly"];
/// assert_eq!(
///     pretty_sequence(&langs, Some("and")),
///     "python, c++, basic and assembly"
/// );
/// ```
pub fn pretty_sequence<S: AsRef<str>>(items: &[S], last: Option<&str>) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [head @ .., tail] => {
            let mut out = head
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            match last {
                Some(word) => {
                    out.push(' ');
                    out.push_str(word);
                    out.push(' ');
                }
                None => out.push_str(", "),
            }
            out.push_str(tail.as_ref());
            out
        }
    }
}

/// "1 week", "3 weeks": the unit name takes an "s" when the magnitude
/// is greater than one.
pub fn unit_phrase(magnitude: u64, unit: &str) -> String {
    if magnitude > 1 {
        format!("{magnitude} {unit}s")
    } else {
        format!("{magnitude} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(amount: impl IntoSeconds) -> String {
        format_time_with(
            amount,
            TimeFormat {
                milliseconds: false,
                pretty: false,
            },
        )
    }

    #[test]
    fn zero_is_less_than_a_second() {
        assert_eq!(format_time(0), "less than a second");
    }

    #[test]
    fn single_units() {
        assert_eq!(format_time(1), "1 second");
        assert_eq!(format_time(2), "2 seconds");
        assert_eq!(format_time(604_800), "1 week");
    }

    #[test]
    fn two_units_use_conjunction() {
        assert_eq!(format_time(61), "1 minute and 1 second");
    }

    #[test]
    fn cascading_units() {
        assert_eq!(format_time(3661), "1 hour, 1 minute and 1 second");
        assert_eq!(format_time(90_061), "1 day, 1 hour, 1 minute and 1 second");
    }

    #[test]
    fn milliseconds_divide_first() {
        let options = TimeFormat {
            milliseconds: true,
            pretty: true,
        };
        assert_eq!(format_time_with(1000, options), "1 second");
        assert_eq!(format_time_with(500, options), "less than a second");
    }

    #[test]
    fn plain_join_has_no_conjunction() {
        assert_eq!(plain(3661), "1 hour, 1 minute, 1 second");
    }

    #[test]
    fn sign_is_discarded() {
        assert_eq!(format_time(-5), format_time(5));
        assert_eq!(format_time(-5), "5 seconds");
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(format_time(0.5), "less than a second");
        assert_eq!(format_time(1.5), "2 seconds");
        assert_eq!(format_time(2.5), "2 seconds");
    }

    #[test]
    fn duration_amounts() {
        assert_eq!(
            format_time(std::time::Duration::from_millis(61_400)),
            "1 minute and 1 second"
        );
    }

    #[test]
    fn breakdown_reconstructs_input() {
        for total in [0, 1, 59, 60, 61, 3661, 86_399, 90_061, 604_800, 12_345_678] {
            let breakdown = Breakdown::from_seconds(total);
            assert_eq!(breakdown.total_seconds(), total, "total {total}");
            assert!(breakdown.days < 7);
            assert!(breakdown.hours < 24);
            assert!(breakdown.minutes < 60);
            assert!(breakdown.seconds < 60);
        }
    }

    #[test]
    fn large_amounts_do_not_panic() {
        // f64 -> u64 casts saturate; just make sure the result is sane.
        let out = format_time(f64::MAX);
        assert!(out.contains("weeks"), "unexpected output: {out}");
    }

    #[test]
    fn pretty_sequence_cases() {
        let empty: [&str; 0] = [];
        assert_eq!(pretty_sequence(&empty, Some("and")), "");
        assert_eq!(pretty_sequence(&["a"], Some("and")), "a");
        assert_eq!(pretty_sequence(&["a", "b"], Some("and")), "a and b");
        assert_eq!(pretty_sequence(&["a", "b", "c"], Some("and")), "a, b and c");
        assert_eq!(pretty_sequence(&["a", "b", "c"], None), "a, b, c");
        assert_eq!(pretty_sequence(&["a", "b"], Some("or")), "a or b");
    }

    #[test]
    fn unit_phrase_pluralizes_above_one() {
        assert_eq!(unit_phrase(1, "week"), "1 week");
        assert_eq!(unit_phrase(2, "week"), "2 weeks");
        assert_eq!(unit_phrase(0, "week"), "0 week");
    }
}
