//! # Approximate human-readable durations.
//!
//! Renders an elapsed span as a single approximate phrase ("a few seconds",
//! "3 minutes", "an hour") instead of raw digits. Each unit is rounded to the
//! nearest whole value before the thresholds are checked, so 125 s reads as
//! "2 minutes".
//!
//! ## Default table
//! ```text
//! seconds <= 44   a few seconds
//! minutes <= 1    a minute
//! minutes <  45   N minutes
//! hours   <= 1    an hour
//! hours   <  22   N hours
//! days    <= 1    a day
//! days    <  26   N days
//! months  <= 1    a month
//! months  <  11   N months
//! years   <= 1    a year
//! otherwise       N years
//! ```
//!
//! With a custom `few_seconds` below `seconds`, spans in between read
//! "N seconds"; the defaults leave that band empty.

use std::time::Duration;

/// Mean days per month over the Gregorian cycle (146097 days / 4800 months).
const DAYS_PER_MONTH: f64 = 146_097.0 / 4_800.0;
/// Mean days per year over the Gregorian cycle.
const DAYS_PER_YEAR: f64 = 146_097.0 / 400.0;

/// Cut-over points between units.
///
/// Each field is compared against the span rounded to that unit. The defaults
/// produce the table in the module docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HumanizeThresholds {
    /// Up to this many seconds reads "a few seconds".
    pub few_seconds: u64,
    /// Below this many seconds reads "N seconds".
    pub seconds: u64,
    /// Below this many minutes reads "N minutes".
    pub minutes: u64,
    /// Below this many hours reads "N hours".
    pub hours: u64,
    /// Below this many days reads "N days".
    pub days: u64,
    /// Below this many months reads "N months".
    pub months: u64,
}

impl Default for HumanizeThresholds {
    fn default() -> Self {
        Self {
            few_seconds: 44,
            seconds: 45,
            minutes: 45,
            hours: 22,
            days: 26,
            months: 11,
        }
    }
}

/// Renders `elapsed` as an approximate phrase.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use outage_console::{humanize, HumanizeThresholds};
///
/// let t = HumanizeThresholds::default();
/// assert_eq!(humanize(Duration::from_millis(125_000), &t), "2 minutes");
/// assert_eq!(humanize(Duration::from_secs(3_600), &t), "an hour");
/// ```
pub fn humanize(elapsed: Duration, t: &HumanizeThresholds) -> String {
    let secs = elapsed.as_secs_f64();
    let seconds = rounded(secs);
    let minutes = rounded(secs / 60.0);
    let hours = rounded(secs / 3_600.0);
    let days_f = secs / 86_400.0;
    let days = rounded(days_f);
    let months = rounded(days_f / DAYS_PER_MONTH);
    let years = rounded(days_f / DAYS_PER_YEAR);

    if seconds <= t.few_seconds {
        "a few seconds".to_owned()
    } else if seconds < t.seconds {
        format!("{seconds} seconds")
    } else if minutes <= 1 {
        "a minute".to_owned()
    } else if minutes < t.minutes {
        format!("{minutes} minutes")
    } else if hours <= 1 {
        "an hour".to_owned()
    } else if hours < t.hours {
        format!("{hours} hours")
    } else if days <= 1 {
        "a day".to_owned()
    } else if days < t.days {
        format!("{days} days")
    } else if months <= 1 {
        "a month".to_owned()
    } else if months < t.months {
        format!("{months} months")
    } else if years <= 1 {
        "a year".to_owned()
    } else {
        format!("{years} years")
    }
}

#[inline]
fn rounded(v: f64) -> u64 {
    // Saturating float-to-int cast; NaN maps to 0.
    v.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(d: Duration) -> String {
        humanize(d, &HumanizeThresholds::default())
    }

    const MIN: u64 = 60;
    const HOUR: u64 = 60 * MIN;
    const DAY: u64 = 24 * HOUR;

    #[test]
    fn sub_minute_spans() {
        assert_eq!(h(Duration::ZERO), "a few seconds");
        assert_eq!(h(Duration::from_secs(44)), "a few seconds");
        assert_eq!(h(Duration::from_secs(45)), "a minute");
        assert_eq!(h(Duration::from_secs(89)), "a minute");
    }

    #[test]
    fn minutes_round_to_nearest() {
        assert_eq!(h(Duration::from_millis(125_000)), "2 minutes");
        assert_eq!(h(Duration::from_secs(150)), "3 minutes");
        assert_eq!(h(Duration::from_secs(44 * MIN)), "44 minutes");
        assert_eq!(h(Duration::from_secs(45 * MIN)), "an hour");
    }

    #[test]
    fn hours_and_days() {
        assert_eq!(h(Duration::from_secs(2 * HOUR)), "2 hours");
        assert_eq!(h(Duration::from_secs(21 * HOUR)), "21 hours");
        assert_eq!(h(Duration::from_secs(22 * HOUR)), "a day");
        assert_eq!(h(Duration::from_secs(3 * DAY)), "3 days");
    }

    #[test]
    fn months_and_years() {
        assert_eq!(h(Duration::from_secs(26 * DAY)), "a month");
        assert_eq!(h(Duration::from_secs(95 * DAY)), "3 months");
        assert_eq!(h(Duration::from_secs(340 * DAY)), "a year");
        assert_eq!(h(Duration::from_secs(3 * 365 * DAY)), "3 years");
    }

    #[test]
    fn default_thresholds_have_no_seconds_band() {
        for ms in (40_000..50_000).step_by(100) {
            let phrase = h(Duration::from_millis(ms));
            assert!(
                phrase == "a few seconds" || phrase == "a minute",
                "{ms} ms read {phrase:?}"
            );
        }
        assert_eq!(h(Duration::from_millis(44_600)), "a minute");
    }

    #[test]
    fn custom_thresholds_apply() {
        let t = HumanizeThresholds {
            few_seconds: 5,
            ..HumanizeThresholds::default()
        };
        assert_eq!(humanize(Duration::from_secs(20), &t), "20 seconds");
    }
}
