//! Exam clock times and durations.
//!
//! # Time model
//!
//! Start times are wall-clock `HH:MM` values with no date attached.  The end
//! time is plain time-of-day arithmetic:
//!
//!   end = (start + duration_hours) mod 24h
//!
//! so "23:00" + 3 hours renders as "02:00".  A wrapped end time is a display
//! artifact only; an exam is never moved to the following calendar day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use crate::{CoreError, CoreResult};

/// `strftime` pattern for start/end times.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// `strftime` pattern for row dates, e.g. `Monday, 02-06-2025`.
pub const DAY_FORMAT: &str = "%A, %d-%m-%Y";

// ── ExamDuration ──────────────────────────────────────────────────────────────

/// Length of an exam in whole hours (1–3).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct ExamDuration(u8);

impl ExamDuration {
    pub const MIN_HOURS: u8 = 1;
    pub const MAX_HOURS: u8 = 3;

    /// Validate an hour count.
    pub fn new(hours: u8) -> CoreResult<Self> {
        if (Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            Ok(ExamDuration(hours))
        } else {
            Err(CoreError::InvalidDuration(hours.to_string()))
        }
    }

    #[inline]
    pub fn hours(self) -> u8 {
        self.0
    }

    /// Human label: `"1 hour"`, `"2 hours"`, `"3 hours"`.
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 hour".to_owned()
        } else {
            format!("{} hours", self.0)
        }
    }
}

impl Default for ExamDuration {
    fn default() -> Self {
        ExamDuration(Self::MIN_HOURS)
    }
}

impl fmt::Display for ExamDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for ExamDuration {
    type Err = CoreError;

    /// Accepts a bare number (`"2"`) or a label (`"2 hours"`, `"1 hour"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_suffix("hours")
            .or_else(|| lower.strip_suffix("hour"))
            .unwrap_or(&lower)
            .trim();
        digits
            .parse::<u8>()
            .ok()
            .and_then(|h| ExamDuration::new(h).ok())
            .ok_or_else(|| CoreError::InvalidDuration(s.to_owned()))
    }
}

impl TryFrom<u8> for ExamDuration {
    type Error = CoreError;

    fn try_from(hours: u8) -> Result<Self, Self::Error> {
        ExamDuration::new(hours)
    }
}

impl From<ExamDuration> for u8 {
    fn from(d: ExamDuration) -> u8 {
        d.0
    }
}

// ── Clock helpers ─────────────────────────────────────────────────────────────

/// Parse a 24-hour `HH:MM` start time for `subject`.
///
/// Surrounding whitespace is ignored and a single-digit hour is accepted
/// (`"9:30"`).  Anything else, including out-of-range values such as
/// `"25:99"`, fails with [`CoreError::InvalidTimeFormat`].
pub fn parse_start_time(subject: &str, value: &str) -> CoreResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).map_err(|_| {
        CoreError::InvalidTimeFormat {
            subject: subject.to_owned(),
            value:   value.to_owned(),
        }
    })
}

/// `start + duration`, wrapping past midnight.
#[inline]
pub fn end_time(start: NaiveTime, duration: ExamDuration) -> NaiveTime {
    let (end, _wrapped_secs) =
        start.overflowing_add_signed(TimeDelta::hours(i64::from(duration.hours())));
    end
}

/// Render a clock time as `HH:MM`.
pub fn format_clock(t: NaiveTime) -> String {
    t.format(CLOCK_FORMAT).to_string()
}

/// Render a date with its weekday name, e.g. `Monday, 02-06-2025`.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}
