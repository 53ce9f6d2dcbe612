//! Day classification and the holiday calendar.
//!
//! # Off days
//!
//! A date is an *off day* when it is listed in the [`HolidaySet`] or falls
//! on a Sunday.  Off days never carry an exam or count as a gap day.  When a
//! date is both, the holiday wins:
//!
//! ```text
//! in holiday set        → DayKind::Holiday
//! else Sunday           → DayKind::Weekend
//! else                  → working day (None)
//! ```
//!
//! Saturdays are ordinary working days.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

/// The four holidays shipped with the reference school calendar.
const REFERENCE_HOLIDAYS: [(i32, u32, u32); 4] = [
    (2025, 1, 26),
    (2025, 3, 29),
    (2025, 8, 15),
    (2025, 10, 2),
];

// ── DayKind ───────────────────────────────────────────────────────────────────

/// Classification of one calendar day in a timetable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// Listed in the holiday set.
    Holiday,
    /// A Sunday that is not a listed holiday.
    Weekend,
    /// Deliberately exam-free day before a subject's exam.
    Gap,
    /// A scheduled exam.
    Exam,
}

impl DayKind {
    /// Display label used in rendered and exported rows.
    ///
    /// Holidays and Sundays share one label.
    pub fn label(self) -> &'static str {
        match self {
            DayKind::Holiday | DayKind::Weekend => "Holiday/Weekend",
            DayKind::Gap => "Gap",
            DayKind::Exam => "Exam",
        }
    }

    #[inline]
    pub fn is_exam(self) -> bool {
        self == DayKind::Exam
    }

    /// `true` for `Holiday` and `Weekend`.
    #[inline]
    pub fn is_off_day(self) -> bool {
        matches!(self, DayKind::Holiday | DayKind::Weekend)
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `true` if `date` is a Sunday.
#[inline]
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

// ── HolidaySet ────────────────────────────────────────────────────────────────

/// A set of dates treated as non-working regardless of weekday.
///
/// Stored sorted so iteration and `Debug` output are in calendar order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// A calendar with no holidays (only Sundays are off days).
    pub fn empty() -> Self {
        Self { dates: BTreeSet::new() }
    }

    /// The reference school calendar: 26 Jan, 29 Mar, 15 Aug and 2 Oct 2025.
    pub fn reference() -> Self {
        REFERENCE_HOLIDAYS
            .iter()
            .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
            .collect()
    }

    /// Add a date.  Returns `false` if it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.dates.insert(date);
        self
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Classify `date` if it is an off day, or `None` for a working day.
    pub fn off_day_kind(&self, date: NaiveDate) -> Option<DayKind> {
        if self.contains(date) {
            Some(DayKind::Holiday)
        } else if is_sunday(date) {
            Some(DayKind::Weekend)
        } else {
            None
        }
    }

    /// `true` if an exam or gap day may fall on `date`.
    #[inline]
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.off_day_kind(date).is_none()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self { dates: iter.into_iter().collect() }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
