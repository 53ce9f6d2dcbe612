//! Per-subject and per-run configuration.
//!
//! Both types are plain data built once before generation and never mutated
//! during a run.  `GenerationConfig` is typically loaded from a TOML run file
//! by the application (with the `serde` feature) and then overridden from the
//! command line.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::time::parse_start_time;
use crate::{CoreError, CoreResult, ExamDuration, ExamSession};

/// Start time given to subjects with no explicit configuration.
pub const DEFAULT_START_TIME: &str = "09:00";

/// Length of the exam window when no end date is given (end = start + 20 days).
pub const DEFAULT_WINDOW_DAYS: u64 = 20;

/// Largest allowed number of gap days before an exam.
pub const MAX_GAP_DAYS: u8 = 3;

/// Largest number of timetable variants generated by one action.
pub const MAX_VARIANTS: u8 = 3;

/// Exam type used when none is given.  Free text; never affects scheduling.
pub const DEFAULT_EXAM_TYPE: &str = "Unit Test";

// ── SubjectConfig ─────────────────────────────────────────────────────────────

/// Scheduling preferences for one subject.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectConfig {
    pub session:    ExamSession,
    /// Raw `HH:MM` text.  Kept unparsed until generation so that a bad value
    /// is reported against the run, not the loader.
    pub start_time: String,
    pub duration:   ExamDuration,
    /// Working days that must be left exam-free immediately before the exam.
    pub gap_days:   u8,
}

impl Default for SubjectConfig {
    /// Morning, 09:00, 1 hour, no gap.
    fn default() -> Self {
        Self {
            session:    ExamSession::Morning,
            start_time: DEFAULT_START_TIME.to_owned(),
            duration:   ExamDuration::default(),
            gap_days:   0,
        }
    }
}

impl SubjectConfig {
    pub fn with_session(mut self, session: ExamSession) -> Self {
        self.session = session;
        self
    }

    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn with_duration(mut self, duration: ExamDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_gap_days(mut self, gap_days: u8) -> Self {
        self.gap_days = gap_days;
        self
    }

    /// Check every field for `subject` and return the parsed start time.
    pub fn validate(&self, subject: &str) -> CoreResult<NaiveTime> {
        checked_gap_days(subject, self.gap_days)?;
        parse_start_time(subject, &self.start_time)
    }
}

/// Reject gap-day counts above [`MAX_GAP_DAYS`].
pub fn checked_gap_days(subject: &str, gap_days: u8) -> CoreResult<u8> {
    if gap_days > MAX_GAP_DAYS {
        return Err(CoreError::InvalidGapDays {
            subject: subject.to_owned(),
            got:     gap_days,
            max:     MAX_GAP_DAYS,
        });
    }
    Ok(gap_days)
}

// ── GenerationConfig ──────────────────────────────────────────────────────────

/// Top-level settings for one generate action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationConfig {
    /// Class whose subjects are scheduled (e.g. `"10"`).  Also names the
    /// exported files.
    pub class_label: String,

    /// Descriptive exam type (e.g. `"Terminal Exam"`).
    #[cfg_attr(feature = "serde", serde(default = "default_exam_type"))]
    pub exam_type: String,

    /// First date the calendar walk may use.
    pub start_date: NaiveDate,

    /// Last date an exam may fall on.  `None` means start + 20 days.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_date: Option<NaiveDate>,

    /// Number of independent timetable variants (1–3).
    #[cfg_attr(feature = "serde", serde(default = "default_variants"))]
    pub variants: u8,

    /// Root seed for subject shuffling.  `None` draws from OS entropy, so
    /// every action produces a fresh ordering.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// One variant, default exam type, 20-day window, unseeded.
    pub fn new(class_label: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            class_label: class_label.into(),
            exam_type:   DEFAULT_EXAM_TYPE.to_owned(),
            start_date,
            end_date:    None,
            variants:    1,
            seed:        None,
        }
    }

    /// The end date in effect for this run.
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(|| {
            self.start_date
                .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
                .unwrap_or(NaiveDate::MAX)
        })
    }

    /// Reject settings that cannot produce a run.
    ///
    /// An end date before the start date is *not* an error: the run simply
    /// places nothing and reports truncation for every variant.
    pub fn validate(&self) -> CoreResult<()> {
        if !(1..=MAX_VARIANTS).contains(&self.variants) {
            return Err(CoreError::Config(format!(
                "variant count {} out of range 1..={MAX_VARIANTS}",
                self.variants
            )));
        }
        if self.class_label.trim().is_empty() {
            return Err(CoreError::Config("class label is empty".to_owned()));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn default_exam_type() -> String {
    DEFAULT_EXAM_TYPE.to_owned()
}

#[cfg(feature = "serde")]
fn default_variants() -> u8 {
    1
}
