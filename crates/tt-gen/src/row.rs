//! Output data types: rows, timetables, warnings.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use tt_core::{DayKind, ExamDuration, ExamSession};

// ── ExamSlot ──────────────────────────────────────────────────────────────────

/// Everything shown for a scheduled exam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamSlot {
    pub subject:    String,
    /// Two-digit code from the subject mapping; `None` for unmapped subjects.
    pub index_code: Option<String>,
    /// Localized name, or the subject name when unmapped.
    pub local_name: String,
    pub session:    ExamSession,
    pub duration:   ExamDuration,
    pub start:      NaiveTime,
    /// `start + duration`, wrapped to a time of day.
    pub end:        NaiveTime,
}

// ── TimetableRow ──────────────────────────────────────────────────────────────

/// One calendar day of a timetable.
///
/// `exam` is `Some` exactly when `kind == DayKind::Exam`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableRow {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub exam: Option<ExamSlot>,
}

impl TimetableRow {
    /// A Holiday/Weekend row.
    pub fn off_day(date: NaiveDate, kind: DayKind) -> Self {
        debug_assert!(kind.is_off_day());
        Self { date, kind, exam: None }
    }

    pub fn gap(date: NaiveDate) -> Self {
        Self { date, kind: DayKind::Gap, exam: None }
    }

    pub fn exam(date: NaiveDate, slot: ExamSlot) -> Self {
        Self { date, kind: DayKind::Exam, exam: Some(slot) }
    }

    /// Subject name for exam rows.
    pub fn subject(&self) -> Option<&str> {
        self.exam.as_ref().map(|s| s.subject.as_str())
    }
}

// ── Timetable ─────────────────────────────────────────────────────────────────

/// One generated variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timetable {
    /// Stable label, `"Timetable 1"`, `"Timetable 2"`, …
    pub label:     String,
    /// Rows in strictly ascending date order, one per calendar day.
    pub rows:      Vec<TimetableRow>,
    /// `true` if the end date was reached before every subject was placed.
    pub truncated: bool,
}

impl Timetable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exam rows in date order.
    pub fn exams(&self) -> impl Iterator<Item = &TimetableRow> {
        self.rows.iter().filter(|r| r.kind.is_exam())
    }

    pub fn exam_count(&self) -> usize {
        self.exams().count()
    }

    /// Subjects in the order they were placed.
    pub fn subject_order(&self) -> Vec<&str> {
        self.rows.iter().filter_map(TimetableRow::subject).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }
}

/// Label for variant number `n` (1-based).
pub fn variant_label(n: usize) -> String {
    format!("Timetable {n}")
}

// ── Warnings ──────────────────────────────────────────────────────────────────

/// The end date was reached before all subjects of a variant were placed.
///
/// Not fatal: the variant keeps the rows emitted so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruncationWarning {
    pub variant:  String,
    /// Subjects left without an exam, in their shuffled order.
    pub unplaced: Vec<String>,
}

impl fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "end date reached before finishing all subjects in {} (unplaced: {})",
            self.variant,
            self.unplaced.join(", ")
        )
    }
}

// ── TimetableSet ──────────────────────────────────────────────────────────────

/// The result of one generate action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableSet {
    pub class_label: String,
    pub exam_type:   String,
    /// Variants in label order.
    pub timetables:  Vec<Timetable>,
    pub warnings:    Vec<TruncationWarning>,
}

impl TimetableSet {
    /// Look up a variant by label.
    pub fn get(&self, label: &str) -> Option<&Timetable> {
        self.timetables.iter().find(|t| t.label == label)
    }

    pub fn len(&self) -> usize {
        self.timetables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timetables.is_empty()
    }
}
