//! Flat, display-ready records for export backends.

use tt_core::DayKind;
use tt_core::time::{format_clock, format_day};
use tt_gen::TimetableRow;

/// Column headers, in record field order.
pub const HEADERS: [&str; 9] = [
    "Date",
    "Classification",
    "Subject",
    "Subject Index",
    "Subject (Local)",
    "Session",
    "Duration",
    "Start Time",
    "End Time",
];

/// Value of every exam column on a non-exam row.
pub const PLACEHOLDER: &str = "-";

/// One timetable row rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    /// `"Monday, 02-06-2025"`.
    pub date:           String,
    pub classification: String,
    pub subject:        String,
    /// Two-digit code; empty for an exam whose subject has no mapping.
    pub subject_index:  String,
    pub subject_local:  String,
    pub session:        String,
    pub duration:       String,
    pub start_time:     String,
    pub end_time:       String,
}

impl ExportRecord {
    pub fn from_row(row: &TimetableRow) -> Self {
        let date = format_day(row.date);
        let classification = row.kind.label().to_owned();

        match (&row.exam, row.kind) {
            (Some(slot), DayKind::Exam) => Self {
                date,
                classification,
                subject:       slot.subject.clone(),
                subject_index: slot.index_code.clone().unwrap_or_default(),
                subject_local: slot.local_name.clone(),
                session:       slot.session.to_string(),
                duration:      slot.duration.label(),
                start_time:    format_clock(slot.start),
                end_time:      format_clock(slot.end),
            },
            _ => {
                let dash = || PLACEHOLDER.to_owned();
                Self {
                    date,
                    classification,
                    subject:       dash(),
                    subject_index: dash(),
                    subject_local: dash(),
                    session:       dash(),
                    duration:      dash(),
                    start_time:    dash(),
                    end_time:      dash(),
                }
            }
        }
    }

    /// Fields in [`HEADERS`] order.
    pub fn fields(&self) -> [&str; 9] {
        [
            self.date.as_str(),
            self.classification.as_str(),
            self.subject.as_str(),
            self.subject_index.as_str(),
            self.subject_local.as_str(),
            self.session.as_str(),
            self.duration.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
        ]
    }
}
