//! Calendar walker: moves the date cursor for one subject placement.
//!
//! # Phases
//!
//! ```text
//! ① Gap    — emit rows until `gap_days` working days have been emitted as
//!            Gap.  Sundays/holidays met on the way are emitted as
//!            Holiday/Weekend and do not count toward the quota.
//! ② Skip   — while the cursor is a Sunday or holiday, emit
//!            Holiday/Weekend and advance.
//! ③ Check  — cursor past the end date → not placed.
//! ④ Exam   — the cursor date is the exam date; cursor moves one day on.
//! ```
//!
//! One row is emitted per day the cursor passes, so rows are contiguous and
//! strictly ascending.  No row is ever dated after the end date: if the end
//! date is crossed during ① or ② the walk stops there and reports the
//! subject as not placed, keeping the rows already emitted.

use chrono::NaiveDate;

use tt_core::HolidaySet;

use crate::row::TimetableRow;

/// Outcome of [`CalendarWalker::place_subject`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Gap and Holiday/Weekend rows emitted before the exam (no exam row).
    pub rows:      Vec<TimetableRow>,
    /// Cursor for the next subject: the day after the exam when placed,
    /// otherwise the first day the walk could not use.
    pub cursor:    NaiveDate,
    /// Date of the exam, or `None` if the end date was reached first.
    pub exam_date: Option<NaiveDate>,
}

impl Placement {
    #[inline]
    pub fn placed(&self) -> bool {
        self.exam_date.is_some()
    }

    fn unplaced(rows: Vec<TimetableRow>, cursor: NaiveDate) -> Self {
        Self { rows, cursor, exam_date: None }
    }
}

/// Walks the calendar against a holiday set and a hard end date.
#[derive(Clone, Copy, Debug)]
pub struct CalendarWalker<'a> {
    holidays: &'a HolidaySet,
    end_date: NaiveDate,
}

impl<'a> CalendarWalker<'a> {
    pub fn new(holidays: &'a HolidaySet, end_date: NaiveDate) -> Self {
        Self { holidays, end_date }
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Find the exam date for a subject needing `gap_days` gap days, starting
    /// from `cursor`.
    pub fn place_subject(&self, mut cursor: NaiveDate, gap_days: u8) -> Placement {
        let mut rows = Vec::with_capacity(usize::from(gap_days) + 2);

        // ── ① Gap phase ───────────────────────────────────────────────────
        let mut inserted = 0u8;
        while inserted < gap_days {
            if cursor > self.end_date {
                return Placement::unplaced(rows, cursor);
            }
            match self.holidays.off_day_kind(cursor) {
                Some(kind) => rows.push(TimetableRow::off_day(cursor, kind)),
                None => {
                    rows.push(TimetableRow::gap(cursor));
                    inserted += 1;
                }
            }
            let Some(next) = cursor.succ_opt() else {
                return Placement::unplaced(rows, cursor);
            };
            cursor = next;
        }

        // ── ② Skip phase ──────────────────────────────────────────────────
        while cursor <= self.end_date {
            let Some(kind) = self.holidays.off_day_kind(cursor) else {
                break;
            };
            rows.push(TimetableRow::off_day(cursor, kind));
            let Some(next) = cursor.succ_opt() else {
                return Placement::unplaced(rows, cursor);
            };
            cursor = next;
        }

        // ── ③ Placement check ─────────────────────────────────────────────
        if cursor > self.end_date {
            return Placement::unplaced(rows, cursor);
        }

        // ── ④ Exam ────────────────────────────────────────────────────────
        match cursor.succ_opt() {
            Some(next) => Placement { rows, cursor: next, exam_date: Some(cursor) },
            // Last representable date: nowhere to move the cursor afterwards.
            None => Placement::unplaced(rows, cursor),
        }
    }
}
