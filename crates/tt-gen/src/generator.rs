//! The `Generator` struct and its per-variant assembly loop.

use chrono::NaiveDate;
use log::{debug, info, warn};

use tt_catalog::SubjectMapping;
use tt_core::{GenerationConfig, HolidaySet};

use crate::row::{Timetable, TimetableRow, TimetableSet, TruncationWarning, variant_label};
use crate::scheduler::{PreparedSubject, SubjectScheduler};
use crate::walker::CalendarWalker;
use crate::{GenerationObserver, SubjectOrder};

/// The timetable assembler.
///
/// Holds validated, read-only inputs; the only state that changes between
/// variants is the ordering policy's RNG.  For each variant:
///
/// 1. **Order**: copy the subject list and let the [`SubjectOrder`] permute it.
/// 2. **Walk**: starting from the start date, place each subject with the
///    [`CalendarWalker`], then build its exam row with the
///    [`SubjectScheduler`].
/// 3. **Cut off**: once the end date is passed, record a
///    [`TruncationWarning`] naming every subject left over and stop.
///
/// Create via [`GeneratorBuilder`][crate::GeneratorBuilder].
pub struct Generator<O: SubjectOrder> {
    /// Run settings (class, dates, variant count, …).
    pub config: GenerationConfig,

    /// Effective end date (explicit, or start + 20 days).
    pub end_date: NaiveDate,

    /// Subjects in catalog order, already validated.
    pub subjects: Vec<PreparedSubject>,

    pub holidays: HolidaySet,

    pub mapping: SubjectMapping,

    pub ordering: O,
}

impl<O: SubjectOrder> Generator<O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Generate every variant.
    ///
    /// Infallible: all validation happened in
    /// [`GeneratorBuilder::build`][crate::GeneratorBuilder::build].
    /// Truncated variants are kept and reported in
    /// [`TimetableSet::warnings`].
    pub fn run<Obs: GenerationObserver>(&mut self, observer: &mut Obs) -> TimetableSet {
        let variants = usize::from(self.config.variants);
        info!(
            "generating {variants} timetable(s) for class {} ({}): {} subjects, {} to {}",
            self.config.class_label,
            self.config.exam_type,
            self.subjects.len(),
            self.config.start_date,
            self.end_date,
        );

        let mut timetables = Vec::with_capacity(variants);
        let mut warnings = Vec::new();

        for n in 1..=variants {
            let label = variant_label(n);
            observer.on_variant_start(&label);

            let (timetable, warning) = self.generate_variant(n, label);
            if let Some(w) = warning {
                warn!("{w}");
                observer.on_truncated(&w);
                warnings.push(w);
            }
            info!(
                "{}: {} exams over {} days",
                timetable.label,
                timetable.exam_count(),
                timetable.len()
            );
            observer.on_variant_end(&timetable);
            timetables.push(timetable);
        }

        observer.on_generation_end(timetables.len());

        TimetableSet {
            class_label: self.config.class_label.clone(),
            exam_type:   self.config.exam_type.clone(),
            timetables,
            warnings,
        }
    }

    // ── Per-variant assembly ──────────────────────────────────────────────

    fn generate_variant(
        &mut self,
        n: usize,
        label: String,
    ) -> (Timetable, Option<TruncationWarning>) {
        let mut order: Vec<usize> = (0..self.subjects.len()).collect();
        self.ordering.arrange(n, &mut order);

        let walker = CalendarWalker::new(&self.holidays, self.end_date);
        let scheduler = SubjectScheduler::new(&self.mapping);

        let mut rows: Vec<TimetableRow> = Vec::new();
        let mut cursor = self.config.start_date;
        let mut stopped_at: Option<usize> = None;

        for (pos, &idx) in order.iter().enumerate() {
            if cursor > self.end_date {
                stopped_at = Some(pos);
                break;
            }

            let subject = &self.subjects[idx];
            let placement = walker.place_subject(cursor, subject.gap_days());
            rows.extend(placement.rows);

            let Some(exam_date) = placement.exam_date else {
                stopped_at = Some(pos);
                break;
            };
            debug!("{label}: {} on {exam_date}", subject.name);
            rows.push(TimetableRow::exam(exam_date, scheduler.schedule(subject)));
            cursor = placement.cursor;
        }

        let warning = stopped_at.map(|pos| TruncationWarning {
            variant:  label.clone(),
            unplaced: order[pos..]
                .iter()
                .map(|&i| self.subjects[i].name.clone())
                .collect(),
        });

        let timetable = Timetable { label, rows, truncated: warning.is_some() };
        (timetable, warning)
    }
}
