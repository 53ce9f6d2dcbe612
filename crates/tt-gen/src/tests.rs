//! Unit and scenario tests for tt-gen.

use chrono::{NaiveDate, NaiveTime};

use tt_catalog::{SubjectConfigs, SubjectMapping};
use tt_core::{CoreError, DayKind, ExamDuration, ExamSession, GenerationConfig, HolidaySet, SubjectConfig};

use crate::{
    CalendarWalker, CatalogOrder, GenError, GenerationObserver, GenerationSession,
    GeneratorBuilder, NoopObserver, PreparedSubject, RandomOrder, SubjectScheduler, Timetable,
    TimetableRow, TruncationWarning,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn subject_cfg(start: &str, hours: u8, gap_days: u8) -> SubjectConfig {
    SubjectConfig::default()
        .with_start_time(start)
        .with_duration(ExamDuration::new(hours).unwrap())
        .with_gap_days(gap_days)
}

fn run_config(start: NaiveDate, end: Option<NaiveDate>, variants: u8) -> GenerationConfig {
    GenerationConfig {
        end_date: end,
        variants,
        ..GenerationConfig::new("10", start)
    }
}

/// Math (gap 0, 09:00, 2 h) and Science (gap 2, 10:00, 1 h).
fn math_science_configs() -> SubjectConfigs {
    let mut m = SubjectConfigs::new();
    m.insert("Math".into(), subject_cfg("09:00", 2, 0));
    m.insert("Science".into(), subject_cfg("10:00", 1, 2));
    m
}

/// Number of Gap rows in the contiguous non-exam run ending just before
/// `rows[idx]`.
fn gap_run_before(rows: &[TimetableRow], idx: usize) -> usize {
    rows[..idx]
        .iter()
        .rev()
        .take_while(|r| !r.kind.is_exam())
        .filter(|r| r.kind == DayKind::Gap)
        .count()
}

/// Structural invariants every generated timetable must satisfy.
fn assert_invariants(tt: &Timetable, start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) {
    if let Some(first) = tt.first_date() {
        assert_eq!(first, start, "{}: must begin at the start date", tt.label);
    }
    for w in tt.rows.windows(2) {
        assert_eq!(
            Some(w[1].date),
            w[0].date.succ_opt(),
            "{}: rows must be contiguous and strictly ascending",
            tt.label
        );
    }
    for r in &tt.rows {
        assert!(r.date <= end, "{}: row {} after end date", tt.label, r.date);
        assert_eq!(r.exam.is_some(), r.kind.is_exam());
        match holidays.off_day_kind(r.date) {
            Some(kind) => assert_eq!(r.kind, kind, "{}: off day {} misclassified", tt.label, r.date),
            None => assert!(!r.kind.is_off_day(), "{}: working day {} marked off", tt.label, r.date),
        }
    }
}

// ── CalendarWalker ────────────────────────────────────────────────────────────

#[cfg(test)]
mod walker {
    use super::*;

    fn walk(cursor: NaiveDate, end: NaiveDate, gap: u8) -> crate::Placement {
        let holidays = HolidaySet::reference();
        CalendarWalker::new(&holidays, end).place_subject(cursor, gap)
    }

    fn kinds(rows: &[TimetableRow]) -> Vec<(NaiveDate, DayKind)> {
        rows.iter().map(|r| (r.date, r.kind)).collect()
    }

    #[test]
    fn working_day_without_gap_places_immediately() {
        let p = walk(date(2025, 6, 2), date(2025, 6, 22), 0);
        assert!(p.placed());
        assert!(p.rows.is_empty());
        assert_eq!(p.exam_date, Some(date(2025, 6, 2)));
        assert_eq!(p.cursor, date(2025, 6, 3));
    }

    #[test]
    fn sunday_is_skipped() {
        let p = walk(date(2025, 6, 8), date(2025, 6, 22), 0);
        assert_eq!(kinds(&p.rows), vec![(date(2025, 6, 8), DayKind::Weekend)]);
        assert_eq!(p.exam_date, Some(date(2025, 6, 9)));
    }

    #[test]
    fn saturday_is_a_working_day() {
        let p = walk(date(2025, 6, 7), date(2025, 6, 22), 0);
        assert!(p.rows.is_empty());
        assert_eq!(p.exam_date, Some(date(2025, 6, 7)));
    }

    #[test]
    fn sunday_inside_gap_does_not_count() {
        // Sat gap, Sun off, Mon gap, exam Tue.
        let p = walk(date(2025, 6, 7), date(2025, 6, 22), 2);
        assert_eq!(
            kinds(&p.rows),
            vec![
                (date(2025, 6, 7), DayKind::Gap),
                (date(2025, 6, 8), DayKind::Weekend),
                (date(2025, 6, 9), DayKind::Gap),
            ]
        );
        assert_eq!(p.exam_date, Some(date(2025, 6, 10)));
    }

    #[test]
    fn skip_phase_runs_after_gap() {
        // Gap on Saturday, then the Sunday is skipped before the exam.
        let p = walk(date(2025, 6, 7), date(2025, 6, 22), 1);
        assert_eq!(
            kinds(&p.rows),
            vec![(date(2025, 6, 7), DayKind::Gap), (date(2025, 6, 8), DayKind::Weekend)]
        );
        assert_eq!(p.exam_date, Some(date(2025, 6, 9)));
    }

    #[test]
    fn listed_holiday_is_skipped() {
        // 15 Aug 2025 is a Friday.
        let p = walk(date(2025, 8, 15), date(2025, 8, 31), 0);
        assert_eq!(kinds(&p.rows), vec![(date(2025, 8, 15), DayKind::Holiday)]);
        assert_eq!(p.exam_date, Some(date(2025, 8, 16)));
    }

    #[test]
    fn exam_may_fall_on_the_end_date() {
        let p = walk(date(2025, 6, 5), date(2025, 6, 5), 0);
        assert_eq!(p.exam_date, Some(date(2025, 6, 5)));
    }

    #[test]
    fn end_date_reached_in_skip_phase() {
        let p = walk(date(2025, 6, 8), date(2025, 6, 8), 0);
        assert!(!p.placed());
        assert_eq!(kinds(&p.rows), vec![(date(2025, 6, 8), DayKind::Weekend)]);
        assert_eq!(p.cursor, date(2025, 6, 9));
    }

    #[test]
    fn end_date_reached_in_gap_phase_emits_nothing_past_it() {
        let p = walk(date(2025, 6, 2), date(2025, 6, 3), 3);
        assert!(!p.placed());
        assert_eq!(
            kinds(&p.rows),
            vec![(date(2025, 6, 2), DayKind::Gap), (date(2025, 6, 3), DayKind::Gap)]
        );
    }

    #[test]
    fn cursor_already_past_end() {
        let p = walk(date(2025, 6, 10), date(2025, 6, 1), 0);
        assert!(!p.placed());
        assert!(p.rows.is_empty());
    }
}

// ── SubjectScheduler ──────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn mapped_subject_gets_code_and_local_name() {
        let mapping = SubjectMapping::reference();
        let subject = PreparedSubject::prepare("Math", subject_cfg("09:00", 2, 0)).unwrap();
        let slot = SubjectScheduler::new(&mapping).schedule(&subject);

        assert_eq!(slot.subject, "Math");
        assert_eq!(slot.index_code.as_deref(), Some("04"));
        assert_eq!(slot.local_name, "गणित");
        assert_eq!(slot.session, ExamSession::Morning);
        assert_eq!(slot.start, clock(9, 0));
        assert_eq!(slot.end, clock(11, 0));
    }

    #[test]
    fn unmapped_subject_falls_back() {
        let mapping = SubjectMapping::reference();
        let subject = PreparedSubject::prepare("Robotics", SubjectConfig::default()).unwrap();
        let slot = SubjectScheduler::new(&mapping).schedule(&subject);
        assert_eq!(slot.index_code, None);
        assert_eq!(slot.local_name, "Robotics");
    }

    #[test]
    fn end_time_wraps_midnight() {
        let mapping = SubjectMapping::empty();
        let subject = PreparedSubject::prepare("Late", subject_cfg("23:00", 3, 0)).unwrap();
        let slot = SubjectScheduler::new(&mapping).schedule(&subject);
        assert_eq!(slot.end, clock(2, 0));
    }

    #[test]
    fn prepare_rejects_bad_time() {
        let err = PreparedSubject::prepare("Math", subject_cfg("25:99", 1, 0)).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTimeFormat { subject: "Math".into(), value: "25:99".into() }
        );
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn math_science_in_catalog_order() {
        let start = date(2025, 6, 2); // Monday
        let mut g = GeneratorBuilder::new(run_config(start, None, 1), ["Math", "Science"], CatalogOrder)
            .subject_configs(math_science_configs())
            .build()
            .unwrap();
        let set = g.run(&mut NoopObserver);
        let tt = &set.timetables[0];

        let got: Vec<_> = tt.rows.iter().map(|r| (r.date, r.kind, r.subject())).collect();
        assert_eq!(
            got,
            vec![
                (date(2025, 6, 2), DayKind::Exam, Some("Math")),
                (date(2025, 6, 3), DayKind::Gap, None),
                (date(2025, 6, 4), DayKind::Gap, None),
                (date(2025, 6, 5), DayKind::Exam, Some("Science")),
            ]
        );
        assert!(set.warnings.is_empty());
        assert!(!tt.truncated);
    }

    #[test]
    fn math_science_any_order() {
        let start = date(2025, 6, 2);
        let holidays = HolidaySet::reference();
        for seed in 0..16 {
            let mut g = GeneratorBuilder::new(
                run_config(start, None, 1),
                ["Math", "Science"],
                RandomOrder::seeded(seed),
            )
            .subject_configs(math_science_configs())
            .build()
            .unwrap();
            let set = g.run(&mut NoopObserver);
            let tt = &set.timetables[0];

            // No Sunday or holiday falls inside 2–5 June 2025 in either order.
            assert_eq!(tt.len(), 4, "seed {seed}");
            assert_eq!(tt.exam_count(), 2);
            assert_invariants(tt, start, date(2025, 6, 22), &holidays);

            for (idx, row) in tt.rows.iter().enumerate() {
                let Some(slot) = &row.exam else { continue };
                match slot.subject.as_str() {
                    "Math" => {
                        assert_eq!((slot.start, slot.end), (clock(9, 0), clock(11, 0)));
                        assert_eq!(gap_run_before(&tt.rows, idx), 0);
                    }
                    "Science" => {
                        assert_eq!((slot.start, slot.end), (clock(10, 0), clock(11, 0)));
                        assert_eq!(gap_run_before(&tt.rows, idx), 2);
                    }
                    other => panic!("unexpected subject {other}"),
                }
            }
        }
    }

    #[test]
    fn end_before_start_places_nothing() {
        let start = date(2025, 6, 10);
        let mut g = GeneratorBuilder::new(
            run_config(start, Some(date(2025, 6, 1)), 3),
            ["Math", "Science"],
            RandomOrder::seeded(1),
        )
        .subject_configs(math_science_configs())
        .build()
        .unwrap();
        let set = g.run(&mut NoopObserver);

        assert_eq!(set.len(), 3);
        assert_eq!(set.warnings.len(), 3);
        for (tt, w) in set.timetables.iter().zip(&set.warnings) {
            assert!(tt.is_empty());
            assert!(tt.truncated);
            assert_eq!(w.variant, tt.label);
            assert_eq!(w.unplaced.len(), 2);
        }
    }

    #[test]
    fn truncation_keeps_rows_and_names_unplaced_subjects() {
        let start = date(2025, 6, 2);
        let mut g = GeneratorBuilder::new(
            run_config(start, Some(date(2025, 6, 3)), 1),
            ["A", "B", "C"],
            CatalogOrder,
        )
        .build()
        .unwrap();
        let set = g.run(&mut NoopObserver);
        let tt = &set.timetables[0];

        assert_eq!(tt.subject_order(), vec!["A", "B"]);
        assert!(tt.truncated);
        assert_eq!(
            set.warnings,
            vec![TruncationWarning { variant: "Timetable 1".into(), unplaced: vec!["C".into()] }]
        );
    }

    #[test]
    fn truncation_inside_gap_phase() {
        let start = date(2025, 6, 2);
        let mut configs = SubjectConfigs::new();
        configs.insert("B".into(), subject_cfg("09:00", 1, 3));
        let mut g = GeneratorBuilder::new(
            run_config(start, Some(date(2025, 6, 3)), 1),
            ["A", "B"],
            CatalogOrder,
        )
        .subject_configs(configs)
        .build()
        .unwrap();
        let set = g.run(&mut NoopObserver);
        let tt = &set.timetables[0];

        let kinds: Vec<_> = tt.rows.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![DayKind::Exam, DayKind::Gap]);
        assert_eq!(tt.last_date(), Some(date(2025, 6, 3)));
        assert_eq!(set.warnings[0].unplaced, vec!["B".to_owned()]);
    }

    #[test]
    fn three_variants_each_satisfy_invariants() {
        let start = date(2025, 8, 9); // Saturday before the 15 Aug holiday
        let end = date(2025, 8, 29);
        let subjects = ["Marathi", "Hindi", "English", "Math", "Science", "History", "Geography"];
        let mut configs = SubjectConfigs::new();
        for (i, s) in subjects.iter().enumerate() {
            configs.insert((*s).into(), subject_cfg("10:30", (i % 3) as u8 + 1, (i % 4) as u8));
        }
        let holidays = HolidaySet::reference();

        let mut g = GeneratorBuilder::new(run_config(start, Some(end), 3), subjects, RandomOrder::seeded(42))
            .subject_configs(configs.clone())
            .holidays(holidays.clone())
            .build()
            .unwrap();
        let set = g.run(&mut NoopObserver);

        let labels: Vec<_> = set.timetables.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Timetable 1", "Timetable 2", "Timetable 3"]);

        for tt in &set.timetables {
            assert_invariants(tt, start, end, &holidays);

            let placed = tt.subject_order();
            let mut unique = placed.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), placed.len(), "{}: subject placed twice", tt.label);

            let unplaced = set
                .warnings
                .iter()
                .find(|w| w.variant == tt.label)
                .map_or(0, |w| w.unplaced.len());
            assert_eq!(placed.len() + unplaced, subjects.len());

            for (idx, row) in tt.rows.iter().enumerate() {
                if let Some(slot) = &row.exam {
                    let want = usize::from(configs[&slot.subject].gap_days);
                    assert_eq!(gap_run_before(&tt.rows, idx), want, "{} {}", tt.label, slot.subject);
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_every_variant() {
        let build = || {
            GeneratorBuilder::new(
                run_config(date(2025, 6, 2), None, 3),
                ["Math", "Science", "English", "History", "Drawing"],
                RandomOrder::seeded(2025),
            )
            .build()
            .unwrap()
            .run(&mut NoopObserver)
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn injected_holidays_replace_the_reference_set() {
        // With no holidays, Friday 15 Aug 2025 is an ordinary exam day.
        let mut g = GeneratorBuilder::new(run_config(date(2025, 8, 15), None, 1), ["Math"], CatalogOrder)
            .holidays(HolidaySet::empty())
            .build()
            .unwrap();
        let set = g.run(&mut NoopObserver);
        assert_eq!(set.timetables[0].rows[0].kind, DayKind::Exam);
    }

    #[test]
    fn duplicate_and_blank_subjects_are_dropped() {
        let g = GeneratorBuilder::new(
            run_config(date(2025, 6, 2), None, 1),
            ["Math", " Math ", "", "Science"],
            CatalogOrder,
        )
        .build()
        .unwrap();
        let names: Vec<_> = g.subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Math", "Science"]);
    }

    #[test]
    fn missing_config_uses_defaults() {
        let g = GeneratorBuilder::new(run_config(date(2025, 6, 2), None, 1), ["EVS"], CatalogOrder)
            .build()
            .unwrap();
        assert_eq!(g.subjects[0].config, SubjectConfig::default());
        assert_eq!(g.subjects[0].start, clock(9, 0));
    }

    #[test]
    fn empty_subject_list_gives_empty_variants() {
        let no_subjects: [&str; 0] = [];
        let mut g = GeneratorBuilder::new(run_config(date(2025, 6, 2), None, 2), no_subjects, CatalogOrder)
            .build()
            .unwrap();
        let set = g.run(&mut NoopObserver);
        assert_eq!(set.len(), 2);
        assert!(set.timetables.iter().all(Timetable::is_empty));
        assert!(set.warnings.is_empty());
    }

    #[test]
    fn invalid_start_time_halts_before_any_variant() {
        let mut configs = math_science_configs();
        configs.insert("Science".into(), subject_cfg("25:99", 1, 0));
        let result = GeneratorBuilder::new(
            run_config(date(2025, 6, 2), None, 3),
            ["Math", "Science"],
            RandomOrder::seeded(1),
        )
        .subject_configs(configs)
        .build();

        match result {
            Err(GenError::Core(CoreError::InvalidTimeFormat { subject, value })) => {
                assert_eq!(subject, "Science");
                assert_eq!(value, "25:99");
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("expected InvalidTimeFormat"),
        }
    }

    #[test]
    fn variant_count_out_of_range_is_rejected() {
        let result = GeneratorBuilder::new(run_config(date(2025, 6, 2), None, 4), ["Math"], CatalogOrder).build();
        assert!(matches!(result, Err(GenError::Core(CoreError::Config(_)))));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl GenerationObserver for Recorder {
        fn on_variant_start(&mut self, label: &str) {
            self.events.push(format!("start {label}"));
        }
        fn on_truncated(&mut self, warning: &TruncationWarning) {
            self.events.push(format!("truncated {}", warning.variant));
        }
        fn on_variant_end(&mut self, timetable: &Timetable) {
            self.events.push(format!("end {}", timetable.label));
        }
        fn on_generation_end(&mut self, variants: usize) {
            self.events.push(format!("done {variants}"));
        }
    }

    #[test]
    fn callbacks_fire_in_order() {
        let mut g = GeneratorBuilder::new(
            run_config(date(2025, 6, 10), Some(date(2025, 6, 1)), 2),
            ["Math"],
            CatalogOrder,
        )
        .build()
        .unwrap();
        let mut rec = Recorder::default();
        g.run(&mut rec);
        assert_eq!(
            rec.events,
            vec![
                "start Timetable 1",
                "truncated Timetable 1",
                "end Timetable 1",
                "start Timetable 2",
                "truncated Timetable 2",
                "end Timetable 2",
                "done 2",
            ]
        );
    }
}

// ── GenerationSession ─────────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use super::*;

    fn builder(configs: SubjectConfigs) -> GeneratorBuilder<CatalogOrder> {
        GeneratorBuilder::new(run_config(date(2025, 6, 2), None, 2), ["Math", "Science"], CatalogOrder)
            .subject_configs(configs)
    }

    #[test]
    fn generate_stores_latest_result() {
        let mut session = GenerationSession::new();
        assert!(session.latest().is_none());

        let set = session.generate(builder(math_science_configs()), &mut NoopObserver).unwrap();
        assert_eq!(set.len(), 2);
        assert!(session.latest().unwrap().get("Timetable 2").is_some());
    }

    #[test]
    fn failed_generation_discards_previous_result() {
        let mut session = GenerationSession::new();
        session.generate(builder(math_science_configs()), &mut NoopObserver).unwrap();

        let mut bad = math_science_configs();
        bad.insert("Math".into(), subject_cfg("25:99", 1, 0));
        assert!(session.generate(builder(bad), &mut NoopObserver).is_err());
        assert!(session.latest().is_none());
    }

    #[test]
    fn take_and_clear() {
        let mut session = GenerationSession::new();
        session.generate(builder(math_science_configs()), &mut NoopObserver).unwrap();
        assert!(session.take().is_some());
        assert!(session.latest().is_none());

        session.generate(builder(math_science_configs()), &mut NoopObserver).unwrap();
        session.clear();
        assert!(session.latest().is_none());
    }
}
