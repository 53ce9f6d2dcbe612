//! The `TimetableWriter` trait implemented by export backends.

use tt_gen::Timetable;

use crate::OutputResult;

/// Trait implemented by export backends.
///
/// Errors surface through [`TimetableOutputObserver::take_error`][crate::TimetableOutputObserver::take_error]
/// when the writer is driven by a generation run.
pub trait TimetableWriter {
    /// Write one variant of `class_label`'s timetable.
    fn write_timetable(&mut self, class_label: &str, timetable: &Timetable) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
