//! `TimetableOutputObserver<W>` — bridges `GenerationObserver` to a
//! `TimetableWriter`.

use tt_gen::{GenerationObserver, Timetable};

use crate::writer::TimetableWriter;
use crate::{OutputError, OutputResult};

/// A [`GenerationObserver`] that exports every finished variant through any
/// [`TimetableWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `generator.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TimetableOutputObserver<W: TimetableWriter> {
    writer:      W,
    class_label: String,
    last_error:  Option<OutputError>,
}

impl<W: TimetableWriter> TimetableOutputObserver<W> {
    pub fn new(writer: W, class_label: impl Into<String>) -> Self {
        Self {
            writer,
            class_label: class_label.into(),
            last_error:  None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TimetableWriter> GenerationObserver for TimetableOutputObserver<W> {
    fn on_variant_end(&mut self, timetable: &Timetable) {
        let result = self.writer.write_timetable(&self.class_label, timetable);
        self.store_err(result);
    }

    fn on_generation_end(&mut self, _variants: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
