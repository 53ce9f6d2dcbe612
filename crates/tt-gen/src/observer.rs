//! Generation observer trait for progress reporting and data collection.

use crate::row::{Timetable, TruncationWarning};

/// Callbacks invoked by [`Generator::run`][crate::Generator::run] at key
/// points of a generate action.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl GenerationObserver for ProgressPrinter {
///     fn on_variant_end(&mut self, timetable: &Timetable) {
///         println!("{}: {} exams", timetable.label, timetable.exam_count());
///     }
/// }
/// ```
pub trait GenerationObserver {
    /// Called before the first subject of a variant is placed.
    fn on_variant_start(&mut self, _label: &str) {}

    /// Called when a variant stops early because the end date was reached.
    fn on_truncated(&mut self, _warning: &TruncationWarning) {}

    /// Called with each finished variant, truncated or not.
    fn on_variant_end(&mut self, _timetable: &Timetable) {}

    /// Called once after the last variant.
    fn on_generation_end(&mut self, _variants: usize) {}
}

/// A [`GenerationObserver`] that does nothing.
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}
