//! `tt-gen` — exam timetable generation.
//!
//! # Per-variant loop
//!
//! ```text
//! for variant in 1..=config.variants:
//!   ① Order   — SubjectOrder::arrange permutes a copy of the subject list
//!               (independent shuffle per variant by default).
//!   ② Walk    — cursor = start date; for each subject:
//!                 cursor > end          → truncation warning, stop
//!                 CalendarWalker        → Gap / Holiday/Weekend rows
//!                 not placed            → truncation warning, stop
//!                 SubjectScheduler      → Exam row (times + mapping)
//!   ③ Collect — rows stored as "Timetable {variant}".
//! ```
//!
//! Input validation (start times, gap days, variant count) happens once in
//! [`GeneratorBuilder::build`], before any variant starts.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_core::GenerationConfig;
//! use tt_gen::{GeneratorBuilder, NoopObserver, RandomOrder};
//!
//! let mut generator = GeneratorBuilder::new(config, subjects, RandomOrder::from_entropy())
//!     .subject_configs(configs)
//!     .build()?;
//! let set = generator.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod observer;
pub mod ordering;
pub mod row;
pub mod scheduler;
pub mod session;
pub mod walker;

#[cfg(test)]
mod tests;

pub use builder::GeneratorBuilder;
pub use error::{GenError, GenResult};
pub use generator::Generator;
pub use observer::{GenerationObserver, NoopObserver};
pub use ordering::{CatalogOrder, RandomOrder, SubjectOrder};
pub use row::{ExamSlot, Timetable, TimetableRow, TimetableSet, TruncationWarning, variant_label};
pub use scheduler::{PreparedSubject, SubjectScheduler};
pub use session::GenerationSession;
pub use walker::{CalendarWalker, Placement};
