//! `tt-output` — export writers for generated timetables.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `{class}_timetable_1.csv`, `{class}_timetable_2.csv`, … |
//!
//! Every backend implements [`TimetableWriter`] and can be driven by
//! [`TimetableOutputObserver`], which implements
//! `tt_gen::GenerationObserver` and writes each variant as it completes.
//!
//! Rows are flattened to [`ExportRecord`]s first: exam fields on Gap and
//! Holiday/Weekend rows are rendered as the `-` placeholder.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{CsvWriter, TimetableOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = TimetableOutputObserver::new(writer, &config.class_label);
//! generator.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("export error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod filename;
pub mod observer;
pub mod record;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use filename::export_file_name;
pub use observer::TimetableOutputObserver;
pub use record::{ExportRecord, HEADERS, PLACEHOLDER};
pub use writer::TimetableWriter;
