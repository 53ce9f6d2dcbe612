//! `tt-catalog` — subject lists, subject mapping, and CSV loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`catalog`]  | `SubjectCatalog` (class label → ordered, unique subjects)    |
//! | [`mapping`]  | `SubjectMapping`, `MappedSubject` (index code + local name)  |
//! | [`loader`]   | `load_catalog_*`, `load_subject_configs_*`, `load_holidays_*`|
//! | [`error`]    | `CatalogError`, `CatalogResult<T>`                           |
//!
//! Everything here runs before generation.  Loader failures surface as
//! `CatalogError` and stop the caller before any timetable is built.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod mapping;


pub use catalog::SubjectCatalog;
pub use error::{CatalogError, CatalogResult};
pub use loader::{
    SubjectConfigs, load_catalog_csv, load_catalog_reader, load_holidays_csv,
    load_holidays_reader, load_subject_configs_csv, load_subject_configs_reader,
};
pub use mapping::{MappedSubject, SubjectMapping};
