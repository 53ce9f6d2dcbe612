//! CSV loaders for the subject catalog, per-subject configs, and holidays.
//!
//! # Catalog CSV
//!
//! One row per class.  The subject list is a single comma-separated field,
//! so it must be quoted:
//!
//! ```csv
//! class,subjects
//! 9,"Marathi, Hindi, English, Math, Science"
//! 10,"English, Math I, Math II, Science I, Science II, History"
//! ```
//!
//! A class that appears twice keeps its *last* row.
//!
//! # Subject config CSV
//!
//! ```csv
//! subject,session,start_time,duration,gap_days
//! Math,Morning,09:00,2 hours,0
//! Science,Afternoon,14:00,1,2
//! ```
//!
//! `session` is case-insensitive, `duration` accepts `2` or `2 hours`, and
//! `gap_days` must be 0–3.  `start_time` is kept as text: it is validated by
//! the generator so that a bad time stops the run, not the load.  Subjects
//! absent from this file get `SubjectConfig::default()` at generation time.
//!
//! # Holiday CSV
//!
//! ```csv
//! date,name
//! 2025-08-15,Independence Day
//! ```
//!
//! Only `date` (`YYYY-MM-DD`) is read; other columns are ignored.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info};
use serde::Deserialize;

use tt_core::config::checked_gap_days;
use tt_core::{ExamDuration, ExamSession, HolidaySet, SubjectConfig};

use crate::{CatalogError, CatalogResult, SubjectCatalog};

/// Per-subject configs keyed by subject name.
pub type SubjectConfigs = HashMap<String, SubjectConfig>;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    class:    String,
    subjects: String,
}

#[derive(Deserialize)]
struct SubjectConfigRecord {
    subject:    String,
    session:    String,
    start_time: String,
    duration:   String,
    gap_days:   u8,
}

#[derive(Deserialize)]
struct HolidayRecord {
    date: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`SubjectCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path) -> CatalogResult<SubjectCatalog> {
    let file = std::fs::File::open(path)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_catalog_reader<R: Read>(reader: R) -> CatalogResult<SubjectCatalog> {
    let mut catalog = SubjectCatalog::new();
    for (i, result) in csv_reader(reader).deserialize::<CatalogRecord>().enumerate() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        if row.class.is_empty() {
            return Err(CatalogError::Parse(format!("row {}: empty class label", i + 1)));
        }
        if catalog.subjects(&row.class).is_some() {
            debug!("class {:?} listed again; keeping the later row", row.class);
        }
        catalog.insert(&row.class, row.subjects.split(','));
    }
    info!("loaded subject catalog with {} classes", catalog.len());
    Ok(catalog)
}

/// Load per-subject configs from a CSV file.
pub fn load_subject_configs_csv(path: &Path) -> CatalogResult<SubjectConfigs> {
    let file = std::fs::File::open(path)?;
    load_subject_configs_reader(file)
}

/// Like [`load_subject_configs_csv`] but accepts any `Read` source.
pub fn load_subject_configs_reader<R: Read>(reader: R) -> CatalogResult<SubjectConfigs> {
    let mut configs = SubjectConfigs::new();
    for (i, result) in csv_reader(reader).deserialize::<SubjectConfigRecord>().enumerate() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let row_err = |e: tt_core::CoreError| {
            CatalogError::Parse(format!("row {} ({}): {e}", i + 1, row.subject))
        };

        let session: ExamSession = row.session.parse().map_err(row_err)?;
        let duration: ExamDuration = row.duration.parse().map_err(row_err)?;
        let gap_days = checked_gap_days(&row.subject, row.gap_days).map_err(row_err)?;

        let config = SubjectConfig {
            session,
            start_time: row.start_time,
            duration,
            gap_days,
        };
        if configs.insert(row.subject.clone(), config).is_some() {
            debug!("subject {:?} configured twice; keeping the later row", row.subject);
        }
    }
    Ok(configs)
}

/// Load a [`HolidaySet`] from a CSV file.
pub fn load_holidays_csv(path: &Path) -> CatalogResult<HolidaySet> {
    let file = std::fs::File::open(path)?;
    load_holidays_reader(file)
}

/// Like [`load_holidays_csv`] but accepts any `Read` source.
pub fn load_holidays_reader<R: Read>(reader: R) -> CatalogResult<HolidaySet> {
    let mut holidays = HolidaySet::empty();
    for (i, result) in csv_reader(reader).deserialize::<HolidayRecord>().enumerate() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|_| {
            CatalogError::Parse(format!(
                "row {}: invalid holiday date {:?}: expected YYYY-MM-DD",
                i + 1,
                row.date
            ))
        })?;
        holidays.insert(date);
    }
    info!("loaded {} holidays", holidays.len());
    Ok(holidays)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}
