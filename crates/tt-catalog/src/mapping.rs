//! Subject mapping: canonical name → (index code, localized display name).
//!
//! Official exam documents list each subject by a two-digit index code and
//! its Marathi name.  The [`reference`][SubjectMapping::reference] table
//! covers the subjects taught at the school; anything else falls back to no
//! index code and the original name.  Lookups are exact and case-sensitive.

use std::collections::HashMap;

/// (canonical name, index code, localized name).
const REFERENCE_TABLE: &[(&str, &str, &str)] = &[
    ("Marathi",    "01", "मराठी"),
    ("Hindi",      "02", "हिंदी"),
    ("English",    "03", "इंग्रजी"),
    ("Math",       "04", "गणित"),
    ("Math I",     "05", "गणित - I"),
    ("Math II",    "06", "गणित - II"),
    ("Science",    "07", "विज्ञान"),
    ("Science I",  "08", "विज्ञान - I"),
    ("Science II", "09", "विज्ञान - II"),
    ("History",    "10", "इतिहास"),
    ("Geography",  "11", "भूगोल"),
    ("Civics",     "12", "नागरिकशास्त्र"),
    ("EVS",        "13", "पर्यावरण"),
    ("Drawing",    "14", "चित्रकला"),
    ("Sanskrit",   "15", "संस्कृत"),
    ("Vocational", "16", "व्यावसायिक"),
    ("Urdu",       "17", "उर्दू"),
    ("German",     "34", "जर्मन"),
    ("French",     "35", "फ्रेंच"),
];

/// Mapping entry for one subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedSubject {
    pub index_code: String,
    pub local_name: String,
}

/// Lookup table from canonical subject name to [`MappedSubject`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectMapping {
    entries: HashMap<String, MappedSubject>,
}

impl SubjectMapping {
    /// A mapping with no entries; every subject falls back to its own name.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The school's reference table (19 subjects).
    pub fn reference() -> Self {
        let mut m = Self::empty();
        for &(name, code, local) in REFERENCE_TABLE {
            m.insert(name, code, local);
        }
        m
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: &str, index_code: &str, local_name: &str) {
        self.entries.insert(
            name.to_owned(),
            MappedSubject {
                index_code: index_code.to_owned(),
                local_name: local_name.to_owned(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&MappedSubject> {
        self.entries.get(name)
    }

    /// `(index code, display name)` for `name`.
    ///
    /// Unknown subjects are not an error: they resolve to `(None, name)`.
    pub fn resolve<'a>(&'a self, name: &'a str) -> (Option<&'a str>, &'a str) {
        match self.entries.get(name) {
            Some(m) => (Some(m.index_code.as_str()), m.local_name.as_str()),
            None => (None, name),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
