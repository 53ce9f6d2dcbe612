//! TOML run file and command-line overrides.
//!
//! ```toml
//! [inputs]
//! catalog        = "data/subjects.csv"
//! subject_config = "data/subject_config.csv"
//! holidays       = "data/holidays.csv"
//! out            = "output/timetable"
//!
//! [run]
//! class_label = "10"
//! exam_type   = "Terminal Exam"
//! start_date  = "2025-06-02"   # quoted: parsed as YYYY-MM-DD text
//! variants    = 3
//! ```
//!
//! Both tables are optional.  Without `[run]`, `--class` and `--start` must
//! be given on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;

use tt_core::GenerationConfig;

/// Input file locations.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Inputs {
    pub catalog:        Option<PathBuf>,
    pub subject_config: Option<PathBuf>,
    pub holidays:       Option<PathBuf>,
    pub out:            Option<PathBuf>,
}

impl Inputs {
    /// Fill every unset entry from `fallback`.
    pub fn or(self, fallback: Inputs) -> Inputs {
        Inputs {
            catalog:        self.catalog.or(fallback.catalog),
            subject_config: self.subject_config.or(fallback.subject_config),
            holidays:       self.holidays.or(fallback.holidays),
            out:            self.out.or(fallback.out),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    #[serde(default)]
    pub inputs: Inputs,
    pub run:    Option<GenerationConfig>,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read run file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse run file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Run settings given on the command line; each one beats the run file.
#[derive(Debug, Default)]
pub struct RunOverrides {
    pub class:     Option<String>,
    pub start:     Option<NaiveDate>,
    pub end:       Option<NaiveDate>,
    pub variants:  Option<u8>,
    pub exam_type: Option<String>,
    pub seed:      Option<u64>,
}

impl RunOverrides {
    /// Merge onto `base` (the run file's `[run]` table) and validate.
    pub fn apply(self, base: Option<GenerationConfig>) -> Result<GenerationConfig> {
        let mut config = match base {
            Some(config) => config,
            None => {
                let (Some(class), Some(start)) = (&self.class, self.start) else {
                    bail!("--class and --start are required when the run file has no [run] table");
                };
                GenerationConfig::new(class.as_str(), start)
            }
        };

        if let Some(class) = self.class {
            config.class_label = class;
        }
        if let Some(start) = self.start {
            config.start_date = start;
        }
        if self.end.is_some() {
            config.end_date = self.end;
        }
        if let Some(variants) = self.variants {
            config.variants = variants;
        }
        if let Some(exam_type) = self.exam_type {
            config.exam_type = exam_type;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
