//! Fluent builder for constructing a [`Generator`].

use log::debug;

use tt_catalog::{SubjectConfigs, SubjectMapping};
use tt_core::{GenerationConfig, HolidaySet};

use crate::scheduler::PreparedSubject;
use crate::{GenResult, Generator, SubjectOrder};

/// Fluent builder for [`Generator<O>`].
///
/// # Required inputs
///
/// - [`GenerationConfig`] — class, dates, variant count, …
/// - the subject list for the class
/// - `O: SubjectOrder` — e.g. [`RandomOrder`][crate::RandomOrder]
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                  |
/// |------------------------|------------------------------------------|
/// | `.subject_configs(m)`  | `SubjectConfig::default()` per subject   |
/// | `.holidays(h)`         | `HolidaySet::reference()`                |
/// | `.mapping(m)`          | `SubjectMapping::reference()`            |
///
/// # Example
///
/// ```rust,ignore
/// let mut generator = GeneratorBuilder::new(config, subjects, RandomOrder::from_entropy())
///     .subject_configs(configs)
///     .holidays(holidays)
///     .build()?;
/// let set = generator.run(&mut NoopObserver);
/// ```
pub struct GeneratorBuilder<O: SubjectOrder> {
    config:   GenerationConfig,
    subjects: Vec<String>,
    configs:  Option<SubjectConfigs>,
    holidays: Option<HolidaySet>,
    mapping:  Option<SubjectMapping>,
    ordering: O,
}

impl<O: SubjectOrder> GeneratorBuilder<O> {
    /// Create a builder with all required inputs.
    pub fn new<I, S>(config: GenerationConfig, subjects: I, ordering: O) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config,
            subjects: subjects.into_iter().map(Into::into).collect(),
            configs:  None,
            holidays: None,
            mapping:  None,
            ordering,
        }
    }

    /// Per-subject preferences keyed by subject name.
    ///
    /// Subjects missing from the map use `SubjectConfig::default()`; entries
    /// for subjects outside the list are ignored.
    pub fn subject_configs(mut self, configs: SubjectConfigs) -> Self {
        self.configs = Some(configs);
        self
    }

    pub fn holidays(mut self, holidays: HolidaySet) -> Self {
        self.holidays = Some(holidays);
        self
    }

    pub fn mapping(mut self, mapping: SubjectMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Validate every input and return a ready-to-run [`Generator`].
    ///
    /// All subjects are checked here, before any variant exists, so a bad
    /// start time can never leave a partially generated set behind.
    pub fn build(self) -> GenResult<Generator<O>> {
        self.config.validate()?;

        let configs = self.configs.unwrap_or_default();

        // ── Normalise the subject list ────────────────────────────────────
        let mut names: Vec<String> = Vec::with_capacity(self.subjects.len());
        for raw in self.subjects {
            let name = raw.trim();
            if name.is_empty() || names.iter().any(|n| n == name) {
                continue;
            }
            names.push(name.to_owned());
        }

        // ── Resolve and validate per-subject configs ──────────────────────
        let mut subjects = Vec::with_capacity(names.len());
        for name in names {
            let config = match configs.get(&name) {
                Some(c) => c.clone(),
                None => {
                    debug!("no configuration for {name:?}; using defaults");
                    Default::default()
                }
            };
            subjects.push(PreparedSubject::prepare(name, config)?);
        }

        for name in configs.keys() {
            if !subjects.iter().any(|s| &s.name == name) {
                debug!("ignoring configuration for {name:?}: not in the subject list");
            }
        }

        Ok(Generator {
            end_date: self.config.effective_end_date(),
            config:   self.config,
            subjects,
            holidays: self.holidays.unwrap_or_else(HolidaySet::reference),
            mapping:  self.mapping.unwrap_or_else(SubjectMapping::reference),
            ordering: self.ordering,
        })
    }
}
