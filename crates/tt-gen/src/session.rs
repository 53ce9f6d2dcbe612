//! `GenerationSession` — the caller-owned home of the latest result.
//!
//! Each generate action replaces the previous result.  The old set is
//! dropped *before* the new run is validated, so a failed action leaves the
//! session empty rather than showing stale timetables.

use crate::{GenResult, GenerationObserver, GeneratorBuilder, SubjectOrder, TimetableSet};

#[derive(Debug, Default)]
pub struct GenerationSession {
    latest: Option<TimetableSet>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and run a generator, storing its result.
    pub fn generate<O, Obs>(
        &mut self,
        builder: GeneratorBuilder<O>,
        observer: &mut Obs,
    ) -> GenResult<&TimetableSet>
    where
        O: SubjectOrder,
        Obs: GenerationObserver,
    {
        self.latest = None;
        let mut generator = builder.build()?;
        let set = generator.run(observer);
        Ok(self.latest.insert(set))
    }

    /// The result of the last successful action, if any.
    pub fn latest(&self) -> Option<&TimetableSet> {
        self.latest.as_ref()
    }

    /// Remove and return the stored result.
    pub fn take(&mut self) -> Option<TimetableSet> {
        self.latest.take()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}
