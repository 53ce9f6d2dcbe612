//! Subject scheduler: exam times and mapping metadata for a placed subject.

use chrono::NaiveTime;

use tt_catalog::SubjectMapping;
use tt_core::time::end_time;
use tt_core::{CoreResult, SubjectConfig};

use crate::row::ExamSlot;

/// A subject whose configuration has been validated for a run.
///
/// Building one parses the start time, so every `PreparedSubject` is known
/// to schedule without error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedSubject {
    pub name:   String,
    pub config: SubjectConfig,
    pub start:  NaiveTime,
}

impl PreparedSubject {
    /// Validate `config` for `name`.
    ///
    /// Fails with `CoreError::InvalidTimeFormat` for an unparseable start
    /// time and `CoreError::InvalidGapDays` for a gap count above 3.
    pub fn prepare(name: impl Into<String>, config: SubjectConfig) -> CoreResult<Self> {
        let name = name.into();
        let start = config.validate(&name)?;
        Ok(Self { name, config, start })
    }

    #[inline]
    pub fn gap_days(&self) -> u8 {
        self.config.gap_days
    }
}

/// Computes the [`ExamSlot`] for a subject once its day is known.
#[derive(Clone, Copy, Debug)]
pub struct SubjectScheduler<'a> {
    mapping: &'a SubjectMapping,
}

impl<'a> SubjectScheduler<'a> {
    pub fn new(mapping: &'a SubjectMapping) -> Self {
        Self { mapping }
    }

    pub fn schedule(&self, subject: &PreparedSubject) -> ExamSlot {
        let (index_code, local_name) = self.mapping.resolve(&subject.name);
        ExamSlot {
            subject:    subject.name.clone(),
            index_code: index_code.map(str::to_owned),
            local_name: local_name.to_owned(),
            session:    subject.config.session,
            duration:   subject.config.duration,
            start:      subject.start,
            end:        end_time(subject.start, subject.config.duration),
        }
    }
}
