//! Exam session of the day.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Which half of the day an exam is held in.
///
/// Purely descriptive: the session is carried through to the output and has
/// no effect on placement or on the start time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExamSession {
    #[default]
    Morning,
    Afternoon,
}

impl ExamSession {
    pub fn as_str(self) -> &'static str {
        match self {
            ExamSession::Morning => "Morning",
            ExamSession::Afternoon => "Afternoon",
        }
    }
}

impl fmt::Display for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamSession {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("morning") {
            Ok(ExamSession::Morning)
        } else if t.eq_ignore_ascii_case("afternoon") {
            Ok(ExamSession::Afternoon)
        } else {
            Err(CoreError::InvalidSession(s.to_owned()))
        }
    }
}
