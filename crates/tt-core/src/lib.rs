//! `tt-core` — foundational types for the exam timetable workspace.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and few external ones (`chrono`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`calendar`]  | `DayKind`, `HolidaySet`, Sunday detection                 |
//! | [`session`]   | `ExamSession` (Morning / Afternoon)                       |
//! | [`time`]      | `ExamDuration`, start-time parsing, end-time arithmetic   |
//! | [`config`]    | `SubjectConfig`, `GenerationConfig`                       |
//! | [`rng`]       | `ShuffleRng` (seedable, per-variant child streams)        |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod calendar;
pub mod config;
pub mod error;
pub mod rng;
pub mod session;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::{DayKind, HolidaySet, is_sunday};
pub use config::{GenerationConfig, SubjectConfig};
pub use error::{CoreError, CoreResult};
pub use rng::ShuffleRng;
pub use session::ExamSession;
pub use time::ExamDuration;
