use thiserror::Error;

use tt_core::CoreError;

#[derive(Debug, Error)]
pub enum GenError {
    /// Bad subject or run configuration, e.g. an unparseable start time.
    /// Always raised before any variant is generated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GenResult<T> = Result<T, GenError>;
