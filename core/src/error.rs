use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShelfError>;

/// Caller mistakes in the shelf transform. Malformed records are not
/// represented here; they are skipped where they are read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShelfError {
    #[error("start_year {start} cannot be after end_year {end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ShelfError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        ShelfError::InvalidConfiguration(msg.into())
    }
}
