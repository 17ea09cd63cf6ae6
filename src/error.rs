use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Failure modes surfaced to the caller. None of these are retried:
/// every operation is local and deterministic.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("invalid expense: {0}")]
    Validation(String),

    #[error("no expense with id {0}")]
    NotFound(i64),

    #[error("no matching expenses to {0}")]
    EmptyData(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),
}
