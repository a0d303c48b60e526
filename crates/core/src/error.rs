use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Error type for the tracker core.
///
/// Mirrors the failure taxonomy of the application: rejected form input,
/// a worksheet that could not be read, and a worksheet that could not be
/// written. None of these are fatal; callers degrade to a message.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("failed to read worksheet '{worksheet}': {source}")]
    StoreRead {
        worksheet: &'static str,
        source: BoxedSource,
    },

    #[error("failed to write worksheet '{worksheet}': {source}")]
    StoreWrite {
        worksheet: &'static str,
        source: BoxedSource,
    },

    #[error("failed to write report to '{path}': {source}")]
    ReportWrite { path: String, source: BoxedSource },
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
