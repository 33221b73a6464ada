// src/error.rs

use thiserror::Error;

/// Failures the normalization pipeline surfaces to callers.
///
/// A failed or non-success fetch is not an error: entry points report it as
/// `Ok(None)`.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Caller asked for something the request builder cannot express.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A team-name cell has no entry in the abbreviation index.
    #[error("unknown franchise name `{0}`")]
    UnknownFranchise(String),

    /// The located table does not have the shape its view schema expects.
    #[error("structural mismatch in {view}: {detail}")]
    StructuralMismatch { view: String, detail: String },
}

impl ScrapeError {
    pub fn mismatch(view: impl ToString, detail: impl Into<String>) -> Self {
        ScrapeError::StructuralMismatch {
            view: view.to_string(),
            detail: detail.into(),
        }
    }
}

/// Transport-level failures; the pipeline turns these into "no data".
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
