//! Error types for documentation lookup and extraction.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    /// Neither documentation directory exists.
    #[error("documentation directories not found: {} (fallback: {})", primary.display(), fallback.display())]
    MissingDirectories { primary: PathBuf, fallback: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The reference page has no `refpurpose` element, or it is blank.
    #[error("missing or empty summary at {0}")]
    MissingSummary(&'static str),
}

impl DocError {
    /// Whether this error is a per-document failure that should degrade to
    /// the default record instead of aborting the run.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, DocError::Xml(_) | DocError::MissingSummary(_))
    }
}

pub type Result<T, E = DocError> = std::result::Result<T, E>;
