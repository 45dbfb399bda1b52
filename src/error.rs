// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read rule set {path}: {source}")]
    RulesIo {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed rule set {path}: {source}")]
    RulesParse {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("bad gameObject pattern {pattern:?} in rule {rule:?}: {source}")]
    Pattern {
        source: regex::Error,
        rule: String,
        pattern: String,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

// Allow `?` on std::io::Error by converting to ScanError::Io with unknown path.
impl From<std::io::Error> for ScanError {
    fn from(source: std::io::Error) -> Self {
        ScanError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
