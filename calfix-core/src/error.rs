//! Error types for calfix.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around a calfix run.
///
/// The transformation itself never fails; these cover configuration,
/// timezone validation and the file handling done by callers.
#[derive(Error, Debug)]
pub enum CalFixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone '{0}'. Expected an IANA name such as Europe/Brussels")]
    UnknownTimezone(String),

    #[error("'{}' is not valid UTF-8 text", .path.display())]
    Decode { path: PathBuf },

    #[error("Input path '{}' has no file name", .0.display())]
    NoFileName(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calfix operations.
pub type CalFixResult<T> = Result<T, CalFixError>;
