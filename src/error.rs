//! Binding error handling
//!
//! Two failure shapes cross this layer: local failures raised before any
//! native call (loading, encoding, argument shape) and status codes returned
//! by the GR3 entry points that report one.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::gr3::Gr3ErrorCode;

/// Error type of every fallible binding operation.
#[derive(Error, Debug)]
pub enum BindingError {
    /// An explicitly configured library path could not be opened
    #[error("Failed to load library {path}: {reason}")]
    LibraryLoad { path: PathBuf, reason: String },

    /// None of the candidate locations held a loadable library
    #[error("Library {name} not found (searched: {searched:?})")]
    LibraryNotFound { name: String, searched: Vec<String> },

    /// The library is missing one of the bound entry points
    #[error("Library {library} does not export {symbol}: {reason}")]
    Symbol {
        library: String,
        symbol: String,
        reason: String,
    },

    /// Text contains a character the native encoding cannot represent
    #[error("Cannot encode {character:?} at position {position} as ISO-8859-15")]
    Encoding { character: char, position: usize },

    /// A GR3 entry point returned a non-zero status
    #[error("{operation} failed: {error}")]
    Gr3 {
        operation: &'static str,
        error: Gr3Error,
    },

    /// Arguments of a scripting call do not have the expected shape
    #[error("Invalid arguments: {0}")]
    ArgumentShape(String),

    /// The script function does not exist
    #[error("Function '{0}' not found")]
    UnknownFunction(String),

    /// A script raised an exception or could not be evaluated
    #[error("Script error: {0}")]
    Script(String),

    /// A script file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type BindingResult<T> = Result<T, BindingError>;

/// A GR3 status code together with its symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gr3Error {
    code: i32,
}

impl Gr3Error {
    /// Name reported for codes missing from the error table.
    pub const UNKNOWN: &'static str = "GR3_ERROR_UNKNOWN";

    pub fn new(code: i32) -> Self {
        Self { code }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// The matching enumerant, if the code is known.
    pub fn kind(&self) -> Option<Gr3ErrorCode> {
        Gr3ErrorCode::from_code(self.code)
    }

    /// Symbolic name from the error table, `GR3_ERROR_UNKNOWN` otherwise.
    pub fn name(&self) -> &'static str {
        self.kind().map_or(Self::UNKNOWN, Gr3ErrorCode::symbol)
    }
}

impl fmt::Display for Gr3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.name(), self.code)
    }
}

impl std::error::Error for Gr3Error {}

impl BindingError {
    pub(crate) fn argument(message: impl Into<String>) -> Self {
        BindingError::ArgumentShape(message.into())
    }

    /// Maps a GR3 status code, `0` meaning success.
    pub(crate) fn check_status(operation: &'static str, code: i32) -> BindingResult<()> {
        if code == 0 {
            Ok(())
        } else {
            tracing::debug!(target: "gr3", "{} returned status {}", operation, code);
            Err(BindingError::Gr3 {
                operation,
                error: Gr3Error::new(code),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_name() {
        assert_eq!(Gr3Error::new(3).name(), "GR3_ERROR_INIT_FAILED");
        assert_eq!(Gr3Error::new(7).name(), "GR3_ERROR_CAMERA_NOT_INITIALIZED");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(Gr3Error::new(42).name(), "GR3_ERROR_UNKNOWN");
        assert_eq!(Gr3Error::new(-1).name(), "GR3_ERROR_UNKNOWN");
        assert!(Gr3Error::new(42).kind().is_none());
    }

    #[test]
    fn test_check_status() {
        assert!(BindingError::check_status("gr3_init", 0).is_ok());

        let err = BindingError::check_status("gr3_init", 5).unwrap_err();
        match err {
            BindingError::Gr3 { operation, error } => {
                assert_eq!(operation, "gr3_init");
                assert_eq!(error.name(), "GR3_ERROR_OUT_OF_MEM");
            }
            other => panic!("Expected Gr3 error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_carries_name() {
        let err = BindingError::check_status("gr3_setquality", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "gr3_setquality failed: GR3_ERROR_INVALID_VALUE (code 1)"
        );
    }
}
