// src/error.rs
// Error types for the outer surfaces (config, CLI, output)

use thiserror::Error;

/// Main error type for campus-triage
///
/// The classifier itself never fails; these arise only from configuration,
/// argument parsing and output.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience type alias for Result using TriageError
pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = TriageError::InvalidInput("unknown category 'plumbing'".to_string());
        assert!(err.to_string().contains("invalid input"));
        assert!(err.to_string().contains("plumbing"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TriageError = io_err.into();
        assert!(matches!(err, TriageError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: TriageError = toml_err.into();
        assert!(matches!(err, TriageError::ConfigParse(_)));
    }
}
