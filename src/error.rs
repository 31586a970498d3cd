//! Central error types for Transbar.
//!
//! All errors implement `Serialize` so they can cross the Tauri IPC boundary.

use serde::Serialize;
use thiserror::Error;

/// Main error type for Transbar operations.
#[derive(Error, Debug)]
pub enum TransbarError {
    /// Window creation or manipulation failed
    #[error("Window error: {0}")]
    Window(String),

    /// Accelerator could not be parsed or bound
    #[error("Shortcut error: {0}")]
    Shortcut(String),

    /// Settings store operation failed
    #[error("Settings error: {0}")]
    Settings(#[from] tauri_plugin_store::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Serialize as the error message string for Tauri IPC compatibility.
impl Serialize for TransbarError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<String> for TransbarError {
    fn from(msg: String) -> Self {
        TransbarError::Other(msg)
    }
}

impl From<&str> for TransbarError {
    fn from(msg: &str) -> Self {
        TransbarError::Other(msg.to_string())
    }
}

/// Type alias for Results using TransbarError.
pub type TransbarResult<T> = Result<T, TransbarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransbarError::Window("no such window".to_string());
        assert_eq!(err.to_string(), "Window error: no such window");
    }

    #[test]
    fn test_error_serialization() {
        let err = TransbarError::Shortcut("already taken".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("already taken"));
    }

    #[test]
    fn test_from_string() {
        let err: TransbarError = "test error".into();
        assert!(matches!(err, TransbarError::Other(_)));
    }
}
