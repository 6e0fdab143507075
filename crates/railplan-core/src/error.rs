//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Remote Service Errors
    // ─────────────────────────────────────────────────────────────
    /// Non-2xx response from the computation or drawing service.
    /// `detail` is the service-provided message, or the generic
    /// "server error {status}" fallback when the body carries none.
    #[error("{detail}")]
    Service { status: u16, detail: String },

    /// Transport-level failure (connection refused, DNS, malformed body).
    #[error("network error: {message}")]
    Transport { message: String },

    /// Export requested before any successful computation was cached.
    #[error("no computed proposal available to export")]
    NoProposalAvailable,

    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────
    /// Front-line required/min-value violation, caught before serialization.
    #[error("invalid field '{field}': {message}")]
    Validation { field: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Create a [`Error::Service`] from a status code and an optional
    /// `detail` body field, falling back to a generic message.
    pub fn service(status: u16, detail: Option<String>) -> Self {
        Self::Service {
            status,
            detail: detail.unwrap_or_else(|| format!("server error {status}")),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Recoverable errors leave the form state and any cached proposal
    /// untouched; the user can simply retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Service { .. }
                | Error::Transport { .. }
                | Error::Validation { .. }
                | Error::NoProposalAvailable
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ConfigNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_surfaces_detail_verbatim() {
        let err = Error::service(422, Some("hauteur_totale invalide".to_string()));
        assert_eq!(err.to_string(), "hauteur_totale invalide");
    }

    #[test]
    fn service_error_without_detail_uses_generic_message() {
        let err = Error::service(500, None);
        assert_eq!(err.to_string(), "server error 500");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn recoverable_classification() {
        assert!(Error::service(500, None).is_recoverable());
        assert!(Error::transport("connection refused").is_recoverable());
        assert!(Error::NoProposalAvailable.is_recoverable());
        assert!(Error::validation("hauteur_totale", "required").is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }

    #[test]
    fn fatal_classification() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(!Error::service(500, None).is_fatal());
        assert!(!Error::NoProposalAvailable.is_fatal());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = Error::validation("nombre_morceaux", "must be at least 1");
        assert!(err.to_string().contains("nombre_morceaux"));
    }
}
