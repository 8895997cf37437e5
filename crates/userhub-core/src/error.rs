//! Unified application error types for UserHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// The user-domain kinds (`UserNotFound`, `UserCreation`, `EmailSending`,
/// `UserUpdate`, `SelfDeletion`) form the closed taxonomy surfaced by the
/// admin user service; the remaining kinds cover infrastructure failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested user does not exist, or the lookup itself failed.
    UserNotFound,
    /// Persisting a new user failed; nothing was created.
    UserCreation,
    /// The confirmation mail could not be dispatched. The user record is
    /// already persisted when this is raised.
    EmailSending,
    /// Persisting a user update failed.
    UserUpdate,
    /// The caller attempted to delete their own account.
    SelfDeletion,
    /// Input validation failed.
    Validation,
    /// The caller identity could not be resolved (missing/invalid credential).
    Authentication,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An external service error occurred.
    ExternalService,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserNotFound => write!(f, "USER_NOT_FOUND"),
            Self::UserCreation => write!(f, "USER_CREATION_ERROR"),
            Self::EmailSending => write!(f, "EMAIL_SENDING_ERROR"),
            Self::UserUpdate => write!(f, "USER_UPDATE_ERROR"),
            Self::SelfDeletion => write!(f, "USER_DELETION_ERROR_SELF_DELETION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout UserHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. The optional `source` carries the
/// originating failure for diagnostics; the `kind` is the contract exposed
/// to callers.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a user-not-found error.
    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UserNotFound, message)
    }

    /// Create a user-creation error.
    pub fn user_creation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UserCreation, message)
    }

    /// Create an email-sending error.
    pub fn email_sending(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmailSending, message)
    }

    /// Create a user-update error.
    pub fn user_update(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UserUpdate, message)
    }

    /// Create a self-deletion error.
    pub fn self_deletion(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SelfDeletion, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
