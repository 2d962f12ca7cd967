use http::StatusCode;
use thiserror::Error;

use crate::ErrorKind;

/// Application-raised failure carrying a canonical kind
///
/// Constructed by business logic at the point of failure and consumed
/// once by the classifier. An explicit status override always wins over
/// the kind's default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or(.kind.message()))]
pub struct DomainError {
    kind: ErrorKind,
    message: Option<String>,
    status: Option<StatusCode>,
}

impl DomainError {
    /// Create a domain error with the kind's canonical message and
    /// default status
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            status: None,
        }
    }

    /// Rebuild a domain error from a free-form message
    ///
    /// Canonical text resolves to its kind; anything else degrades to
    /// [`ErrorKind::GenericError`] with the text preserved as the raw
    /// message.
    pub fn from_message(text: impl Into<String>) -> Self {
        let text = text.into();
        match ErrorKind::from_message(&text) {
            Some(kind) => Self::new(kind),
            None => Self {
                kind: ErrorKind::GenericError,
                message: Some(text),
                status: None,
            },
        }
    }

    /// Attach an explicit status override
    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach a custom raw message, surfaced only in disclosure mode
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Canonical kind of this error
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Resolved status: the explicit override when present, else the
    /// kind's default
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or_else(|| self.kind.default_status())
    }

    /// Raw message: the custom text when present, else the canonical
    /// kind text
    pub fn raw_message(&self) -> &str {
        self.message.as_deref().unwrap_or_else(|| self.kind.message())
    }
}

impl From<ErrorKind> for DomainError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
