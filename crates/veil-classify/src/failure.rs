use std::any::Any;

use veil_core::{DomainError, ErrorKind};

/// A failure value entering the classifier
///
/// Each external failure family is wrapped into one variant at the
/// boundary where it arose, so classification is a plain match with no
/// runtime type inspection. Variant order is the classification
/// precedence order.
#[derive(Debug)]
pub enum Failure {
    /// Application-raised error carrying a canonical kind
    Domain(DomainError),
    /// Plain data object with ad-hoc `status`/`message` fields, e.g. an
    /// error that crossed a network hop as JSON
    Structured(serde_json::Value),
    /// Failed outbound call that reached a response
    Upstream(UpstreamError),
    /// Operational persistence error tagged with a vendor operation code
    Store(StoreError),
    /// Malformed query or filter shape at the storage layer
    StoreInput(String),
    /// Field issues reported by an external schema validator
    Validation(ValidationFailure),
    /// Malformed request body
    Parse(String),
    /// Programming-logic fault manifesting as an invalid-operand failure
    TypeMismatch(String),
    /// Generic runtime failure carrying only a message
    Runtime(anyhow::Error),
    /// Anything else, rendered best-effort
    Opaque(String),
}

impl Failure {
    /// Wrap a panic payload
    ///
    /// String payloads keep their text; any other payload becomes an
    /// opaque marker.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(text) = payload.downcast_ref::<&str>() {
            Self::Opaque((*text).to_owned())
        } else if let Some(text) = payload.downcast_ref::<String>() {
            Self::Opaque(text.clone())
        } else {
            Self::Opaque("opaque panic payload".to_owned())
        }
    }
}

impl From<DomainError> for Failure {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ErrorKind> for Failure {
    fn from(kind: ErrorKind) -> Self {
        Self::Domain(DomainError::new(kind))
    }
}

impl From<UpstreamError> for Failure {
    fn from(err: UpstreamError) -> Self {
        Self::Upstream(err)
    }
}

impl From<StoreError> for Failure {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<ValidationFailure> for Failure {
    fn from(err: ValidationFailure) -> Self {
        Self::Validation(err)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::Runtime(err)
    }
}

/// Failed outbound call that reached a transport-level response
///
/// A call that failed before any response arrived carries no status to
/// propagate; wrap it as [`Failure::Runtime`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    /// Status returned by the dependent service, propagated verbatim
    pub status: u16,
    /// Response body, when one was decoded
    pub body: Option<serde_json::Value>,
}

impl UpstreamError {
    pub const fn new(status: u16, body: Option<serde_json::Value>) -> Self {
        Self { status, body }
    }

    /// The body's `error` field, when present
    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}

/// Operational persistence error reported by the store adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// Vendor-neutral operation code
    pub code: String,
    /// Raw vendor message, kept for diagnostics and dev disclosure
    pub message: String,
}

impl StoreError {
    pub const UNIQUE_VIOLATION: &'static str = "unique_violation";
    pub const RECORD_MISSING: &'static str = "record_missing";
    pub const RECORD_NOT_FOUND: &'static str = "record_not_found";
    pub const FOREIGN_KEY_VIOLATION: &'static str = "foreign_key_violation";
    pub const CASCADE_DELETE_CONFLICT: &'static str = "cascade_delete_conflict";
    pub const CONSTRAINT_VIOLATION: &'static str = "constraint_violation";
    pub const INPUT_TYPE_ERROR: &'static str = "input_type_error";
    pub const VALUE_TOO_LONG: &'static str = "value_too_long";
    pub const RELATION_CONSTRAINT_FAILURE: &'static str = "relation_constraint_failure";
    pub const VALUE_OUT_OF_RANGE: &'static str = "value_out_of_range";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Schema validation failure reported by an external validator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationFailure {
    pub issues: Vec<FieldIssue>,
}

impl ValidationFailure {
    pub const fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Joined issue list for dev disclosure
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// One field-level issue from the schema validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
