use http::StatusCode;
use veil_core::{DomainError, ErrorKind};

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::failure::{Failure, StoreError, UpstreamError};

/// The classifier's sole output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: StatusCode,
    pub kind: ErrorKind,
    pub raw_message: String,
}

/// Resolve a failure to status, kind, and raw message
///
/// First match wins in [`Failure`] variant order. Classification never
/// fails: shapes outside the known families degrade to 500 with
/// [`ErrorKind::GenericError`]. The sink receives a diagnostic for
/// unknown store codes and for anything resolved through the generic
/// fallback, regardless of disclosure mode.
pub fn classify(failure: &Failure, sink: &dyn DiagnosticSink) -> Classification {
    match failure {
        Failure::Domain(err) => from_domain(err),
        Failure::Structured(value) => from_structured(value),
        Failure::Upstream(upstream) => from_upstream(upstream),
        Failure::Store(store) => from_store(store, sink),
        Failure::StoreInput(detail) => Classification {
            status: StatusCode::BAD_REQUEST,
            kind: ErrorKind::InvalidDataFormat,
            raw_message: detail.clone(),
        },
        Failure::Validation(validation) => Classification {
            status: StatusCode::BAD_REQUEST,
            kind: ErrorKind::InvalidDataFormat,
            raw_message: validation.summary(),
        },
        Failure::Parse(detail) | Failure::TypeMismatch(detail) => Classification {
            status: StatusCode::BAD_REQUEST,
            kind: ErrorKind::InvalidRequest,
            raw_message: detail.clone(),
        },
        Failure::Runtime(err) => {
            let message = format!("{err:#}");
            sink.log(Diagnostic::UnclassifiedFailure {
                family: "runtime",
                message: &message,
            });
            Classification {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: ErrorKind::GenericError,
                raw_message: err.to_string(),
            }
        }
        Failure::Opaque(detail) => {
            sink.log(Diagnostic::UnclassifiedFailure {
                family: "opaque",
                message: detail,
            });
            Classification {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: ErrorKind::GenericError,
                raw_message: detail.clone(),
            }
        }
    }
}

fn from_domain(err: &DomainError) -> Classification {
    Classification {
        status: err.status(),
        kind: err.kind(),
        raw_message: err.raw_message().to_owned(),
    }
}

/// Rebuild a plain `{status, message}` object as a domain error
///
/// Fields degrade independently: a missing or malformed status falls back
/// to the kind's default, a missing message to the canonical text.
fn from_structured(value: &serde_json::Value) -> Classification {
    let status = value
        .get("status")
        .and_then(serde_json::Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .and_then(|code| StatusCode::from_u16(code).ok());

    let mut err = match value.get("message").and_then(serde_json::Value::as_str) {
        Some(text) => DomainError::from_message(text),
        None => DomainError::new(ErrorKind::GenericError),
    };
    if let Some(status) = status {
        err = err.with_status(status);
    }

    from_domain(&err)
}

fn from_upstream(upstream: &UpstreamError) -> Classification {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let raw_message = upstream
        .error_message()
        .map_or_else(|| ErrorKind::GenericError.message().to_owned(), str::to_owned);

    Classification {
        status,
        kind: ErrorKind::safe_kind(status),
        raw_message,
    }
}

fn from_store(store: &StoreError, sink: &dyn DiagnosticSink) -> Classification {
    let kind = match store.code.as_str() {
        StoreError::UNIQUE_VIOLATION => ErrorKind::ResourceAlreadyExists,
        StoreError::RECORD_MISSING | StoreError::RECORD_NOT_FOUND => ErrorKind::ResourceNotFound,
        StoreError::FOREIGN_KEY_VIOLATION => ErrorKind::ForeignKeyConstraintFailed,
        StoreError::CASCADE_DELETE_CONFLICT => ErrorKind::CascadeDeleteConstraintFailed,
        StoreError::CONSTRAINT_VIOLATION => ErrorKind::ConstraintViolation,
        StoreError::INPUT_TYPE_ERROR => ErrorKind::InvalidDataFormat,
        StoreError::VALUE_TOO_LONG => ErrorKind::ValueTooLong,
        StoreError::RELATION_CONSTRAINT_FAILURE => ErrorKind::InvalidRelationConstraint,
        StoreError::VALUE_OUT_OF_RANGE => ErrorKind::ValueOutOfRange,
        code => {
            sink.log(Diagnostic::UnknownStoreCode {
                code,
                message: &store.message,
            });
            // Vendor message survives as the raw message for dev disclosure
            return Classification {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: ErrorKind::InternalError,
                raw_message: store.message.clone(),
            };
        }
    };

    Classification {
        status: kind.default_status(),
        kind,
        raw_message: kind.message().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::diagnostic::NoopSink;
    use crate::failure::{FieldIssue, ValidationFailure};

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn log(&self, event: Diagnostic<'_>) {
            let rendered = match event {
                Diagnostic::UnknownStoreCode { code, message } => format!("store:{code}:{message}"),
                Diagnostic::UnclassifiedFailure { family, message } => format!("{family}:{message}"),
            };
            self.events.lock().unwrap().push(rendered);
        }
    }

    fn classify_quiet(failure: &Failure) -> Classification {
        classify(failure, &NoopSink)
    }

    #[test]
    fn domain_error_uses_the_kind_default_status() {
        let failure = Failure::from(DomainError::new(ErrorKind::ResourceNotFound));
        let result = classify_quiet(&failure);
        assert_eq!(result.status, StatusCode::NOT_FOUND);
        assert_eq!(result.kind, ErrorKind::ResourceNotFound);
        assert_eq!(result.raw_message, "Resource not found");
    }

    #[test]
    fn domain_status_override_always_wins() {
        let failure = Failure::from(DomainError::new(ErrorKind::ResourceNotFound).with_status(StatusCode::GONE));
        assert_eq!(classify_quiet(&failure).status, StatusCode::GONE);
    }

    #[test]
    fn structured_error_round_trips_like_a_native_domain_error() {
        let structured = Failure::Structured(serde_json::json!({
            "status": 404,
            "message": "Resource not found",
        }));
        let native = Failure::from(DomainError::new(ErrorKind::ResourceNotFound));
        assert_eq!(classify_quiet(&structured), classify_quiet(&native));
    }

    #[test]
    fn structured_error_fields_degrade_independently() {
        let no_status = classify_quiet(&Failure::Structured(serde_json::json!({"message": "Token expired"})));
        assert_eq!(no_status.status, StatusCode::UNAUTHORIZED);
        assert_eq!(no_status.kind, ErrorKind::TokenExpired);

        let no_message = classify_quiet(&Failure::Structured(serde_json::json!({"status": 404})));
        assert_eq!(no_message.status, StatusCode::NOT_FOUND);
        assert_eq!(no_message.kind, ErrorKind::GenericError);

        let junk = classify_quiet(&Failure::Structured(serde_json::json!({"status": "soon"})));
        assert_eq!(junk.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(junk.kind, ErrorKind::GenericError);
    }

    #[test]
    fn upstream_status_propagates_verbatim() {
        let failure = Failure::from(UpstreamError::new(503, Some(serde_json::json!({"error": "overloaded"}))));
        let result = classify_quiet(&failure);
        assert_eq!(result.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(result.raw_message, "overloaded");
    }

    #[test]
    fn upstream_without_error_field_falls_back_to_generic_text() {
        let failure = Failure::from(UpstreamError::new(502, None));
        let result = classify_quiet(&failure);
        assert_eq!(result.status, StatusCode::BAD_GATEWAY);
        assert_eq!(result.raw_message, ErrorKind::GenericError.message());
    }

    #[test]
    fn upstream_with_invalid_status_degrades_to_500() {
        let failure = Failure::from(UpstreamError::new(42, None));
        assert_eq!(classify_quiet(&failure).status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_code_table_resolves_fixed_pairs() {
        let cases = [
            (StoreError::UNIQUE_VIOLATION, 409, ErrorKind::ResourceAlreadyExists),
            (StoreError::RECORD_MISSING, 404, ErrorKind::ResourceNotFound),
            (StoreError::RECORD_NOT_FOUND, 404, ErrorKind::ResourceNotFound),
            (StoreError::FOREIGN_KEY_VIOLATION, 409, ErrorKind::ForeignKeyConstraintFailed),
            (StoreError::CASCADE_DELETE_CONFLICT, 409, ErrorKind::CascadeDeleteConstraintFailed),
            (StoreError::CONSTRAINT_VIOLATION, 409, ErrorKind::ConstraintViolation),
            (StoreError::INPUT_TYPE_ERROR, 400, ErrorKind::InvalidDataFormat),
            (StoreError::VALUE_TOO_LONG, 400, ErrorKind::ValueTooLong),
            (StoreError::RELATION_CONSTRAINT_FAILURE, 400, ErrorKind::InvalidRelationConstraint),
            (StoreError::VALUE_OUT_OF_RANGE, 400, ErrorKind::ValueOutOfRange),
        ];
        for (code, status, kind) in cases {
            let result = classify_quiet(&Failure::from(StoreError::new(code, "vendor detail")));
            assert_eq!(result.status.as_u16(), status, "{code}");
            assert_eq!(result.kind, kind, "{code}");
            // Known codes surface canonical text, never the vendor message
            assert_eq!(result.raw_message, kind.message(), "{code}");
        }
    }

    #[test]
    fn unknown_store_code_degrades_and_logs_once() {
        let sink = RecordingSink::default();
        let failure = Failure::from(StoreError::new("wal_checkpoint_stalled", "wal segment 0042 locked"));
        let result = classify(&failure, &sink);
        assert_eq!(result.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(result.kind, ErrorKind::InternalError);
        assert_eq!(result.raw_message, "wal segment 0042 locked");
        assert_eq!(
            *sink.events.lock().unwrap(),
            vec!["store:wal_checkpoint_stalled:wal segment 0042 locked".to_owned()]
        );
    }

    #[test]
    fn store_input_error_is_invalid_data_format() {
        let result = classify_quiet(&Failure::StoreInput("unknown filter field `colour`".to_owned()));
        assert_eq!(result.status, StatusCode::BAD_REQUEST);
        assert_eq!(result.kind, ErrorKind::InvalidDataFormat);
    }

    #[test]
    fn validation_failure_summarizes_issues() {
        let failure = Failure::from(ValidationFailure::new(vec![FieldIssue::new("email", "invalid format")]));
        let result = classify_quiet(&failure);
        assert_eq!(result.status, StatusCode::BAD_REQUEST);
        assert_eq!(result.kind, ErrorKind::InvalidDataFormat);
        assert_eq!(result.raw_message, "email: invalid format");
    }

    #[test]
    fn parse_and_type_faults_are_invalid_request() {
        for failure in [
            Failure::Parse("unexpected end of JSON input".to_owned()),
            Failure::TypeMismatch("cannot add string to integer".to_owned()),
        ] {
            let result = classify_quiet(&failure);
            assert_eq!(result.status, StatusCode::BAD_REQUEST);
            assert_eq!(result.kind, ErrorKind::InvalidRequest);
        }
    }

    #[test]
    fn runtime_failure_degrades_to_generic_and_logs() {
        let sink = RecordingSink::default();
        let failure = Failure::from(anyhow::anyhow!("Unexpected null"));
        let result = classify(&failure, &sink);
        assert_eq!(result.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(result.kind, ErrorKind::GenericError);
        assert_eq!(result.raw_message, "Unexpected null");
        assert_eq!(*sink.events.lock().unwrap(), vec!["runtime:Unexpected null".to_owned()]);
    }

    #[test]
    fn runtime_diagnostic_includes_the_cause_chain() {
        let sink = RecordingSink::default();
        let root = anyhow::anyhow!("connection reset").context("flushing session");
        classify(&Failure::from(root), &sink);
        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("flushing session"));
        assert!(events[0].contains("connection reset"));
    }

    #[test]
    fn opaque_failure_is_the_final_fallback() {
        let sink = RecordingSink::default();
        let result = classify(&Failure::Opaque("thrown value 42".to_owned()), &sink);
        assert_eq!(result.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(result.kind, ErrorKind::GenericError);
        assert_eq!(sink.events.lock().unwrap().len(), 1);
    }

    #[test]
    fn classification_is_idempotent() {
        let failure = Failure::from(StoreError::new(StoreError::UNIQUE_VIOLATION, "duplicate key"));
        assert_eq!(classify_quiet(&failure), classify_quiet(&failure));
    }
}
