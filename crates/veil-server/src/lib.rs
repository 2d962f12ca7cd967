//! Axum boundary adapter for the veil error pipeline
//!
//! The only crate that depends on axum. The engine stays decoupled from
//! the HTTP stack; this crate converts its reply into an actual response
//! and provides the success-side envelope helpers. The caller owns
//! routing and middleware; veil only produces response values.

#![allow(clippy::must_use_candidate)]

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use veil_classify::{Engine, Failure, Reply};
use veil_core::{ApiResponse, SuccessKind};

/// Convert an engine reply into an HTTP response
///
/// Writes the resolved status and serializes the envelope as JSON.
pub fn reply_response(reply: Reply) -> Response {
    (reply.status, Json(reply.envelope)).into_response()
}

/// Classify-and-respond extension for [`Engine`]
pub trait Respond {
    /// Resolve a failure into a complete HTTP response
    fn respond(&self, failure: &Failure) -> Response;
}

impl Respond for Engine {
    fn respond(&self, failure: &Failure) -> Response {
        reply_response(self.classify_and_format(failure))
    }
}

/// 200 response wrapping a payload in the success envelope
pub fn success_response<T: Serialize>(kind: SuccessKind, data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(kind.message(), data))).into_response()
}

/// 201 response wrapping a payload in the success envelope
pub fn created_response<T: Serialize>(kind: SuccessKind, data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::success(kind.message(), data))).into_response()
}
