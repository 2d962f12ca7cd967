//! Test application whose routes raise one failure of each family

use axum::Router;
use axum::routing::{MethodRouter, get};
use tower_http::trace::TraceLayer;
use veil_classify::{Engine, Failure, FieldIssue, StoreError, UpstreamError, ValidationFailure};
use veil_core::{DomainError, ErrorKind, SuccessKind};
use veil_server::{Respond, created_response, success_response};

/// Build a router over the full pipeline
///
/// One route per failure family, plus the success-envelope routes.
pub fn app(engine: Engine) -> Router {
    Router::new()
        .route(
            "/missing",
            failing(&engine, || Failure::from(DomainError::new(ErrorKind::ResourceNotFound))),
        )
        .route(
            "/archived",
            failing(&engine, || {
                Failure::from(DomainError::new(ErrorKind::ResourceNotFound).with_status(axum::http::StatusCode::GONE))
            }),
        )
        .route(
            "/relayed",
            failing(&engine, || {
                Failure::Structured(serde_json::json!({
                    "status": 404,
                    "message": "Resource not found",
                }))
            }),
        )
        .route(
            "/billing",
            failing(&engine, || {
                Failure::from(UpstreamError::new(
                    503,
                    Some(serde_json::json!({"error": "quota service overloaded"})),
                ))
            }),
        )
        .route(
            "/duplicate",
            failing(&engine, || {
                Failure::from(StoreError::new(StoreError::UNIQUE_VIOLATION, "duplicate key on users_email_key"))
            }),
        )
        .route(
            "/corrupt",
            failing(&engine, || {
                Failure::from(StoreError::new("wal_checkpoint_stalled", "wal segment 0042 locked"))
            }),
        )
        .route(
            "/filter",
            failing(&engine, || Failure::StoreInput("unknown filter field `colour`".to_owned())),
        )
        .route(
            "/signup",
            failing(&engine, || {
                Failure::from(ValidationFailure::new(vec![
                    FieldIssue::new("email", "invalid format"),
                    FieldIssue::new("password", "too short"),
                ]))
            }),
        )
        .route(
            "/echo",
            failing(&engine, || Failure::Parse("unexpected end of JSON input".to_owned())),
        )
        .route(
            "/compare",
            failing(&engine, || Failure::TypeMismatch("cannot add string to integer".to_owned())),
        )
        .route("/boom", failing(&engine, || Failure::from(anyhow::anyhow!("Unexpected null"))))
        .route("/thrown", failing(&engine, || Failure::Opaque("thrown value 42".to_owned())))
        .route(
            "/profile",
            get(|| async { success_response(SuccessKind::ResourceRetrieved, serde_json::json!({"id": 9})) }),
        )
        .route(
            "/register",
            get(|| async { created_response(SuccessKind::UserRegistered, serde_json::json!({"id": 10})) }),
        )
        .layer(TraceLayer::new_for_http())
}

fn failing<F>(engine: &Engine, make: F) -> MethodRouter
where
    F: Fn() -> Failure + Clone + Send + Sync + 'static,
{
    let engine = engine.clone();
    get(move || {
        let response = engine.respond(&make());
        async move { response }
    })
}
