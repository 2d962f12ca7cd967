//! Failure classification and disclosure policy
//!
//! Consumes an arbitrary failure — wrapped into one [`Failure`] variant at
//! the boundary where it arose — and resolves it to an HTTP status, a
//! canonical error kind, and a raw message. The disclosure policy then
//! decides whether the raw message or the status class's safe message is
//! surfaced, and produces the uniform response envelope. The pipeline
//! never re-throws: every input terminates in a [`Reply`].

#![allow(clippy::must_use_candidate)]

mod classify;
mod diagnostic;
mod engine;
mod failure;
mod policy;

pub use classify::{Classification, classify};
pub use diagnostic::{Diagnostic, DiagnosticSink, NoopSink, TracingSink};
pub use engine::{Engine, Reply};
pub use failure::{Failure, FieldIssue, StoreError, UpstreamError, ValidationFailure};
pub use policy::format;
