//! Shared vocabulary for the veil error pipeline
//!
//! Leaf crate holding the canonical error taxonomy, the domain error type
//! raised by application code, the uniform response envelope, and the
//! disclosure mode. Kept decoupled from axum so downstream crates can
//! classify and format errors without pulling in the HTTP server stack.

#![allow(clippy::must_use_candidate)]

mod disclose;
mod domain;
mod envelope;
mod kind;

pub use disclose::DisclosureMode;
pub use domain::DomainError;
pub use envelope::{ApiResponse, SuccessKind};
pub use kind::ErrorKind;
