//! Startup configuration for the veil error pipeline
//!
//! The only runtime decision this crate feeds into the engine is the
//! disclosure mode, derived exactly once from the deployment environment
//! at process start. Core logic receives the resolved value and never
//! reads ambient process state itself.

#![allow(clippy::must_use_candidate)]

mod environment;
mod loader;

use serde::Deserialize;
use veil_core::DisclosureMode;

pub use environment::Environment;

/// Environment variable consulted by [`Config::from_env`]
pub const ENV_VAR: &str = "VEIL_ENV";

/// Top-level veil configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deployment environment the process runs in
    #[serde(default)]
    pub environment: Environment,
}

impl Config {
    /// Disclosure mode implied by the configured environment
    pub const fn disclosure_mode(self) -> DisclosureMode {
        self.environment.disclosure_mode()
    }
}
