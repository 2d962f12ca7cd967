use serde::Deserialize;
use veil_core::DisclosureMode;

/// Deployment environment the process runs in
///
/// Production is the fail-closed default: anything unrecognized redacts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name, case-insensitively
    ///
    /// Anything other than `development` resolves to `Production`.
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Disclosure mode this environment implies
    pub const fn disclosure_mode(self) -> DisclosureMode {
        match self {
            Self::Development => DisclosureMode::Disclose,
            Self::Production => DisclosureMode::Redact,
        }
    }
}
