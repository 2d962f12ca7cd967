use std::path::Path;

use crate::{Config, ENV_VAR, Environment};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or TOML parsing fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        Ok(config)
    }

    /// Resolve configuration from the process environment
    ///
    /// Honors `VEIL_ENV` (`development`/`production`, case-insensitive);
    /// unset or unrecognized values resolve to production. Meant to run
    /// once at process start.
    pub fn from_env() -> Self {
        let environment = std::env::var(ENV_VAR).map_or(Environment::Production, |value| Environment::parse(&value));

        Self { environment }
    }
}
