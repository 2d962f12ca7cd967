/// Whether raw internal error text may be shown to the caller
///
/// Derived once from the deployment environment at process start and
/// treated as immutable for the process lifetime. The classification and
/// formatting code receives the value explicitly and never reads ambient
/// process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureMode {
    /// Surface the raw internal message (development-like contexts)
    Disclose,
    /// Substitute the status class's safe message
    Redact,
}

impl DisclosureMode {
    /// Whether raw messages may be surfaced
    pub const fn is_disclose(self) -> bool {
        matches!(self, Self::Disclose)
    }
}
