/// Diagnostic event emitted off the classification path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic<'a> {
    /// Store error carried an operation code outside the known table
    UnknownStoreCode { code: &'a str, message: &'a str },
    /// Failure resolved through the generic 500 fallback
    UnclassifiedFailure { family: &'a str, message: &'a str },
}

/// Narrow logging port for classification diagnostics
///
/// Fire-and-forget: the response path never waits on a sink, and the
/// port is infallible so a failing log transport cannot block the reply.
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, event: Diagnostic<'_>);
}

/// Default sink forwarding to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, event: Diagnostic<'_>) {
        match event {
            Diagnostic::UnknownStoreCode { code, message } => {
                tracing::error!(%code, %message, "unhandled store error code");
            }
            Diagnostic::UnclassifiedFailure { family, message } => {
                tracing::error!(%family, %message, "unclassified failure");
            }
        }
    }
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn log(&self, _event: Diagnostic<'_>) {}
}
