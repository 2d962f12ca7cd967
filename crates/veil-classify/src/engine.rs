use std::sync::Arc;

use http::StatusCode;
use veil_core::{ApiResponse, DisclosureMode};

use crate::classify::{Classification, classify};
use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::failure::Failure;
use crate::policy::format;

/// Status code plus formatted envelope, ready for the HTTP boundary
///
/// The caller writes `status` and serializes `envelope` as the response
/// body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub envelope: ApiResponse<()>,
}

/// The assembled error pipeline: classifier plus disclosure policy
///
/// Built once at startup from the resolved disclosure mode, cheap to
/// clone, immutable afterwards.
#[derive(Clone)]
pub struct Engine {
    mode: DisclosureMode,
    sink: Arc<dyn DiagnosticSink>,
}

impl Engine {
    /// Build an engine with the default tracing sink
    pub fn new(mode: DisclosureMode) -> Self {
        Self::with_sink(mode, Arc::new(TracingSink))
    }

    /// Build an engine with an injected diagnostic sink
    pub fn with_sink(mode: DisclosureMode, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { mode, sink }
    }

    /// The disclosure mode this engine was built with
    pub const fn mode(&self) -> DisclosureMode {
        self.mode
    }

    /// Resolve a failure to status, kind, and raw message
    pub fn classify(&self, failure: &Failure) -> Classification {
        classify(failure, self.sink.as_ref())
    }

    /// Resolve any failure into a status code and response envelope
    ///
    /// Never fails and never re-throws: every input terminates here.
    pub fn classify_and_format(&self, failure: &Failure) -> Reply {
        let classification = self.classify(failure);
        let envelope = format(&classification, self.mode);
        Reply {
            status: classification.status,
            envelope,
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").field("mode", &self.mode).finish_non_exhaustive()
    }
}
