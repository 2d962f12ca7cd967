use veil_core::{ApiResponse, DisclosureMode, ErrorKind};

use crate::classify::Classification;

/// Format a classification into the public error envelope
///
/// Disclose mode surfaces the raw message, falling back to the kind's
/// canonical text when no raw message is available. Redact mode
/// substitutes the status class's safe message, so callers still receive
/// a category signal instead of one flat generic string.
pub fn format(classification: &Classification, mode: DisclosureMode) -> ApiResponse<()> {
    let message = if mode.is_disclose() {
        if classification.raw_message.is_empty() {
            classification.kind.message().to_owned()
        } else {
            classification.raw_message.clone()
        }
    } else {
        ErrorKind::safe_kind(classification.status).message().to_owned()
    };

    ApiResponse::error(message)
}
