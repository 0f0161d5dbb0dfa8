//! Reference coefficients pulled out of an uploaded document.

use crate::CollaboratorReply;
use crate::error::{CollaboratorError, CollaboratorResult};
use crate::retry::{RetryPolicy, Sleeper, retry_with_backoff};
use tracing::{error, info};

/// Shown in place of extracted text when the extractor cannot be reached.
pub const EXTRACTION_FALLBACK_MESSAGE: &str =
    "Reference coefficients could not be extracted from the document.";

/// Turns a binary document (PDF, scan, data sheet) into plain text.
pub trait DocumentExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> CollaboratorResult<String>;
}

pub fn extract_reference_text<S: Sleeper + ?Sized>(
    extractor: &dyn DocumentExtractor,
    policy: &RetryPolicy,
    sleeper: &mut S,
    document: &[u8],
) -> CollaboratorReply {
    if document.is_empty() {
        return CollaboratorReply::fallback(EXTRACTION_FALLBACK_MESSAGE);
    }

    match retry_with_backoff(
        policy,
        CollaboratorError::is_transient,
        sleeper,
        |_| extractor.extract(document),
    ) {
        Ok(text) => {
            info!(bytes = document.len(), chars = text.len(), "reference text extracted");
            CollaboratorReply::answered(text)
        }
        Err(e) => {
            error!(error = %e, "reference extraction failed");
            CollaboratorReply::fallback(EXTRACTION_FALLBACK_MESSAGE)
        }
    }
}
