//! dm-advisor: boundary to the external collaborators of the engine.
//!
//! The engine never depends on these. They take its inputs and results and
//! produce free text (an engineering audit, reference coefficients pulled
//! from a document) or a report artifact. Calls that hit a rate limit are
//! retried with exponential backoff; any other failure is final, and a
//! fixed fallback message stands in for the text.

pub mod error;
pub mod export;
pub mod extract;
pub mod narrative;
pub mod retry;

// Re-exports
pub use error::{CollaboratorError, CollaboratorResult, RetryError};
pub use export::{ReportExporter, export_report};
pub use extract::{DocumentExtractor, EXTRACTION_FALLBACK_MESSAGE, extract_reference_text};
pub use narrative::{FALLBACK_MESSAGE, NarrativeProvider, audit, build_prompt};
pub use retry::{RetryPolicy, Sleeper, ThreadSleeper, retry_with_backoff};

/// Text returned by a collaborator, or the fallback that replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorReply {
    pub text: String,
    pub is_fallback: bool,
}

impl CollaboratorReply {
    pub fn answered(text: String) -> Self {
        Self {
            text,
            is_fallback: false,
        }
    }

    pub fn fallback(message: &str) -> Self {
        Self {
            text: message.to_string(),
            is_fallback: true,
        }
    }
}
