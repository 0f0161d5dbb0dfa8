//! Error types for collaborator calls.

use thiserror::Error;

/// Failure reported by an external collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// Service asked us to slow down. Worth retrying.
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Collaborator failed: {message}")]
    Failed { message: String },

    #[error("Could not build request: {message}")]
    Request { message: String },
}

impl CollaboratorError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Outcome of a retried operation that did not succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetryError<E> {
    /// Every attempt failed with a transient error.
    #[error("Gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: E,
    },
    /// A non-transient error ended the retries early.
    #[error("Failed on attempt {attempt}: {error}")]
    Permanent {
        attempt: u32,
        #[source]
        error: E,
    },
}

impl<E> RetryError<E> {
    /// Number of attempts made.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Exhausted { attempts, .. } => *attempts,
            Self::Permanent { attempt, .. } => *attempt,
        }
    }

    pub fn into_inner(self) -> E {
        match self {
            Self::Exhausted { last, .. } => last,
            Self::Permanent { error, .. } => error,
        }
    }
}
