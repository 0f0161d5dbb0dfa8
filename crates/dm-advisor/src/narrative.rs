//! Engineering audit narrative from an external text generator.

use crate::CollaboratorReply;
use crate::error::{CollaboratorError, CollaboratorResult};
use crate::retry::{RetryPolicy, Sleeper, retry_with_backoff};
use dm_engine::{CalculationResults, MixingInputs};
use std::fmt::Write as _;
use tracing::{error, info};

/// Shown in place of the audit when the generator cannot be reached.
pub const FALLBACK_MESSAGE: &str = "The engineering audit is currently unavailable. \
     The calculated results are complete and do not depend on it.";

/// Free-text generator (typically a hosted language model).
pub trait NarrativeProvider: Send + Sync {
    fn generate(&self, prompt: &str) -> CollaboratorResult<String>;
}

/// Serialize one evaluation into a review prompt.
pub fn build_prompt(
    inputs: &MixingInputs,
    results: &CalculationResults,
    reference_text: Option<&str>,
) -> CollaboratorResult<String> {
    let request = |e: serde_yaml::Error| CollaboratorError::Request {
        message: e.to_string(),
    };
    let inputs_yaml = serde_yaml::to_string(inputs).map_err(request)?;
    let results_yaml = serde_yaml::to_string(results).map_err(request)?;

    let mut prompt = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        prompt,
        "You are reviewing a chemical dosing and blending design for a water or \
         wastewater installation. Assess whether mixing meets the target CoV of {} \
         within {} s, comment on headloss and jet penetration, and recommend changes.",
        inputs.target_cov, inputs.target_mixing_time_s
    );
    let _ = writeln!(prompt, "\n## Design inputs\n{inputs_yaml}");
    let _ = writeln!(prompt, "## Calculated results\n{results_yaml}");
    if let Some(reference) = reference_text.filter(|t| !t.trim().is_empty()) {
        let _ = writeln!(
            prompt,
            "## Reference coefficients supplied by the user\n{reference}"
        );
    }
    Ok(prompt)
}

/// Produce the audit narrative, or [`FALLBACK_MESSAGE`] if it cannot be had.
pub fn audit<S: Sleeper + ?Sized>(
    provider: &dyn NarrativeProvider,
    policy: &RetryPolicy,
    sleeper: &mut S,
    inputs: &MixingInputs,
    results: &CalculationResults,
    reference_text: Option<&str>,
) -> CollaboratorReply {
    let prompt = match build_prompt(inputs, results, reference_text) {
        Ok(prompt) => prompt,
        Err(e) => {
            error!(error = %e, "audit prompt could not be built");
            return CollaboratorReply::fallback(FALLBACK_MESSAGE);
        }
    };

    match retry_with_backoff(
        policy,
        CollaboratorError::is_transient,
        sleeper,
        |_| provider.generate(&prompt),
    ) {
        Ok(text) => {
            info!(chars = text.len(), "audit narrative received");
            CollaboratorReply::answered(text)
        }
        Err(e) => {
            error!(error = %e, "audit narrative unavailable");
            CollaboratorReply::fallback(FALLBACK_MESSAGE)
        }
    }
}
