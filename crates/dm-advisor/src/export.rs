//! Report export boundary.

use crate::error::CollaboratorResult;
use dm_engine::CalculationResults;
use tracing::{info, warn};

/// Renders the latest results and narrative into a downloadable artifact.
///
/// Purely derivative: nothing flows back into the engine.
pub trait ReportExporter {
    type Artifact;

    fn export(
        &self,
        results: &CalculationResults,
        narrative: &str,
    ) -> CollaboratorResult<Self::Artifact>;
}

/// Export once, without retry.
pub fn export_report<X: ReportExporter + ?Sized>(
    exporter: &X,
    results: &CalculationResults,
    narrative: &str,
) -> CollaboratorResult<X::Artifact> {
    let artifact = exporter.export(results, narrative);
    match &artifact {
        Ok(_) => info!("report exported"),
        Err(e) => warn!(error = %e, "report export failed"),
    }
    artifact
}
