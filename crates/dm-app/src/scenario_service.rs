//! Scenario loading, saving, validation, and evaluation.

use std::path::Path;

use dm_engine::{
    Adjustment, CalculationResults, ConduitType, EngineConstants, InjectionType, MixerModel,
    MixingInputs, evaluate_with, sanitize,
};
use dm_project::schema::{Project, ScenarioDef};
use dm_project::{LATEST_VERSION, ProjectError};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub conduit_type: ConduitType,
    pub mixer_model: MixerModel,
    pub has_constant_overrides: bool,
}

/// One evaluated scenario.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub scenario_id: String,
    pub inputs: MixingInputs,
    pub constants: EngineConstants,
    /// Repairs applied to the inputs before calculating
    pub adjustments: Vec<Adjustment>,
    pub results: CalculationResults,
}

/// Load a scenario file (YAML, or JSON by extension).
pub fn load_project(path: &Path) -> AppResult<Project> {
    let project = dm_project::load(path).map_err(|e| match e {
        ProjectError::Validation(v) => AppError::Validation(v.to_string()),
        other => AppError::ProjectFileRead {
            path: path.to_path_buf(),
            source: other,
        },
    })?;
    info!(
        path = %path.display(),
        scenarios = project.scenarios.len(),
        "scenario file loaded"
    );
    Ok(project)
}

/// Save a scenario file, YAML unless the extension says JSON.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    dm_project::save(path, project).map_err(|e| match e {
        ProjectError::Validation(v) => AppError::Validation(v.to_string()),
        other => AppError::ProjectFileWrite {
            path: path.to_path_buf(),
            source: other,
        },
    })
}

/// Validate file structure. Input values are never rejected.
pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.scenarios.is_empty() {
        return Err(AppError::Validation(
            "Scenario file must have at least one scenario".to_string(),
        ));
    }
    dm_project::validate_project(project)?;
    Ok(())
}

pub fn list_scenarios(project: &Project) -> Vec<ScenarioSummary> {
    project
        .scenarios
        .iter()
        .map(|s| ScenarioSummary {
            id: s.id.clone(),
            name: s.name.clone(),
            conduit_type: s.inputs.conduit_type,
            mixer_model: s.inputs.mixer_model,
            has_constant_overrides: s.constants.is_some(),
        })
        .collect()
}

/// Get a specific scenario by ID.
pub fn get_scenario<'a>(project: &'a Project, scenario_id: &str) -> AppResult<&'a ScenarioDef> {
    project
        .scenario(scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))
}

/// Run the engine and check that every reported number is finite.
pub fn evaluate_inputs(
    inputs: &MixingInputs,
    constants: &EngineConstants,
) -> AppResult<CalculationResults> {
    let results = evaluate_with(inputs, constants);
    results.ensure_finite()?;
    Ok(results)
}

/// Evaluate one scenario of `project` with the constants in force for it.
pub fn evaluate_scenario(project: &Project, scenario_id: &str) -> AppResult<Evaluation> {
    let scenario = get_scenario(project, scenario_id)?;
    let constants = project.constants_for(scenario);

    let adjustments = sanitize(&scenario.inputs).adjustments;
    for adjustment in &adjustments {
        warn!(scenario = %scenario.id, %adjustment, "input adjusted");
    }

    let results = evaluate_inputs(&scenario.inputs, &constants)?;
    info!(
        scenario = %scenario.id,
        cov = results.mixer_cov,
        distance_m = results.mixing_distance_m,
        regime = %results.momentum_regime,
        "scenario evaluated"
    );

    Ok(Evaluation {
        scenario_id: scenario.id.clone(),
        inputs: scenario.inputs.clone(),
        constants,
        adjustments,
        results,
    })
}

/// Starter file: a ferric chloride dose into a 800 mm main with a Kenics mixer.
pub fn template_project() -> Project {
    let inputs = MixingInputs {
        dimension_m: 0.8,
        available_length_m: 10.0,
        flow_rate_m3h: 1500.0,
        density_kg_m3: 1000.0,
        viscosity_pa_s: 0.001,
        chemical_flow_lph: 50.0,
        chemical_density_kg_m3: 1450.0,
        chemical_viscosity_pa_s: 0.01,
        chemical_dose: 20.0,
        chemical_type: "Ferric chloride".to_string(),
        dilution_water_flow_lph: 300.0,
        water_temperature_c: 15.0,
        mixer_model: MixerModel::KenicsKm,
        num_elements: 6,
        injection_type: InjectionType::Single,
        target_mixing_time_s: 10.0,
        ..MixingInputs::default()
    };

    Project {
        version: LATEST_VERSION,
        name: "New dosing study".to_string(),
        constants: None,
        scenarios: vec![ScenarioDef {
            id: "main".to_string(),
            name: "Main dosing point".to_string(),
            description: Some("Edit the inputs, then run `dm-cli evaluate`".to_string()),
            inputs,
            constants: None,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_valid_and_evaluates() {
        let project = template_project();
        validate_project(&project).unwrap();

        let evaluation = evaluate_scenario(&project, "main").unwrap();
        assert!(evaluation.adjustments.is_empty());
        assert!(evaluation.results.cov_compliant);
        assert_eq!(evaluation.constants, EngineConstants::default());
    }

    #[test]
    fn unknown_scenario_is_reported() {
        let project = template_project();
        let err = evaluate_scenario(&project, "missing").unwrap_err();
        assert!(matches!(err, AppError::ScenarioNotFound(id) if id == "missing"));
    }

    #[test]
    fn empty_file_fails_validation() {
        let mut project = template_project();
        project.scenarios.clear();
        assert!(matches!(
            validate_project(&project),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn adjustments_are_surfaced() {
        let mut project = template_project();
        project.scenarios[0].inputs.flow_rate_m3h = f64::NAN;
        project.scenarios[0].inputs.dimension_m = 0.0;

        let evaluation = evaluate_scenario(&project, "main").unwrap();
        assert_eq!(evaluation.adjustments.len(), 2);
        assert_eq!(evaluation.results.velocity_mps, 0.0);
        assert!((evaluation.results.hydraulic_diameter_m - 0.001).abs() < 1e-12);
    }
}
