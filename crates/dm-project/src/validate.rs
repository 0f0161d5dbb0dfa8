//! Project validation logic.
//!
//! Only the file structure and the correlation constants are checked here.
//! Scenario inputs are never rejected; the engine sanitizes them.

use crate::schema::Project;
use dm_engine::EngineConstants;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if let Some(constants) = &project.constants {
        validate_constants(constants, "constants")?;
    }

    let mut scenario_ids = HashSet::new();
    for scenario in &project.scenarios {
        if scenario.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("scenario '{}' id", scenario.name),
                value: scenario.id.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        if !scenario_ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        if let Some(constants) = &scenario.constants {
            validate_constants(constants, &format!("scenario '{}' constants", scenario.id))?;
        }
    }

    Ok(())
}

fn validate_constants(c: &EngineConstants, context: &str) -> Result<(), ValidationError> {
    let positive = [
        ("natural_friction_factor", c.natural_friction_factor),
        ("natural_decay_factor", c.natural_decay_factor),
        ("natural_cov_prefactor", c.natural_cov_prefactor),
        ("channel_decay", c.channel_decay),
        ("gravity_mps2", c.gravity_mps2),
        ("water_density_kg_m3", c.water_density_kg_m3),
        ("water_viscosity_pa_s", c.water_viscosity_pa_s),
        ("quill_radius_m", c.quill_radius_m),
        ("momentum_reference_diameter_m", c.momentum_reference_diameter_m),
    ];

    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{context} {name}"),
                value: value.to_string(),
                reason: "must be positive and finite".to_string(),
            });
        }
    }

    Ok(())
}
