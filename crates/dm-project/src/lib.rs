//! dm-project: scenario file format and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_project};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// `.json` is JSON; anything else (`.yaml`, `.yml`, none) is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    pub fn parse(self, content: &str) -> ProjectResult<Project> {
        let project: Project = match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        let project = migrate_to_latest(project)?;
        validate_project(&project)?;
        Ok(project)
    }

    pub fn render(self, project: &Project) -> ProjectResult<String> {
        validate_project(project)?;
        Ok(match self {
            Self::Yaml => serde_yaml::to_string(project)?,
            Self::Json => serde_json::to_string_pretty(project)?,
        })
    }
}

/// Read, migrate and validate a scenario file in the format its extension names.
pub fn load(path: &Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    FileFormat::from_path(path).parse(&content)
}

/// Validate and write a scenario file in the format its extension names.
pub fn save(path: &Path, project: &Project) -> ProjectResult<()> {
    let content = FileFormat::from_path(path).render(project)?;
    std::fs::write(path, content)?;
    Ok(())
}
