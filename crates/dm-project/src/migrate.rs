//! Forward migration of older scenario files.

use crate::schema::Project;
use crate::{ProjectError, ProjectResult};

pub const LATEST_VERSION: u32 = 1;

type Step = fn(Project) -> ProjectResult<Project>;

/// `(from_version, step)`; each step yields `from_version + 1`.
const STEPS: &[(u32, Step)] = &[(0, stamp_unversioned)];

pub fn migrate_to_latest(mut project: Project) -> ProjectResult<Project> {
    while project.version < LATEST_VERSION {
        let from = project.version;
        let step = STEPS
            .iter()
            .find(|(v, _)| *v == from)
            .map(|(_, step)| *step)
            .ok_or_else(|| ProjectError::Migration {
                what: format!("No migration path from version {from}"),
            })?;
        project = step(project)?;
    }
    Ok(project)
}

/// Files written by hand often omit `version`; they parse as version 0 and
/// share the v1 layout.
fn stamp_unversioned(mut project: Project) -> ProjectResult<Project> {
    project.version = 1;
    Ok(project)
}
