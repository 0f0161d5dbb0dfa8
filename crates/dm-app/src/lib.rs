//! Shared application service layer for dosing-mixing.
//!
//! Frontends go through here to load scenario files, evaluate scenarios,
//! and request the engineering audit without blocking on it.

pub mod audit_worker;
pub mod error;
pub mod scenario_service;

// Re-export key types for convenience
pub use audit_worker::{AuditJob, AuditMessage, AuditWorker};
pub use error::{AppError, AppResult};
pub use scenario_service::{
    Evaluation, ScenarioSummary, evaluate_inputs, evaluate_scenario, get_scenario,
    list_scenarios, load_project, save_project, template_project, validate_project,
};
