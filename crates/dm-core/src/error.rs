use thiserror::Error;

pub type DmResult<T> = Result<T, DmError>;

/// Post-condition failure of a calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
