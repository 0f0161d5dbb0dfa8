//! dm-engine: reagent blending and hydraulic performance engine.
//!
//! Turns conduit geometry, carrier and chemical stream properties and an
//! optional in-line static mixer into mixing and headloss metrics.
//!
//! The engine is a chain of pure stages, each a deterministic function of
//! the sanitized input record and the stages upstream of it:
//!
//! 1. [`geometry`]: cross-sectional area and hydraulic diameter
//! 2. [`flow`]: bulk velocity, Reynolds number, dilution ratio
//! 3. [`injection`]: blended density and viscosity of the injected stream
//! 4. [`mixer`]: CoV, friction factor and effective mixing length
//! 5. [`hydraulics`]: headloss and mixing intensity (G-value)
//! 6. [`distance`] and [`momentum`]: distance/time to target CoV, jet momentum ratio
//!
//! # Example
//!
//! ```
//! use dm_engine::{MixingInputs, MixerModel, evaluate};
//!
//! let inputs = MixingInputs {
//!     dimension_m: 0.8,
//!     available_length_m: 10.0,
//!     flow_rate_m3h: 1500.0,
//!     density_kg_m3: 1000.0,
//!     viscosity_pa_s: 0.001,
//!     mixer_model: MixerModel::None,
//!     ..MixingInputs::default()
//! };
//!
//! let results = evaluate(&inputs);
//! assert!(results.velocity_mps > 0.0);
//! assert!(results.mixer_cov <= 1.0);
//! ```

pub mod constants;
pub mod distance;
pub mod engine;
pub mod flow;
pub mod geometry;
pub mod hydraulics;
pub mod injection;
pub mod inputs;
pub mod mixer;
pub mod momentum;
pub mod results;
pub mod sanitize;

// Re-exports
pub use constants::EngineConstants;
pub use engine::{evaluate, evaluate_with};
pub use inputs::{ConduitShape, ConduitType, InjectionType, MixerModel, MixingInputs, PitchRatio};
pub use momentum::MomentumRegime;
pub use results::{CalculationResults, ChemistryLimits};
pub use sanitize::{Adjustment, Sanitized, SanitizedInputs, sanitize};
