//! dm-core: shared foundation for dosemix.
//!
//! Contains:
//! - units (uom SI types + constructors + flow-rate conversions)
//! - numeric (Real + tolerances + floors used before every division)
//! - error (post-condition errors)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{DmError, DmResult};
pub use numeric::*;
pub use units::*;
