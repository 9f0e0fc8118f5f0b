//! Atmospheric inputs to the plume model.
//!
//! This module holds everything the plume equations take from the atmosphere:
//! - Uniform wind and the rotation into the downwind/crosswind frame
//! - Power-law dispersion coefficients and Pasquill-Gifford presets
//! - Ideal-gas state for kg/m³ ↔ ppb conversion
//!
//! All values are plain immutable parameters passed into each call.

mod gas;
mod stability;
mod wind;

pub use gas::{GasProperties, GAS_CONSTANT, MOLAR_MASS_CH4};
pub use stability::{DispersionCoefficients, StabilityClass, SIGMA_FLOOR};
pub use wind::{PlumeFrame, Wind};
