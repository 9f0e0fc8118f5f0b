//! Gaussian Plume Dispersion Library
//!
//! Steady-state atmospheric dispersion from ground-level point sources, and
//! its closed-form inverse for estimating a source's emission rate from an
//! observed mixing ratio.
//!
//! ## Overview
//!
//! - [`plume::forward_plume`]: emission rates (g/h) → mixing ratio (ppb) at receptors
//! - [`plume::inverse_plume`]: observed ppb at one receptor → one source's rate (g/h)
//! - [`geo::geo_to_local`]: lat/lon → local plane metres
//! - [`smoothing::moving_average`]: valid-mode moving average
//!
//! Physical constants (R, T, P, M), wind and dispersion coefficients are
//! always explicit arguments; nothing is read from global state.
//!
//! ```
//! use plume_core::{forward_plume, inverse_plume, DispersionCoefficients, GasProperties};
//! use plume_core::{PointSource, Vec2, Wind};
//!
//! let wind = Wind::new(2.0, 0.0);
//! let dispersion = DispersionCoefficients::new(0.22, 0.894, 0.20, 0.894);
//! let gas = GasProperties::default();
//! let source = PointSource::new(0.0, 0.0, 3_600_000.0);
//! let receptor = Vec2::new(0.0, 100.0);
//!
//! let c = forward_plume(&[receptor], &[source], &wind, &dispersion, &gas);
//! let q = inverse_plume(receptor, source.position, c[0], &wind, &dispersion, &gas);
//! assert!((*q - 3_600_000.0).abs() < 1e-3);
//! ```

pub mod atmosphere;
pub mod config;
pub mod core_types;
pub mod error;
pub mod geo;
pub mod plume;
pub mod smoothing;

pub use atmosphere::{DispersionCoefficients, GasProperties, StabilityClass, Wind};
pub use config::Scenario;
pub use core_types::{GramsPerHour, Ppb, Vec2};
pub use error::{PlumeError, Result};
pub use geo::{geo_to_local, GeoReference, M_PER_DEG};
pub use plume::{
    forward_plume, forward_plume_grid, inverse_plume, inverse_plume_batch, ConcentrationField,
    PointSource, ReceptorGrid,
};
pub use smoothing::moving_average;
