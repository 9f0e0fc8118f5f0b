//! Point emission sources.

use crate::core_types::units::GramsPerHour;
use crate::core_types::vec2::Vec2;
use crate::error::{PlumeError, Result};
use serde::{Deserialize, Serialize};

/// A ground-level point source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSource {
    /// Source location (m)
    pub position: Vec2,
    /// Emission rate
    pub rate: GramsPerHour,
}

impl PointSource {
    /// Create a source at `(x, y)` emitting `rate_g_h` grams per hour.
    #[must_use]
    pub fn new(x: f64, y: f64, rate_g_h: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            rate: GramsPerHour::new(rate_g_h),
        }
    }

    /// Build a source list from parallel `x`, `y` and rate arrays.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::LengthMismatch`] if `ys` or `rates` differ in
    /// length from `xs`.
    pub fn from_parallel(xs: &[f64], ys: &[f64], rates: &[f64]) -> Result<Vec<PointSource>> {
        if ys.len() != xs.len() {
            return Err(PlumeError::LengthMismatch {
                what: "sources_y",
                expected: xs.len(),
                found: ys.len(),
            });
        }
        if rates.len() != xs.len() {
            return Err(PlumeError::LengthMismatch {
                what: "sources_q",
                expected: xs.len(),
                found: rates.len(),
            });
        }

        Ok(xs
            .iter()
            .zip(ys)
            .zip(rates)
            .map(|((&x, &y), &q)| PointSource::new(x, y, q))
            .collect())
    }
}
