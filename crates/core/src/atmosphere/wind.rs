//! Uniform wind and the downwind/crosswind plume frame.

use crate::core_types::units::{Degrees, MetersPerSecond};
use crate::core_types::vec2::Vec2;
use nalgebra::Rotation2;
use serde::{Deserialize, Serialize};

/// Uniform surface wind driving the plume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Mean transport speed `u`. Must be positive for a finite plume.
    pub speed: MetersPerSecond,

    /// Wind direction in degrees (meteorological bearing)
    pub direction: Degrees,
}

impl Default for Wind {
    fn default() -> Self {
        Self {
            speed: MetersPerSecond::new(2.0),
            direction: Degrees::new(0.0),
        }
    }
}

impl Wind {
    /// Create a wind from speed (m/s) and direction (degrees).
    #[must_use]
    pub fn new(speed: f64, direction: f64) -> Self {
        Self {
            speed: MetersPerSecond::new(speed),
            direction: Degrees::new(direction),
        }
    }

    /// Rotation taking world displacements into the plume frame.
    #[must_use]
    pub fn plume_frame(&self) -> PlumeFrame {
        PlumeFrame::new(self.direction)
    }
}

/// Rotation into the downwind/crosswind frame.
///
/// Uses `θ = −radians(direction)`:
///
/// ```text
/// crosswind = dx·cosθ − dy·sinθ
/// downwind  = dx·sinθ + dy·cosθ
/// ```
///
/// so the downwind axis in world coordinates is `(−sin φ, cos φ)` for a
/// direction `φ`. At 0° the plume travels towards +y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlumeFrame {
    rotation: Rotation2<f64>,
}

impl PlumeFrame {
    /// Build the frame for a wind direction.
    #[must_use]
    pub fn new(direction: Degrees) -> Self {
        Self {
            rotation: Rotation2::new(-direction.to_radians()),
        }
    }

    /// Rotate a receptor-minus-source displacement.
    ///
    /// Returns `(crosswind, downwind)`, i.e. `(dx_rot, dy_rot)`.
    #[inline]
    #[must_use]
    pub fn rotate(&self, displacement: Vec2) -> (f64, f64) {
        let rotated = self.rotation * displacement;
        (rotated.x, rotated.y)
    }

    /// Unit vector pointing downwind, in world coordinates.
    #[must_use]
    pub fn downwind_axis(&self) -> Vec2 {
        self.rotation.inverse() * Vec2::new(0.0, 1.0)
    }
}
