//! Power-law dispersion coefficients and Pasquill-Gifford stability presets.
//!
//! Plume spread grows with downwind distance `d` (m) as
//!
//! ```text
//! σy = Ry · d^ry
//! σz = Rz · d^rz
//! ```
//!
//! # References
//!
//! - Pasquill, F. (1961). "The estimation of the dispersion of windborne material."
//! - Martin, D.O. (1976). "Comment on the change of concentration standard deviations
//!   with distance." JAPCA 26(2), 145-147.

use serde::{Deserialize, Serialize};

/// Lower bound applied to sigmas in the inverse model (m).
pub const SIGMA_FLOOR: f64 = 1e-3;

/// Metres per kilometre, for converting km-based fits.
const METERS_PER_KM: f64 = 1000.0;

/// Power-law coefficients `(Ry, ry, Rz, rz)` for plume spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionCoefficients {
    /// Horizontal coefficient Ry
    pub ry_coeff: f64,
    /// Horizontal exponent ry
    pub ry_exp: f64,
    /// Vertical coefficient Rz
    pub rz_coeff: f64,
    /// Vertical exponent rz
    pub rz_exp: f64,
}

impl Default for DispersionCoefficients {
    fn default() -> Self {
        StabilityClass::D.coefficients()
    }
}

impl DispersionCoefficients {
    /// Create coefficients from `(Ry, ry, Rz, rz)`.
    #[must_use]
    pub const fn new(ry_coeff: f64, ry_exp: f64, rz_coeff: f64, rz_exp: f64) -> Self {
        Self {
            ry_coeff,
            ry_exp,
            rz_coeff,
            rz_exp,
        }
    }

    /// Horizontal spread `σy` at downwind distance `d` (m).
    #[inline]
    #[must_use]
    pub fn sigma_y(&self, downwind: f64) -> f64 {
        self.ry_coeff * downwind.powf(self.ry_exp)
    }

    /// Vertical spread `σz` at downwind distance `d` (m).
    #[inline]
    #[must_use]
    pub fn sigma_z(&self, downwind: f64) -> f64 {
        self.rz_coeff * downwind.powf(self.rz_exp)
    }

    /// Both sigmas, each clamped to at least [`SIGMA_FLOOR`].
    ///
    /// A NaN sigma stays NaN; `f64::max` alone would replace it with the floor.
    #[inline]
    #[must_use]
    pub fn sigmas_floored(&self, downwind: f64) -> (f64, f64) {
        (
            floor_sigma(self.sigma_y(downwind)),
            floor_sigma(self.sigma_z(downwind)),
        )
    }
}

#[inline]
fn floor_sigma(sigma: f64) -> f64 {
    if sigma.is_nan() {
        sigma
    } else {
        sigma.max(SIGMA_FLOOR)
    }
}

/// Pasquill-Gifford atmospheric stability classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityClass {
    /// A: Very unstable (strong solar heating, light winds)
    A,
    /// B: Moderately unstable
    B,
    /// C: Slightly unstable
    C,
    /// D: Neutral (overcast or high winds)
    D,
    /// E: Slightly stable
    E,
    /// F: Very stable (nighttime, light winds)
    F,
}

impl StabilityClass {
    /// All classes, most unstable first.
    pub const ALL: [StabilityClass; 6] = [
        StabilityClass::A,
        StabilityClass::B,
        StabilityClass::C,
        StabilityClass::D,
        StabilityClass::E,
        StabilityClass::F,
    ];

    /// Martin (1976) near-field fit `(a, c, d)` with x in km and σ in m.
    ///
    /// `σy = a·x^0.894`, `σz = c·x^d` (offset term dropped).
    fn martin_fit(self) -> (f64, f64, f64) {
        match self {
            StabilityClass::A => (213.0, 440.8, 1.941),
            StabilityClass::B => (156.0, 106.6, 1.149),
            StabilityClass::C => (104.0, 61.0, 0.911),
            StabilityClass::D => (68.0, 33.2, 0.725),
            StabilityClass::E => (50.5, 22.8, 0.678),
            StabilityClass::F => (34.0, 14.35, 0.740),
        }
    }

    /// Power-law coefficients for distances in metres.
    #[must_use]
    pub fn coefficients(self) -> DispersionCoefficients {
        const RY_EXP: f64 = 0.894;
        let (a, c, d) = self.martin_fit();
        DispersionCoefficients {
            ry_coeff: a * METERS_PER_KM.powf(-RY_EXP),
            ry_exp: RY_EXP,
            rz_coeff: c * METERS_PER_KM.powf(-d),
            rz_exp: d,
        }
    }

    /// Parse a class letter (case-insensitive).
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "A" => Some(StabilityClass::A),
            "B" => Some(StabilityClass::B),
            "C" => Some(StabilityClass::C),
            "D" => Some(StabilityClass::D),
            "E" => Some(StabilityClass::E),
            "F" => Some(StabilityClass::F),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_power_law() {
        let coeffs = DispersionCoefficients::new(0.22, 0.894, 0.20, 0.894);
        let spread = 100f64.powf(0.894);
        assert_relative_eq!(coeffs.sigma_y(100.0), 0.22 * spread, epsilon = 1e-12);
        assert_relative_eq!(coeffs.sigma_z(100.0), 0.20 * spread, epsilon = 1e-12);
    }

    #[test]
    fn test_floor_keeps_nan() {
        let coeffs = DispersionCoefficients::new(0.22, 0.894, 0.20, 0.894);
        let (sy, sz) = coeffs.sigmas_floored(f64::NAN);
        assert!(sy.is_nan());
        assert!(sz.is_nan());
    }

    #[test]
    fn test_floor_only_applies_near_source() {
        let coeffs = DispersionCoefficients::new(0.22, 0.894, 0.20, 0.894);
        let (sy, sz) = coeffs.sigmas_floored(1e-6);
        assert_eq!(sy, SIGMA_FLOOR);
        assert_eq!(sz, SIGMA_FLOOR);

        let (sy, sz) = coeffs.sigmas_floored(50.0);
        assert_eq!(sy, coeffs.sigma_y(50.0));
        assert_eq!(sz, coeffs.sigma_z(50.0));
    }

    #[test]
    fn test_class_c_matches_reference_coefficient() {
        let c = StabilityClass::C.coefficients();
        assert_relative_eq!(c.ry_coeff, 0.216, max_relative = 0.01);
        assert_relative_eq!(c.ry_exp, 0.894);
    }

    #[test]
    fn test_spread_at_one_km_matches_table() {
        // At x = 1 km the fits reduce to σy = a, σz = c
        for class in StabilityClass::ALL {
            let (a, c, _) = class.martin_fit();
            let coeffs = class.coefficients();
            assert_relative_eq!(coeffs.sigma_y(1000.0), a, max_relative = 1e-9);
            assert_relative_eq!(coeffs.sigma_z(1000.0), c, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_unstable_spreads_wider() {
        let d = 500.0;
        let a = StabilityClass::A.coefficients();
        let f = StabilityClass::F.coefficients();
        assert!(a.sigma_y(d) > f.sigma_y(d));
        assert!(a.sigma_z(d) > f.sigma_z(d));
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(StabilityClass::from_letter("d"), Some(StabilityClass::D));
        assert_eq!(StabilityClass::from_letter(" F "), Some(StabilityClass::F));
        assert_eq!(StabilityClass::from_letter("G"), None);
    }
}
