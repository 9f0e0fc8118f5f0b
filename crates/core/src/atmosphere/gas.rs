//! Ideal-gas unit conversion between mass concentration and mixing ratio.
//!
//! The plume formulas work in kg/m³ while observations and results are
//! reported as mixing ratios in ppb. For an ideal gas:
//!
//! ```text
//! ppb   = c · R · T · 1e9 / (P · M)
//! c     = ppb · P · M / (R · T · 1e9)
//! ```
//!
//! with `c` in kg/m³, `R` in J/(mol·K), `T` in K, `P` in Pa and `M` in kg/mol.

use crate::core_types::units::{Kelvin, KilogramsPerCubicMeter, Pascals, Ppb};
use serde::{Deserialize, Serialize};

/// Universal gas constant (J/(mol·K)).
pub const GAS_CONSTANT: f64 = 8.314;

/// Molar mass of methane (kg/mol).
pub const MOLAR_MASS_CH4: f64 = 0.01604;

/// Parts-per-billion scale factor.
const PPB_SCALE: f64 = 1e9;

/// Gas state used to convert between kg/m³ and ppb.
///
/// Passed explicitly into every plume call; nothing here is read from global
/// state. No physical validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasProperties {
    /// Gas constant R (J/(mol·K))
    pub gas_constant: f64,

    /// Air temperature T
    pub temperature: Kelvin,

    /// Air pressure P
    pub pressure: Pascals,

    /// Molar mass M of the tracer (kg/mol)
    pub molar_mass: f64,
}

impl Default for GasProperties {
    fn default() -> Self {
        Self {
            gas_constant: GAS_CONSTANT,
            temperature: Kelvin::from_celsius(25.0),
            pressure: Pascals::STANDARD_ATMOSPHERE,
            molar_mass: MOLAR_MASS_CH4,
        }
    }
}

impl GasProperties {
    /// Create gas properties from explicit `(T, P, M, R)` values.
    #[must_use]
    pub fn new(temperature: Kelvin, pressure: Pascals, molar_mass: f64, gas_constant: f64) -> Self {
        Self {
            gas_constant,
            temperature,
            pressure,
            molar_mass,
        }
    }

    /// Multiplier taking kg/m³ to ppb: `R·T·1e9 / (P·M)`.
    #[inline]
    #[must_use]
    pub fn ppb_per_kg_m3(&self) -> f64 {
        self.gas_constant * *self.temperature * PPB_SCALE / (*self.pressure * self.molar_mass)
    }

    /// Convert a mass concentration to a mixing ratio.
    #[inline]
    #[must_use]
    pub fn to_ppb(self, concentration: KilogramsPerCubicMeter) -> Ppb {
        Ppb::new(
            *concentration * self.gas_constant * *self.temperature * PPB_SCALE
                / (*self.pressure * self.molar_mass),
        )
    }

    /// Convert a mixing ratio to a mass concentration.
    #[inline]
    #[must_use]
    pub fn to_kg_per_m3(self, mixing_ratio: Ppb) -> KilogramsPerCubicMeter {
        KilogramsPerCubicMeter::new(
            *mixing_ratio * *self.pressure * self.molar_mass
                / (self.gas_constant * *self.temperature * PPB_SCALE),
        )
    }
}
