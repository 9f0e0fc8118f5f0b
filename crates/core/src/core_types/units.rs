//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the quantities that cross the
//! plume API boundary, so an emission rate in g/h can never be passed where a
//! mixing ratio in ppb is expected.
//!
//! # Design Philosophy
//! - Every type wraps an `f64`; the plume formulas run in double precision end to end
//! - Constructors do not validate physical range (negative rates, zero wind
//!   speed and similar degenerate inputs propagate as IEEE values)
//! - Total ordering via `Ord` (NaN ordered after all values by `total_cmp`)
//! - Explicit conversion methods between the g/h ↔ kg/s rate units
//! - Serde support for scenario configuration files
//!
//! # Usage
//! ```
//! use plume_core::core_types::units::{GramsPerHour, KilogramsPerSecond};
//!
//! let rate = GramsPerHour::new(3_600_000.0);
//! let kg_s: KilogramsPerSecond = rate.into();
//! assert!((*kg_s - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref};

/// Seconds per hour
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Grams per kilogram
const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// EMISSION RATES
// ============================================================================

/// Source emission rate in grams per hour (the boundary unit for sources)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GramsPerHour(f64);

impl Eq for GramsPerHour {}

impl PartialOrd for GramsPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GramsPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for GramsPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl GramsPerHour {
    /// No emission
    pub const ZERO: GramsPerHour = GramsPerHour(0.0);

    /// Create a new emission rate
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        GramsPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to kilograms per second (`/ 3600 / 1000`)
    #[inline]
    #[must_use]
    pub fn to_kg_per_s(self) -> KilogramsPerSecond {
        KilogramsPerSecond(self.0 / SECONDS_PER_HOUR / GRAMS_PER_KILOGRAM)
    }
}

impl From<f64> for GramsPerHour {
    fn from(v: f64) -> Self {
        GramsPerHour(v)
    }
}

impl From<GramsPerHour> for f64 {
    fn from(q: GramsPerHour) -> f64 {
        q.0
    }
}

impl From<GramsPerHour> for KilogramsPerSecond {
    fn from(q: GramsPerHour) -> KilogramsPerSecond {
        q.to_kg_per_s()
    }
}

impl fmt::Display for GramsPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} g/h", self.0)
    }
}

/// Emission rate in kilograms per second (internal plume formula unit)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilogramsPerSecond(f64);

impl Deref for KilogramsPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilogramsPerSecond {
    /// Create a new mass flow rate
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilogramsPerSecond(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to grams per hour (`* 3600 * 1000`)
    #[inline]
    #[must_use]
    pub fn to_g_per_h(self) -> GramsPerHour {
        GramsPerHour(self.0 * SECONDS_PER_HOUR * GRAMS_PER_KILOGRAM)
    }
}

impl From<KilogramsPerSecond> for GramsPerHour {
    fn from(q: KilogramsPerSecond) -> GramsPerHour {
        q.to_g_per_h()
    }
}

impl fmt::Display for KilogramsPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} kg/s", self.0)
    }
}

// ============================================================================
// CONCENTRATIONS
// ============================================================================

/// Mass concentration in kilograms per cubic metre
///
/// Conversion to and from [`Ppb`] needs the gas state, see
/// [`GasProperties`](crate::atmosphere::GasProperties).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilogramsPerCubicMeter(f64);

impl Deref for KilogramsPerCubicMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilogramsPerCubicMeter {
    /// Zero concentration
    pub const ZERO: KilogramsPerCubicMeter = KilogramsPerCubicMeter(0.0);

    /// Create a new mass concentration
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilogramsPerCubicMeter(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Add for KilogramsPerCubicMeter {
    type Output = KilogramsPerCubicMeter;
    fn add(self, rhs: KilogramsPerCubicMeter) -> KilogramsPerCubicMeter {
        KilogramsPerCubicMeter(self.0 + rhs.0)
    }
}

impl AddAssign for KilogramsPerCubicMeter {
    fn add_assign(&mut self, rhs: KilogramsPerCubicMeter) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for KilogramsPerCubicMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e} kg/m³", self.0)
    }
}

/// Mixing ratio in parts per billion (the boundary unit for concentrations)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Ppb(f64);

impl Eq for Ppb {}

impl PartialOrd for Ppb {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ppb {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Ppb {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Ppb {
    /// Zero mixing ratio
    pub const ZERO: Ppb = Ppb(0.0);

    /// Create a new mixing ratio
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Ppb(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Ppb {
    fn from(v: f64) -> Self {
        Ppb(v)
    }
}

impl From<Ppb> for f64 {
    fn from(c: Ppb) -> f64 {
        c.0
    }
}

impl fmt::Display for Ppb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} ppb", self.0)
    }
}

// ============================================================================
// METEOROLOGY
// ============================================================================

/// Wind speed in metres per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl Eq for MetersPerSecond {}

impl PartialOrd for MetersPerSecond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetersPerSecond {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecond {
    /// Create a new speed
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for MetersPerSecond {
    fn from(v: f64) -> Self {
        MetersPerSecond(v)
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s", self.0)
    }
}

/// Angle in degrees
///
/// Wind directions use the meteorological convention: the bearing the wind
/// blows *from*, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

// ============================================================================
// GAS STATE
// ============================================================================

/// Absolute temperature in Kelvin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(f64);

impl Eq for Kelvin {}

impl PartialOrd for Kelvin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kelvin {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kelvin {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kelvin {
    /// Celsius to Kelvin conversion offset (0°C = 273.15 K)
    const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    /// Create a new temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kelvin(value)
    }

    /// Create from degrees Celsius
    #[inline]
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Kelvin(celsius + Self::CELSIUS_KELVIN_OFFSET)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Kelvin {
    fn from(v: f64) -> Self {
        Kelvin(v)
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} K", self.0)
    }
}

/// Pressure in Pascals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pascals(f64);

impl Deref for Pascals {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Pascals {
    /// Standard sea-level pressure
    pub const STANDARD_ATMOSPHERE: Pascals = Pascals(101_325.0);

    /// Create a new pressure
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Pascals(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Pascals {
    fn from(v: f64) -> Self {
        Pascals(v)
    }
}

impl fmt::Display for Pascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} Pa", self.0)
    }
}
