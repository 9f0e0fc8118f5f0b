//! Inverse Gaussian plume: an observed mixing ratio back to an emission rate.
//!
//! Inverts the forward formula for a single source:
//!
//! ```text
//! q = C · π · u · σy · σz · exp(+x_c² / (2σy²))
//! ```
//!
//! Sigmas are floored at [`SIGMA_FLOOR`](crate::atmosphere::SIGMA_FLOOR) so a
//! receptor almost on top of the source cannot blow the estimate up. The
//! observation is assumed to come from this one source only.

use crate::atmosphere::{DispersionCoefficients, GasProperties, Wind};
use crate::core_types::units::{GramsPerHour, KilogramsPerSecond, Ppb};
use crate::core_types::vec2::Vec2;
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Estimate a single source's emission rate from one observation.
///
/// # Arguments
///
/// * `receptor` - Observation location (m)
/// * `source` - Assumed source location (m)
/// * `observed` - Observed mixing ratio at the receptor
/// * `wind`, `dispersion`, `gas` - Same meaning as in
///   [`forward_plume`](crate::plume::forward_plume)
///
/// # Returns
///
/// Emission rate in g/h. Exactly zero when the receptor is not strictly
/// downwind of the source. A negative observation gives a negative rate.
/// A NaN offset is not rejected and comes back as a NaN rate.
#[must_use]
pub fn inverse_plume(
    receptor: Vec2,
    source: Vec2,
    observed: Ppb,
    wind: &Wind,
    dispersion: &DispersionCoefficients,
    gas: &GasProperties,
) -> GramsPerHour {
    let (crosswind, downwind) = wind.plume_frame().rotate(receptor - source);

    if downwind <= 0.0 {
        trace!(
            "Receptor ({:.1}, {:.1}) not downwind of source ({:.1}, {:.1})",
            receptor.x,
            receptor.y,
            source.x,
            source.y
        );
        return GramsPerHour::ZERO;
    }

    let (sigma_y, sigma_z) = dispersion.sigmas_floored(downwind);
    let concentration = gas.to_kg_per_m3(observed);

    let exp_term = (crosswind * crosswind / (2.0 * sigma_y * sigma_y)).exp();
    let rate = KilogramsPerSecond::new(
        *concentration * PI * *wind.speed * sigma_y * sigma_z * exp_term,
    );

    debug!(
        "Inverse plume: {} at {:.1} m downwind, {:.1} m crosswind -> {}",
        observed, downwind, crosswind, rate
    );

    rate.to_g_per_h()
}

/// Apply [`inverse_plume`] to each observation independently.
///
/// Every entry is its own single-source estimate for `source`; the
/// observations are not combined.
#[must_use]
pub fn inverse_plume_batch(
    observations: &[(Vec2, Ppb)],
    source: Vec2,
    wind: &Wind,
    dispersion: &DispersionCoefficients,
    gas: &GasProperties,
) -> Vec<GramsPerHour> {
    observations
        .iter()
        .map(|&(receptor, observed)| {
            inverse_plume(receptor, source, observed, wind, dispersion, gas)
        })
        .collect()
}
