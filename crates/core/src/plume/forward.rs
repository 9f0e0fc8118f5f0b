//! Forward Gaussian plume: emission rates in, mixing ratios out.
//!
//! Ground-level steady-state plume from point sources, no vertical offset or
//! ground reflection term:
//!
//! ```text
//! C = q / (π · u · σy · σz) · exp(−x_c² / (2σy²))      for x_d > 0
//! C = 0                                                 otherwise
//! ```
//!
//! where `x_d` is the downwind and `x_c` the crosswind distance from the
//! source, `q` is in kg/s and `C` in kg/m³. Contributions from several
//! sources superpose linearly, then the sum is converted to ppb.

use crate::atmosphere::{DispersionCoefficients, GasProperties, PlumeFrame, Wind};
use crate::core_types::units::{KilogramsPerCubicMeter, KilogramsPerSecond, Ppb};
use crate::core_types::vec2::Vec2;
use crate::plume::grid::{ConcentrationField, ReceptorGrid};
use crate::plume::source::PointSource;
use rayon::prelude::*;
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Plume concentration (kg/m³) from one source at a rotated displacement.
///
/// Returns `None` when the receptor is not strictly downwind, which also
/// covers a NaN downwind distance.
#[inline]
fn plume_term(
    crosswind: f64,
    downwind: f64,
    rate: KilogramsPerSecond,
    wind_speed: f64,
    dispersion: &DispersionCoefficients,
) -> Option<f64> {
    if downwind <= 0.0 || downwind.is_nan() {
        return None;
    }

    let sigma_y = dispersion.sigma_y(downwind);
    let sigma_z = dispersion.sigma_z(downwind);

    let term1 = *rate / (PI * wind_speed * sigma_y * sigma_z);
    let term2 = (-crosswind * crosswind / (2.0 * sigma_y * sigma_y)).exp();
    Some(term1 * term2)
}

/// Concentration contributed by a single source at a single receptor.
///
/// Exactly zero when the receptor is not downwind of the source.
#[must_use]
pub fn source_contribution(
    receptor: Vec2,
    source: &PointSource,
    wind: &Wind,
    dispersion: &DispersionCoefficients,
) -> KilogramsPerCubicMeter {
    let (crosswind, downwind) = wind.plume_frame().rotate(receptor - source.position);
    let value = plume_term(
        crosswind,
        downwind,
        source.rate.to_kg_per_s(),
        *wind.speed,
        dispersion,
    )
    .unwrap_or(0.0);
    KilogramsPerCubicMeter::new(value)
}

/// Accumulate one source into a kg/m³ field. Returns how many receptors it reached.
fn accumulate_source(
    field: &mut [KilogramsPerCubicMeter],
    receptors: &[Vec2],
    source: &PointSource,
    frame: &PlumeFrame,
    wind_speed: f64,
    dispersion: &DispersionCoefficients,
) -> usize {
    let rate = source.rate.to_kg_per_s();

    field
        .par_iter_mut()
        .zip(receptors.par_iter())
        .map(|(total, receptor)| {
            let (crosswind, downwind) = frame.rotate(receptor - source.position);
            match plume_term(crosswind, downwind, rate, wind_speed, dispersion) {
                Some(c) => {
                    *total += KilogramsPerCubicMeter::new(c);
                    1
                }
                None => 0,
            }
        })
        .sum()
}

/// Mixing ratio at each receptor from a set of point sources.
///
/// # Arguments
///
/// * `receptors` - Evaluation points (m)
/// * `sources` - Point sources with rates in g/h; an empty list gives an all-zero field
/// * `wind` - Uniform wind. A zero or negative speed yields inf/NaN output
/// * `dispersion` - Power-law spread coefficients `(Ry, ry, Rz, rz)`
/// * `gas` - Gas state for the kg/m³ → ppb conversion
///
/// # Returns
///
/// One value per receptor, in receptor order. Sources are summed in list
/// order for every receptor.
#[must_use]
pub fn forward_plume(
    receptors: &[Vec2],
    sources: &[PointSource],
    wind: &Wind,
    dispersion: &DispersionCoefficients,
    gas: &GasProperties,
) -> Vec<Ppb> {
    debug!(
        "Forward plume: {} receptors, {} sources, wind {} from {}",
        receptors.len(),
        sources.len(),
        wind.speed,
        wind.direction
    );

    let frame = wind.plume_frame();
    let wind_speed = *wind.speed;
    let mut field = vec![KilogramsPerCubicMeter::ZERO; receptors.len()];

    for (i, source) in sources.iter().enumerate() {
        let reached = accumulate_source(
            &mut field,
            receptors,
            source,
            &frame,
            wind_speed,
            dispersion,
        );
        if reached == 0 {
            trace!(
                "Source {} at ({:.1}, {:.1}) has no downwind receptors, skipped",
                i,
                source.position.x,
                source.position.y
            );
        }
    }

    field
        .into_iter()
        .map(|c| gas.to_ppb(c))
        .collect()
}

/// [`forward_plume`] evaluated over a regular receptor grid.
#[must_use]
pub fn forward_plume_grid(
    grid: &ReceptorGrid,
    sources: &[PointSource],
    wind: &Wind,
    dispersion: &DispersionCoefficients,
    gas: &GasProperties,
) -> ConcentrationField {
    let values = forward_plume(&grid.points(), sources, wind, dispersion, gas);
    ConcentrationField::new(*grid, values)
}
