//! Scenario configuration.
//!
//! A [`Scenario`] bundles every input of a plume run so it can be loaded from
//! JSON, checked once with [`Scenario::validate`], and evaluated. The plume
//! functions themselves never validate; this is where callers do.

use crate::atmosphere::{DispersionCoefficients, GasProperties, StabilityClass, Wind};
use crate::error::{PlumeError, Result};
use crate::plume::{forward_plume_grid, ConcentrationField, PointSource, ReceptorGrid};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Complete input set for one plume evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Uniform wind
    pub wind: Wind,

    /// Stability class preset. When set it replaces `dispersion`.
    pub stability_class: Option<StabilityClass>,

    /// Explicit power-law coefficients
    pub dispersion: DispersionCoefficients,

    /// Gas state for ppb conversion
    pub gas: GasProperties,

    /// Point sources
    pub sources: Vec<PointSource>,

    /// Receptor grid
    pub grid: ReceptorGrid,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            wind: Wind::default(),
            stability_class: None,
            dispersion: DispersionCoefficients::new(0.22, 0.894, 0.20, 0.894),
            gas: GasProperties::default(),
            sources: vec![PointSource::new(0.0, 0.0, 3_600_000.0)],
            grid: ReceptorGrid::default(),
        }
    }
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Scenario {
    /// Parse a scenario from JSON and validate it.
    ///
    /// Missing fields take their [`Default`] values.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::Parse`] for malformed JSON and
    /// [`PlumeError::InvalidConfig`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a JSON scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::Io`] if the file cannot be read, otherwise as
    /// [`Scenario::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading scenario from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Dispersion coefficients in effect (preset if a class is set).
    #[must_use]
    pub fn effective_dispersion(&self) -> DispersionCoefficients {
        self.stability_class
            .map_or(self.dispersion, StabilityClass::coefficients)
    }

    /// Check the inputs the plume model leaves to its caller.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !positive_finite(*self.wind.speed) {
            return Err(PlumeError::config(format!(
                "wind speed must be positive and finite, got {}",
                *self.wind.speed
            )));
        }
        if !self.wind.direction.is_finite() {
            return Err(PlumeError::config("wind direction must be finite"));
        }

        let d = self.effective_dispersion();
        for (name, value) in [
            ("Ry", d.ry_coeff),
            ("ry", d.ry_exp),
            ("Rz", d.rz_coeff),
            ("rz", d.rz_exp),
        ] {
            if !positive_finite(value) {
                return Err(PlumeError::config(format!(
                    "dispersion coefficient {name} must be positive, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("gas constant", self.gas.gas_constant),
            ("temperature", *self.gas.temperature),
            ("pressure", *self.gas.pressure),
            ("molar mass", self.gas.molar_mass),
        ] {
            if !positive_finite(value) {
                return Err(PlumeError::config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        for (i, source) in self.sources.iter().enumerate() {
            let rate = *source.rate;
            if !rate.is_finite() || rate < 0.0 {
                return Err(PlumeError::config(format!(
                    "source {i} emission rate must be non-negative, got {rate}"
                )));
            }
            if !source.position.iter().all(|v| v.is_finite()) {
                return Err(PlumeError::config(format!(
                    "source {i} position must be finite"
                )));
            }
        }

        if self.grid.is_empty() {
            return Err(PlumeError::config("receptor grid has no points"));
        }
        if self.grid.len() > 1 && !positive_finite(self.grid.spacing) {
            return Err(PlumeError::config(format!(
                "grid spacing must be positive, got {}",
                self.grid.spacing
            )));
        }

        Ok(())
    }

    /// Evaluate the forward plume over the scenario grid.
    #[must_use]
    pub fn run(&self) -> ConcentrationField {
        info!(
            "Running scenario: {} sources on a {}x{} grid ({:.1} m spacing)",
            self.sources.len(),
            self.grid.nx,
            self.grid.ny,
            self.grid.spacing
        );
        forward_plume_grid(
            &self.grid,
            &self.sources,
            &self.wind,
            &self.effective_dispersion(),
            &self.gas,
        )
    }
}
