//! Latitude/longitude to local plane projection.
//!
//! Equirectangular approximation around a reference point:
//!
//! ```text
//! x = (lon − ref_lon) · m_per_deg · cos(ref_lat)
//! y = (lat − ref_lat) · m_per_deg
//! ```
//!
//! Flat-Earth; only valid for displacements small compared to Earth's radius.

use crate::core_types::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Metres per degree of latitude (mean).
pub const M_PER_DEG: f64 = 111_320.0;

/// Project `(lat, lon)` in degrees onto a plane centred on `(ref_lat, ref_lon)`.
///
/// Returns `(x, y)` in metres with `x` east and `y` north.
#[must_use]
pub fn geo_to_local(
    lat: f64,
    lon: f64,
    ref_lat: f64,
    ref_lon: f64,
    metres_per_degree: f64,
) -> Vec2 {
    let x = (lon - ref_lon) * metres_per_degree * ref_lat.to_radians().cos();
    let y = (lat - ref_lat) * metres_per_degree;
    Vec2::new(x, y)
}

/// Reference point for a local tangent plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoReference {
    /// Reference latitude (degrees)
    pub lat: f64,
    /// Reference longitude (degrees)
    pub lon: f64,
    /// Metres per degree used for the projection
    #[serde(default = "default_metres_per_degree")]
    pub metres_per_degree: f64,
}

fn default_metres_per_degree() -> f64 {
    M_PER_DEG
}

impl GeoReference {
    /// Reference point using [`M_PER_DEG`].
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            metres_per_degree: M_PER_DEG,
        }
    }

    /// Project one point.
    #[must_use]
    pub fn to_local(self, lat: f64, lon: f64) -> Vec2 {
        geo_to_local(lat, lon, self.lat, self.lon, self.metres_per_degree)
    }

    /// Project a list of `(lat, lon)` pairs.
    #[must_use]
    pub fn to_local_many(self, coords: &[(f64, f64)]) -> Vec<Vec2> {
        coords
            .iter()
            .map(|&(lat, lon)| self.to_local(lat, lon))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_maps_to_origin() {
        let p = geo_to_local(-31.95, 115.86, -31.95, 115.86, M_PER_DEG);
        assert_eq!(p, Vec2::zeros());
    }

    #[test]
    fn test_latitude_degree_is_m_per_deg_north() {
        let p = geo_to_local(1.0, 0.0, 0.0, 0.0, M_PER_DEG);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, M_PER_DEG);
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        let reference = GeoReference::new(60.0, 10.0);
        let p = reference.to_local(60.0, 11.0);
        // cos(60°) = 0.5
        assert_relative_eq!(p.x, 0.5 * M_PER_DEG, max_relative = 1e-12);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn test_many_preserves_order() {
        let reference = GeoReference::new(0.0, 0.0);
        let points = reference.to_local_many(&[(0.0, 0.0), (-0.001, 0.002)]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Vec2::zeros());
        assert!(points[1].x > 0.0 && points[1].y < 0.0);
    }
}
