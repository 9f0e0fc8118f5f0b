//! Vector type alias for planar positions.

use nalgebra::Vector2;

/// 2D vector type for receptor and source positions.
///
/// An alias for `nalgebra::Vector2<f64>` in a local tangent plane: `x` points
/// east and `y` points north, both in metres.
pub type Vec2 = Vector2<f64>;
