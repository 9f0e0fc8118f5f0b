//! Steady-state Gaussian plume model.
//!
//! - [`forward_plume`]: superpose point-source plumes at a set of receptors (g/h → ppb)
//! - [`inverse_plume`]: recover one source's rate from one observation (ppb → g/h)
//!
//! Both are pure functions of their arguments. A receptor only sees a source
//! when it lies strictly downwind of it; everything else is outside the plume
//! by definition and contributes exactly zero.

mod forward;
mod grid;
mod inverse;
mod source;

pub use forward::{forward_plume, forward_plume_grid, source_contribution};
pub use grid::{ConcentrationField, ReceptorGrid};
pub use inverse::{inverse_plume, inverse_plume_batch};
pub use source::PointSource;
