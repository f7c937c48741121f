//! Evaluation of the inheritance model over dense 2D grids, and rendering of the resulting
//! probability surfaces as 3D plots.

mod error;
pub use error::SurfaceError;

mod axis;
pub use axis::{Axis, MAX_AXIS_VALUES};

mod grid;
pub use grid::{SurfaceGrid, MAX_GRID_VALUES};

mod colormap;
pub use colormap::ColorMap;

mod plot;
pub use plot::{SurfaceLayer, SurfacePlot};

pub mod figures;
pub use figures::Figures;
