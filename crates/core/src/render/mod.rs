//! Visual output for grids. Only 2D SVG rendering is supported at the moment.

mod svg;

pub use self::svg::{grid_to_svg, grid_to_svg_with};
