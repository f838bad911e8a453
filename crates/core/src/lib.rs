//! Hexgrid is a hexagonal grid geometry engine. It builds a grid of hexagonal
//! cells from a size, a hexagon radius, an orientation and a layout shape,
//! lets you attach your own data to each cell, and answers spatial questions
//! about the grid: which cell is under a pixel, neighbors, distances, rings,
//! lines, rotation and line of sight.
//!
//! ```
//! use hexgrid::{
//!     CubeCoordinate, GridLayout, HexagonOrientation, HexagonalGrid,
//!     HexagonalGridBuilder,
//! };
//!
//! let mut grid: HexagonalGrid<&str> = HexagonalGridBuilder::new()
//!     .width(5)
//!     .height(5)
//!     .radius(20.0)
//!     .orientation(HexagonOrientation::FlatTop)
//!     .layout(GridLayout::Hexagonal)
//!     .build()
//!     .unwrap();
//! grid.storage_mut()
//!     .set_data(CubeCoordinate::new(2, 1), "treasure")
//!     .unwrap();
//!
//! let center = grid.get_by_cube_coordinate(CubeCoordinate::new(2, 1)).unwrap();
//! assert_eq!(center.data().unwrap(), &"treasure");
//! assert_eq!(grid.get_neighbors_of(&center).len(), 6);
//! ```
//!
//! See [HexagonalGridBuilder] for the available settings, and the
//! [grid::hex] module for a description of the coordinate systems.

mod config;
mod error;
pub mod grid;
#[cfg(feature = "svg")]
pub mod render;
mod util;

pub use crate::{
    config::{GridConfig, HexagonalGridBuilder},
    error::HexGridError,
    grid::{
        calculator::HexagonalGridCalculator,
        hex::{
            CubeCoordinate, CubeVector, HexDirection, HexagonOrientation,
            OffsetCoordinate, RotationDirection,
        },
        hexagon::{Hexagon, HexagonMut, Point},
        layout::{
            GridLayout, GridLayoutStrategy, HexagonalGridLayout,
            RectangularGridLayout, TrapezoidGridLayout, TriangularGridLayout,
            MAX_GRID_SIZE,
        },
        storage::HexagonDataStorage,
        GridData, GridStorageMut, HexagonalGrid,
    },
};
