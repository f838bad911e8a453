//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! The grid uses two different coordinate systems:
//!
//! ### Cube Coordinates
//!
//! Cube coordinates are the primary way to address a cell. The system is the
//! [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three integer components (`x`, `y`, and `z`) and
//! **for every cell, `x + y + z = 0`.** Even though hexagons are laid out in
//! two dimensions, the third component makes the math around distance,
//! rotation and line drawing much simpler. See [CubeCoordinate].
//!
//! ### Offset Coordinates
//!
//! Offset coordinates are plain column/row pairs. They're how
//! rectangular-looking layouts are described, and how pixel positions are
//! first estimated. Every other row (pointy-top) or every other column
//! (flat-top) is shoved over by half a hexagon. See [OffsetCoordinate] and the
//! [convert] module for how the two systems map onto each other.
//!
//! ### Pixel Coordinates
//!
//! Finally, every cell has a position in pixel space, determined by the grid's
//! hexagon radius and orientation. The origin cell's bounding box touches the
//! top-left corner `(0, 0)`, `x` grows to the right and `y` grows downwards.
//! See [GridData](crate::GridData) for the pixel geometry.

pub mod convert;
mod unit;

pub use self::unit::*;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A set of cube coordinates
pub type CubeCoordinateSet = HashSet<CubeCoordinate, FnvBuildHasher>;
/// An ORDERED map of cube coordinates to some `T`. Iteration follows insertion
/// order.
pub type CubeCoordinateIndexMap<T> = IndexMap<CubeCoordinate, T, FnvBuildHasher>;
