//! Grid layouts decide which cells make up a grid. Each layout is a
//! [GridLayoutStrategy]; the built-in ones are also available through the
//! [GridLayout] enum, which is what configs refer to.

use crate::grid::hex::{CubeCoordinate, HexagonOrientation, OffsetCoordinate};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, sync::Arc};
use strum::{EnumIter, EnumString};

/// Defines the shape of a grid. A strategy generates the coordinates that make
/// up a grid of a given size, and decides which sizes it can generate.
///
/// To support a new grid shape, implement this trait and pass it to
/// [HexagonalGridBuilder::layout_strategy](crate::HexagonalGridBuilder::layout_strategy).
/// Nothing else needs to know about the new shape.
pub trait GridLayoutStrategy: Debug + Send + Sync {
    /// Generate every coordinate in a grid of the given size, in the order the
    /// grid should iterate them. Only called with sizes that pass
    /// [Self::validate].
    fn generate_coordinates(
        &self,
        width: u32,
        height: u32,
        orientation: HexagonOrientation,
    ) -> Vec<CubeCoordinate>;

    /// Can this layout generate a grid with the given size?
    fn validate(&self, width: u32, height: u32) -> bool;

    /// Human-readable name of the layout
    fn name(&self) -> &str;
}

/// Largest width or height any built-in layout accepts. [GridConfig]
/// enforces the same bound.
///
/// [GridConfig]: crate::GridConfig
pub const MAX_GRID_SIZE: u32 = 10_000;

/// The size check shared by every layout: there must be at least one cell in
/// each direction, and no more than [MAX_GRID_SIZE]
fn validate_common(width: u32, height: u32) -> bool {
    let valid = 1..=MAX_GRID_SIZE;
    valid.contains(&width) && valid.contains(&height)
}

/// A grid in the shape of a rectangle, one cell per column/row pair.
///
/// **Note:** the cells in row 0 with an odd column are left out, so the top
/// edge of the grid is notched. A 3x7 grid therefore has 20 cells, not 21.
#[derive(Copy, Clone, Debug, Default)]
pub struct RectangularGridLayout;

impl GridLayoutStrategy for RectangularGridLayout {
    fn generate_coordinates(
        &self,
        width: u32,
        height: u32,
        orientation: HexagonOrientation,
    ) -> Vec<CubeCoordinate> {
        let mut coords = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                if row == 0 && col % 2 == 1 {
                    continue;
                }
                coords.push(CubeCoordinate::from_offset(
                    OffsetCoordinate::new(col, row),
                    orientation,
                ));
            }
        }
        coords
    }

    fn validate(&self, width: u32, height: u32) -> bool {
        validate_common(width, height)
    }

    fn name(&self) -> &str {
        "RECTANGULAR"
    }
}

/// A grid in the shape of one big hexagon. Width and height must be equal and
/// odd; the size is the number of cells along the middle row/column.
#[derive(Copy, Clone, Debug, Default)]
pub struct HexagonalGridLayout;

impl GridLayoutStrategy for HexagonalGridLayout {
    fn generate_coordinates(
        &self,
        width: u32,
        _height: u32,
        orientation: HexagonOrientation,
    ) -> Vec<CubeCoordinate> {
        // Center the big hexagon in the offset rectangle, so no cell ends up
        // with a negative offset coordinate
        let radius = (width / 2) as i32;
        let center = CubeCoordinate::from_offset(
            OffsetCoordinate::new(radius, radius),
            orientation,
        );
        let mut coords = center.range(radius as u32);
        // Row by row, then left to right, same as the rectangular layout
        coords.sort_by_key(|coord| {
            let offset = coord.to_offset(orientation);
            (offset.row, offset.col)
        });
        coords
    }

    fn validate(&self, width: u32, height: u32) -> bool {
        validate_common(width, height) && width == height && width % 2 == 1
    }

    fn name(&self) -> &str {
        "HEXAGONAL"
    }
}

/// A grid in the shape of a triangle, with its right angle at the origin.
/// Width and height must be equal.
#[derive(Copy, Clone, Debug, Default)]
pub struct TriangularGridLayout;

impl GridLayoutStrategy for TriangularGridLayout {
    fn generate_coordinates(
        &self,
        width: u32,
        _height: u32,
        _orientation: HexagonOrientation,
    ) -> Vec<CubeCoordinate> {
        let size = width as i32;
        let mut coords = Vec::new();
        for z in 0..size {
            for x in 0..size - z {
                coords.push(CubeCoordinate::new(x, z));
            }
        }
        coords
    }

    fn validate(&self, width: u32, height: u32) -> bool {
        validate_common(width, height) && width == height
    }

    fn name(&self) -> &str {
        "TRIANGULAR"
    }
}

/// A grid in the shape of a parallelogram (a rhombus when width = height), one
/// cell per `(x, z)` pair in `[0, width) x [0, height)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TrapezoidGridLayout;

impl GridLayoutStrategy for TrapezoidGridLayout {
    fn generate_coordinates(
        &self,
        width: u32,
        height: u32,
        _orientation: HexagonOrientation,
    ) -> Vec<CubeCoordinate> {
        let mut coords = Vec::with_capacity(width as usize * height as usize);
        for z in 0..height as i32 {
            for x in 0..width as i32 {
                coords.push(CubeCoordinate::new(x, z));
            }
        }
        coords
    }

    fn validate(&self, width: u32, height: u32) -> bool {
        validate_common(width, height)
    }

    fn name(&self) -> &str {
        "TRAPEZOID"
    }
}

/// The built-in layouts. This is what configs refer to; use
/// [GridLayout::strategy] to get the matching [GridLayoutStrategy].
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GridLayout {
    Rectangular,
    Hexagonal,
    Triangular,
    Trapezoid,
}

impl GridLayout {
    pub fn strategy(self) -> Arc<dyn GridLayoutStrategy> {
        match self {
            Self::Rectangular => Arc::new(RectangularGridLayout),
            Self::Hexagonal => Arc::new(HexagonalGridLayout),
            Self::Triangular => Arc::new(TriangularGridLayout),
            Self::Trapezoid => Arc::new(TrapezoidGridLayout),
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::Rectangular
    }
}
