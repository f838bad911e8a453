pub mod calculator;
pub mod hex;
pub mod hexagon;
pub mod layout;
pub mod storage;

use crate::{
    grid::{
        calculator::HexagonalGridCalculator,
        hex::{
            CubeCoordinate, HexDirection, HexagonOrientation, OffsetCoordinate,
        },
        hexagon::{Hexagon, HexagonMut, Point},
        layout::GridLayoutStrategy,
        storage::HexagonDataStorage,
    },
    timed, HexGridError,
};
use log::debug;
use std::{f64::consts::PI, iter, sync::Arc};

/// Metadata shared by every cell in a grid: the size and shape of the grid,
/// plus the pixel geometry of its hexagons. Computed once when the grid is
/// built and never changed afterwards.
///
/// ## Pixel Geometry
///
/// For a hexagon radius `r` (center to corner):
///
/// | Orientation | Width   | Height  |
/// | ----------- | ------- | ------- |
/// | Pointy top  | `√3·r`  | `1.5·r` |
/// | Flat top    | `1.5·r` | `√3·r`  |
///
/// Width/height here are the distances between neighboring cell centers along
/// each pixel axis, not the bounding box of a single hexagon. The inner radius
/// (center to the middle of a side) is always `√3/2·r`.
#[derive(Clone, Debug)]
pub struct GridData {
    orientation: HexagonOrientation,
    layout: Arc<dyn GridLayoutStrategy>,
    radius: f64,
    width: u32,
    height: u32,
    hexagon_width: f64,
    hexagon_height: f64,
    inner_radius: f64,
}

impl GridData {
    /// Create grid metadata. **This doesn't validate anything**, use
    /// [HexagonalGridBuilder](crate::HexagonalGridBuilder) to get validated
    /// grid data.
    pub(crate) fn new(
        orientation: HexagonOrientation,
        layout: Arc<dyn GridLayoutStrategy>,
        radius: f64,
        width: u32,
        height: u32,
    ) -> Self {
        // Distance between opposite sides
        let side_to_side = 3f64.sqrt() * radius;
        // Distance between rows (pointy) or columns (flat) of cell centers
        let row_spacing = radius * 1.5;
        let (hexagon_width, hexagon_height) = match orientation {
            HexagonOrientation::PointyTop => (side_to_side, row_spacing),
            HexagonOrientation::FlatTop => (row_spacing, side_to_side),
        };

        Self {
            orientation,
            layout,
            radius,
            width,
            height,
            hexagon_width,
            hexagon_height,
            inner_radius: side_to_side / 2.0,
        }
    }

    pub fn orientation(&self) -> HexagonOrientation {
        self.orientation
    }

    pub fn layout(&self) -> &dyn GridLayoutStrategy {
        self.layout.as_ref()
    }

    /// Distance from the center of a hexagon to any of its corners, in pixels
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Width of the grid, in cells
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid, in cells
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn hexagon_width(&self) -> f64 {
        self.hexagon_width
    }

    pub fn hexagon_height(&self) -> f64 {
        self.hexagon_height
    }

    /// Radius of a hexagon's incircle. Any point closer than this to a cell's
    /// center is definitely inside that cell.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Pixel position of the center of the cell at a coordinate
    pub fn center_of(&self, coordinate: CubeCoordinate) -> Point {
        let x = f64::from(coordinate.x());
        let z = f64::from(coordinate.z());
        let w = self.hexagon_width;
        let h = self.hexagon_height;
        match self.orientation {
            HexagonOrientation::PointyTop => {
                Point::new(x * w + z * w / 2.0 + w / 2.0, z * h + self.radius)
            }
            HexagonOrientation::FlatTop => {
                Point::new(x * w + self.radius, z * h + x * h / 2.0 + h / 2.0)
            }
        }
    }

    /// Pixel positions of the 6 corners of the cell at a coordinate, clockwise
    /// (in screen space, where y grows downward)
    pub fn corners_of(&self, coordinate: CubeCoordinate) -> [Point; 6] {
        let center = self.center_of(coordinate);
        let offset = self.orientation.coordinate_offset();
        let mut corners = [Point::default(); 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = 2.0 * PI / 6.0 * (i as f64 + offset);
            *corner = Point::new(
                center.x + self.radius * angle.cos(),
                center.y + self.radius * angle.sin(),
            );
        }
        corners
    }
}

/// A grid of hexagonal cells. The set of cells is decided by the layout when
/// the grid is built, and never changes after that. Each cell can have one
/// value of `T` attached to it.
///
/// Build a grid with [HexagonalGridBuilder](crate::HexagonalGridBuilder).
#[derive(Clone, Debug)]
pub struct HexagonalGrid<T> {
    grid_data: GridData,
    storage: HexagonDataStorage<T>,
}

impl<T> HexagonalGrid<T> {
    /// Generate every cell for the grid, according to its layout. Cells start
    /// out with no data.
    pub(crate) fn new(grid_data: GridData) -> Self {
        let coordinates = timed!(
            format!("Generating {} layout", grid_data.layout().name()),
            grid_data.layout().generate_coordinates(
                grid_data.width(),
                grid_data.height(),
                grid_data.orientation(),
            )
        );
        let mut storage = HexagonDataStorage::with_capacity(coordinates.len());
        storage.extend(coordinates);
        debug!(
            "Built {}x{} {} grid with {} cells",
            grid_data.width(),
            grid_data.height(),
            grid_data.layout().name(),
            storage.len()
        );

        Self { grid_data, storage }
    }

    pub fn grid_data(&self) -> &GridData {
        &self.grid_data
    }

    /// Direct access to the cell data. Prefer the hexagon views unless you
    /// need the raw storage.
    pub fn storage(&self) -> &HexagonDataStorage<T> {
        &self.storage
    }

    /// Mutable access to the cell data. The storage can't be used to add
    /// cells to the grid, since [HexagonDataStorage::add_coordinate] isn't
    /// reachable through this, only data can be changed.
    pub fn storage_mut(&mut self) -> GridStorageMut<'_, T> {
        GridStorageMut(&mut self.storage)
    }

    /// Build a calculator for spatial queries over this grid
    pub fn calculator(&self) -> HexagonalGridCalculator<'_, T> {
        HexagonalGridCalculator::new(self)
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Build a view for any coordinate, even one that isn't on the grid
    pub(crate) fn hexagon(&self, coordinate: CubeCoordinate) -> Hexagon<'_, T> {
        Hexagon::new(&self.grid_data, coordinate, &self.storage)
    }

    /// Every cell in the grid, in layout order. Each call starts over from the
    /// first cell.
    pub fn hexagons(&self) -> impl Iterator<Item = Hexagon<'_, T>> + '_ {
        self.storage
            .coordinates()
            .map(move |coordinate| self.hexagon(coordinate))
    }

    /// Writable views of every cell in the grid, in layout order
    pub fn hexagons_mut(
        &mut self,
    ) -> impl Iterator<Item = HexagonMut<'_, T>> + '_ {
        let grid_data = &self.grid_data;
        self.storage.slots_mut().map(move |(coordinate, slot)| {
            HexagonMut::new(grid_data, coordinate, slot)
        })
    }

    pub fn contains_coordinate(&self, coordinate: CubeCoordinate) -> bool {
        self.storage.contains_coordinate(coordinate)
    }

    /// Get the cell at a cube coordinate. Fails if the coordinate isn't part
    /// of the grid.
    pub fn get_by_cube_coordinate(
        &self,
        coordinate: CubeCoordinate,
    ) -> Result<Hexagon<'_, T>, HexGridError> {
        if self.contains_coordinate(coordinate) {
            Ok(self.hexagon(coordinate))
        } else {
            Err(HexGridError::CoordinateNotFound(coordinate))
        }
    }

    /// Get a writable view of the cell at a cube coordinate. Fails if the
    /// coordinate isn't part of the grid.
    pub fn get_mut_by_cube_coordinate(
        &mut self,
        coordinate: CubeCoordinate,
    ) -> Result<HexagonMut<'_, T>, HexGridError> {
        let slot = self
            .storage
            .slot_mut(coordinate)
            .ok_or(HexGridError::CoordinateNotFound(coordinate))?;
        Ok(HexagonMut::new(&self.grid_data, coordinate, slot))
    }

    /// Get the cell at an offset (column/row) coordinate. Fails if the
    /// coordinate isn't part of the grid.
    pub fn get_by_offset_coordinate(
        &self,
        col: i32,
        row: i32,
    ) -> Result<Hexagon<'_, T>, HexGridError> {
        self.get_by_cube_coordinate(CubeCoordinate::from_offset(
            OffsetCoordinate::new(col, row),
            self.grid_data.orientation(),
        ))
    }

    /// Get the cell that contains a pixel position. The winner is picked from
    /// a rough estimate and its six neighbors, and if that winner isn't part
    /// of the grid (whether it's the estimate or one of the neighbors), this
    /// fails with [HexGridError::CoordinateNotFound]. Points far off the grid,
    /// including infinite and NaN positions, always fail.
    pub fn get_by_pixel_coordinate(
        &self,
        x: f64,
        y: f64,
    ) -> Result<Hexagon<'_, T>, HexGridError> {
        // Make a rough guess from the offset grid. The guess may be off by one
        // cell (or entirely off the grid), which gets fixed up below
        let estimate = CubeCoordinate::from_offset(
            OffsetCoordinate::new(
                offset_index(x, self.grid_data.hexagon_width()),
                offset_index(y, self.grid_data.hexagon_height()),
            ),
            self.grid_data.orientation(),
        );
        let nearest = self.nearest_coordinate_to(estimate, Point::new(x, y));
        self.get_by_cube_coordinate(nearest)
    }

    /// Find which of `estimate` and its six neighbors is closest to a point.
    /// Any candidate whose incircle contains the point wins immediately.
    fn nearest_coordinate_to(
        &self,
        estimate: CubeCoordinate,
        point: Point,
    ) -> CubeCoordinate {
        let mut nearest = estimate;
        let mut nearest_distance = f64::MAX;
        for candidate in iter::once(estimate).chain(estimate.neighbors()) {
            let distance = point.distance_to(self.grid_data.center_of(candidate));
            if distance < self.grid_data.inner_radius() {
                return candidate;
            }
            if distance < nearest_distance {
                nearest = candidate;
                nearest_distance = distance;
            }
        }
        nearest
    }

    /// Every cell whose cube `x` is in `[from.x, to.x]` and cube `z` is in
    /// `[from.z, to.z]` (both inclusive). Coordinates in that range that
    /// aren't on the grid are skipped. Each call starts the scan over.
    pub fn get_hexagons_by_cube_range(
        &self,
        from: CubeCoordinate,
        to: CubeCoordinate,
    ) -> impl Iterator<Item = Hexagon<'_, T>> + '_ {
        (from.z()..=to.z())
            .flat_map(move |z| {
                (from.x()..=to.x()).map(move |x| CubeCoordinate::new(x, z))
            })
            .filter(move |coordinate| self.contains_coordinate(*coordinate))
            .map(move |coordinate| self.hexagon(coordinate))
    }

    /// Every cell whose offset column is in `[col_from, col_to]` and offset
    /// row is in `[row_from, row_to]` (both inclusive). Coordinates in that
    /// range that aren't on the grid are skipped.
    pub fn get_hexagons_by_offset_range(
        &self,
        col_from: i32,
        col_to: i32,
        row_from: i32,
        row_to: i32,
    ) -> impl Iterator<Item = Hexagon<'_, T>> + '_ {
        let orientation = self.grid_data.orientation();
        (col_from..=col_to)
            .flat_map(move |col| {
                (row_from..=row_to).map(move |row| {
                    CubeCoordinate::from_offset(
                        OffsetCoordinate::new(col, row),
                        orientation,
                    )
                })
            })
            .filter(move |coordinate| self.contains_coordinate(*coordinate))
            .map(move |coordinate| self.hexagon(coordinate))
    }

    /// Get the coordinate next to `coordinate` at a neighbor index (`0..6`, see
    /// [HexDirection] for the order). The neighbor may not be on the grid.
    pub fn get_neighbor_coordinate_by_index(
        &self,
        coordinate: CubeCoordinate,
        index: usize,
    ) -> Result<CubeCoordinate, HexGridError> {
        let direction = HexDirection::from_index(index)
            .ok_or(HexGridError::InvalidNeighborIndex(index))?;
        Ok(coordinate.neighbor(direction))
    }

    /// Get the cell next to a hexagon at a neighbor index. Fails if the index
    /// is invalid or the neighbor isn't on the grid.
    pub fn get_neighbor_by_index(
        &self,
        hexagon: &Hexagon<'_, T>,
        index: usize,
    ) -> Result<Hexagon<'_, T>, HexGridError> {
        let coordinate =
            self.get_neighbor_coordinate_by_index(hexagon.coordinate(), index)?;
        self.get_by_cube_coordinate(coordinate)
    }

    /// Get the cell next to a hexagon in a direction. Fails if the neighbor
    /// isn't on the grid.
    pub fn get_neighbor(
        &self,
        hexagon: &Hexagon<'_, T>,
        direction: HexDirection,
    ) -> Result<Hexagon<'_, T>, HexGridError> {
        self.get_by_cube_coordinate(hexagon.coordinate().neighbor(direction))
    }

    /// All neighbors of a hexagon that are on the grid, in direction order.
    /// Cells on the edge of the grid have fewer than 6.
    pub fn get_neighbors_of(&self, hexagon: &Hexagon<'_, T>) -> Vec<Hexagon<'_, T>> {
        hexagon
            .coordinate()
            .neighbors()
            .filter(|coordinate| self.contains_coordinate(*coordinate))
            .map(|coordinate| self.hexagon(coordinate))
            .collect()
    }

    /// The smallest pixel rectangle that contains every cell of the grid, as
    /// `(top_left, bottom_right)`
    pub fn pixel_bounds(&self) -> (Point, Point) {
        let mut min = Point::new(f64::MAX, f64::MAX);
        let mut max = Point::new(f64::MIN, f64::MIN);
        for hexagon in self.hexagons() {
            for point in hexagon.points().iter() {
                min.x = min.x.min(point.x);
                min.y = min.y.min(point.y);
                max.x = max.x.max(point.x);
                max.y = max.y.max(point.y);
            }
        }
        (min, max)
    }
}

/// Convert a pixel position along one axis into an offset column/row. The
/// result is clamped well inside `i32`, so that converting it to cube space
/// and stepping to its neighbors can't overflow. NaN maps to the lower bound.
fn offset_index(position: f64, cell_size: f64) -> i32 {
    const LIMIT: f64 = (i32::MAX / 4) as f64;
    (position / cell_size).floor().max(-LIMIT).min(LIMIT) as i32
}

/// Mutable handle to a grid's cell data. This exposes everything on
/// [HexagonDataStorage] except adding new coordinates, since the set of cells
/// in a grid is fixed.
#[derive(Debug)]
pub struct GridStorageMut<'a, T>(&'a mut HexagonDataStorage<T>);

impl<'a, T> GridStorageMut<'a, T> {
    /// Attach data to a cell, overwriting any existing data. Fails if the
    /// coordinate isn't part of the grid.
    pub fn set_data(
        &mut self,
        coordinate: CubeCoordinate,
        data: T,
    ) -> Result<(), HexGridError> {
        if self.0.contains_coordinate(coordinate) {
            self.0.add_coordinate_with_data(coordinate, data);
            Ok(())
        } else {
            Err(HexGridError::CoordinateNotFound(coordinate))
        }
    }

    pub fn get_mut(
        &mut self,
        coordinate: CubeCoordinate,
    ) -> Result<&mut T, HexGridError> {
        self.0.get_mut(coordinate)
    }

    /// Remove the data from a cell. Returns `true` if there was any.
    pub fn clear_data(&mut self, coordinate: CubeCoordinate) -> bool {
        self.0.clear_data(coordinate)
    }
}

impl<'a, T> std::ops::Deref for GridStorageMut<'a, T> {
    type Target = HexagonDataStorage<T>;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
