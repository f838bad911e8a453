//! Hexagon views. A hexagon is never stored anywhere, it's just a cube
//! coordinate paired with a reference to the grid it's being viewed through.
//! Views are created on every lookup and are cheap to throw away.

use crate::{
    grid::{hex::OffsetCoordinate, storage::HexagonDataStorage, GridData},
    CubeCoordinate, HexGridError,
};
use derive_more::{Add, Display, Sub};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// A point in pixel space. See the [crate::grid::hex] module docs for a
/// description of the pixel coordinate system.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: Self) -> f64 {
        let a: nalgebra::Point2<f64> = self.into();
        let b: nalgebra::Point2<f64> = other.into();
        nalgebra::distance(&a, &b)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(point: Point) -> Self {
        nalgebra::Point2::new(point.x, point.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

/// A read-only view of one cell of a grid. The view may also be *virtual*,
/// meaning its coordinate isn't actually part of the grid (e.g. an
/// interpolated point on a line that leaves the grid). Geometry works the same
/// for virtual hexagons, but they never have data. Check
/// [Self::is_on_grid] if it matters.
pub struct Hexagon<'a, T> {
    grid_data: &'a GridData,
    coordinate: CubeCoordinate,
    storage: &'a HexagonDataStorage<T>,
}

impl<'a, T> Hexagon<'a, T> {
    pub(crate) fn new(
        grid_data: &'a GridData,
        coordinate: CubeCoordinate,
        storage: &'a HexagonDataStorage<T>,
    ) -> Self {
        Self {
            grid_data,
            coordinate,
            storage,
        }
    }

    pub fn coordinate(&self) -> CubeCoordinate {
        self.coordinate
    }

    pub fn grid_x(&self) -> i32 {
        self.coordinate.x()
    }

    pub fn grid_y(&self) -> i32 {
        self.coordinate.y()
    }

    pub fn grid_z(&self) -> i32 {
        self.coordinate.z()
    }

    /// The opaque display ID of this hexagon's coordinate
    pub fn id(&self) -> String {
        self.coordinate.id()
    }

    pub fn offset_coordinate(&self) -> OffsetCoordinate {
        self.coordinate.to_offset(self.grid_data.orientation())
    }

    /// Center of the hexagon, in pixel space
    pub fn center(&self) -> Point {
        self.grid_data.center_of(self.coordinate)
    }

    /// The 6 corners of the hexagon, in pixel space
    pub fn points(&self) -> [Point; 6] {
        self.grid_data.corners_of(self.coordinate)
    }

    /// Is this hexagon's coordinate actually part of the grid?
    pub fn is_on_grid(&self) -> bool {
        self.storage.contains_coordinate(self.coordinate)
    }

    pub fn has_data(&self) -> bool {
        self.storage.has_data(self.coordinate)
    }

    /// Get the data attached to this hexagon. Fails if the hexagon is virtual
    /// or has no data.
    pub fn data(&self) -> Result<&'a T, HexGridError> {
        self.storage.get(self.coordinate)
    }
}

// Manual impls so that T doesn't need to be Clone/Copy
impl<'a, T> Clone for Hexagon<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Hexagon<'a, T> {}

/// Two views are equal if they point to the same coordinate
impl<'a, T> PartialEq for Hexagon<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl<'a, T> Eq for Hexagon<'a, T> {}

impl<'a, T> std::hash::Hash for Hexagon<'a, T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

impl<'a, T: Debug> Debug for Hexagon<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hexagon")
            .field("coordinate", &self.coordinate)
            .field("data", &self.data().ok())
            .finish()
    }
}

/// A writable view of one cell of a grid. Unlike [Hexagon], this can only be
/// created for coordinates that are part of the grid.
pub struct HexagonMut<'a, T> {
    grid_data: &'a GridData,
    coordinate: CubeCoordinate,
    slot: &'a mut Option<T>,
}

impl<'a, T> HexagonMut<'a, T> {
    pub(crate) fn new(
        grid_data: &'a GridData,
        coordinate: CubeCoordinate,
        slot: &'a mut Option<T>,
    ) -> Self {
        Self {
            grid_data,
            coordinate,
            slot,
        }
    }

    pub fn coordinate(&self) -> CubeCoordinate {
        self.coordinate
    }

    pub fn center(&self) -> Point {
        self.grid_data.center_of(self.coordinate)
    }

    pub fn points(&self) -> [Point; 6] {
        self.grid_data.corners_of(self.coordinate)
    }

    pub fn has_data(&self) -> bool {
        self.slot.is_some()
    }

    pub fn data(&self) -> Result<&T, HexGridError> {
        self.slot
            .as_ref()
            .ok_or(HexGridError::NoData(self.coordinate))
    }

    pub fn data_mut(&mut self) -> Result<&mut T, HexGridError> {
        self.slot
            .as_mut()
            .ok_or(HexGridError::NoData(self.coordinate))
    }

    /// Attach data to this hexagon, replacing whatever was there. Returns the
    /// old data, if any.
    pub fn set_data(&mut self, data: T) -> Option<T> {
        self.slot.replace(data)
    }

    /// Remove the data from this hexagon. Returns `true` if there was any.
    pub fn clear_data(&mut self) -> bool {
        self.slot.take().is_some()
    }
}

impl<'a, T: Debug> Debug for HexagonMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexagonMut")
            .field("coordinate", &self.coordinate)
            .field("data", &self.slot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HexagonOrientation;
    use assert_approx_eq::assert_approx_eq;

    fn storage_with(
        coordinate: CubeCoordinate,
        data: Option<u32>,
    ) -> HexagonDataStorage<u32> {
        let mut storage = HexagonDataStorage::new();
        match data {
            Some(data) => {
                storage.add_coordinate_with_data(coordinate, data);
            }
            None => storage.add_coordinate(coordinate),
        }
        storage
    }

    #[test]
    fn test_point_distance() {
        let origin = Point::new(0.0, 0.0);
        assert_approx_eq!(origin.distance_to(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(
            Point::new(1.0, 2.0) + Point::new(0.5, 0.5),
            Point::new(1.5, 2.5)
        );
    }

    #[test]
    fn test_geometry_pointy() {
        let grid_data = GridData::new(
            HexagonOrientation::PointyTop,
            crate::GridLayout::Rectangular.strategy(),
            10.0,
            3,
            3,
        );
        let storage = storage_with(CubeCoordinate::ORIGIN, None);
        let hexagon = Hexagon::new(&grid_data, CubeCoordinate::ORIGIN, &storage);

        let center = hexagon.center();
        assert_approx_eq!(center.x, 3f64.sqrt() * 5.0);
        assert_approx_eq!(center.y, 10.0);

        // Every corner is exactly one radius from the center
        let points = hexagon.points();
        for point in points.iter() {
            assert_approx_eq!(point.distance_to(center), 10.0);
        }
        // Pointy top: corner 4 (at 270°) is straight up, corner 1 straight down
        assert_approx_eq!(points[4].x, center.x);
        assert_approx_eq!(points[4].y, 0.0);
        assert_approx_eq!(points[1].y, 20.0);
    }

    #[test]
    fn test_geometry_flat() {
        let grid_data = GridData::new(
            HexagonOrientation::FlatTop,
            crate::GridLayout::Rectangular.strategy(),
            10.0,
            3,
            3,
        );
        let coordinate = CubeCoordinate::new(1, 0);
        let storage = storage_with(coordinate, None);
        let hexagon = Hexagon::new(&grid_data, coordinate, &storage);

        let center = hexagon.center();
        assert_approx_eq!(center.x, 25.0);
        assert_approx_eq!(center.y, 3f64.sqrt() * 10.0);
        // Flat top: corner 0 points straight right
        assert_approx_eq!(hexagon.points()[0].x, 35.0);
        assert_approx_eq!(hexagon.points()[0].y, center.y);
    }

    #[test]
    fn test_data_access() {
        let grid_data = GridData::new(
            HexagonOrientation::PointyTop,
            crate::GridLayout::Rectangular.strategy(),
            1.0,
            1,
            1,
        );
        let coordinate = CubeCoordinate::ORIGIN;
        let storage = storage_with(coordinate, Some(7));
        let hexagon = Hexagon::new(&grid_data, coordinate, &storage);
        assert!(hexagon.is_on_grid());
        assert!(hexagon.has_data());
        assert_eq!(hexagon.data().unwrap(), &7);
        assert_eq!(hexagon.id(), "0,0");

        let virtual_hexagon =
            Hexagon::new(&grid_data, CubeCoordinate::new(5, 5), &storage);
        assert!(!virtual_hexagon.is_on_grid());
        assert!(matches!(
            virtual_hexagon.data(),
            Err(HexGridError::CoordinateNotFound(_))
        ));

        let mut slot = None;
        let mut hexagon_mut = HexagonMut::new(&grid_data, coordinate, &mut slot);
        assert!(matches!(hexagon_mut.data(), Err(HexGridError::NoData(_))));
        assert_eq!(hexagon_mut.set_data(3), None);
        *hexagon_mut.data_mut().unwrap() += 1;
        assert_eq!(hexagon_mut.set_data(10), Some(4));
        assert!(hexagon_mut.clear_data());
        assert!(!hexagon_mut.has_data());
    }
}
