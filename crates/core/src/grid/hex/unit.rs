//! This sub-module contains basic types for units that form the hex coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use anyhow::anyhow;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    ops::{Add, Mul, Neg, Sub},
};
use strum::{EnumIter, EnumString};

/// A point in the hex coordinate system that refers to a whole cell (via its
/// center point). Each coordinate has three components (`x`, `y`, and `z`), and
/// **for every coordinate, `x + y + z = 0`.**
///
/// ## Implementation
///
/// Because of that invariant, this struct only needs to store `x` and `z` and
/// derives `y` as needed. Two coordinates are equal iff their `x` and `z` are
/// equal, which makes this type usable as the sole identity key for a cell.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct CubeCoordinate {
    x: i32,
    z: i32,
}

impl CubeCoordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new coordinate with the given x and z. Since x+y+z=0 for all
    /// coordinates, we can derive y from x & z.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Construct a new coordinate with the given x and y. Since x+y+z=0 for all
    /// coordinates, we can derive z from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self::new(x, -x - y)
    }

    /// Construct a new coordinate from all three components. Returns an error
    /// if the components don't fall on the plane `x + y + z = 0`.
    pub fn new_xyz(x: i32, y: i32, z: i32) -> anyhow::Result<Self> {
        if x + y + z != 0 {
            Err(anyhow!(
                "Invalid cube coordinate ({}, {}, {}); must be on the plane \
                x+y+z=0",
                x,
                y,
                z
            ))
        } else {
            Ok(Self::new(x, z))
        }
    }

    /// Convert an offset (column/row) coordinate into cube space, under the
    /// given orientation
    pub fn from_offset(
        offset: OffsetCoordinate,
        orientation: HexagonOrientation,
    ) -> Self {
        super::convert::offset_to_cube(offset.col, offset.row, orientation)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        -(self.x + self.z)
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    /// An opaque identifier for this coordinate, useful for debugging and
    /// display. Two coordinates have the same ID iff they are equal.
    pub fn id(&self) -> String {
        format!("{},{}", self.x, self.z)
    }

    /// Convert this coordinate into offset (column/row) space, under the given
    /// orientation. This is the exact inverse of [Self::from_offset].
    pub fn to_offset(self, orientation: HexagonOrientation) -> OffsetCoordinate {
        OffsetCoordinate::new(
            super::convert::cube_to_offset_column(self, orientation),
            super::convert::cube_to_offset_row(self, orientation),
        )
    }

    /// Get the coordinate of the cell adjacent to this one in the given
    /// direction. The result may or may not be part of any particular grid.
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.to_vector()
    }

    /// Get an iterator of all the coordinates directly adjacent to this one,
    /// in canonical direction order. The iterator always yields exactly 6
    /// values.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        HexDirection::ALL.iter().map(move |dir| self.neighbor(*dir))
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the coordinates are
    /// equal, 1 if the cells are adjacent, 2 if there is 1 cell between them,
    /// etc. Saturates at `u32::MAX` for coordinates at opposite ends of the
    /// `i32` range.
    pub fn distance_to(self, other: Self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dx = i64::from(self.x) - i64::from(other.x);
        let dz = i64::from(self.z) - i64::from(other.z);
        let dy = -(dx + dz);
        // Two adjacent cell centers are always separated by two cube edges
        let distance = (dx.abs() + dy.abs() + dz.abs()) / 2;
        u32::try_from(distance).unwrap_or(u32::MAX)
    }

    /// Rotate this coordinate 60° around `center`, in the given direction
    pub fn rotate_around(
        self,
        center: Self,
        direction: RotationDirection,
    ) -> Self {
        center + direction.rotate(self - center)
    }

    /// All coordinates at exactly `radius` steps from this one, walking the
    /// perimeter in canonical direction order. For `radius = 0` this is just
    /// the coordinate itself, otherwise it is exactly `6 * radius`
    /// coordinates. If part of the ring falls outside the `i32` coordinate
    /// space, the ring is empty.
    pub fn ring(self, radius: u32) -> Vec<Self> {
        if radius == 0 {
            return vec![self];
        }

        let radius = match self.checked_reach(radius) {
            Some(radius) => radius,
            None => return Vec::new(),
        };
        let mut ring = Vec::with_capacity(6 * radius as usize);
        // Start at the corner of the ring opposite the first walking direction
        let mut current = self + HexDirection::SW.to_vector() * radius;
        for direction in HexDirection::ALL.iter() {
            for _ in 0..radius {
                ring.push(current);
                current = current.neighbor(*direction);
            }
        }
        ring
    }

    /// All coordinates within `distance` steps (inclusive) of this one. The
    /// result is scanned from the bounding cube around this coordinate, so it
    /// doesn't depend on any grid. Like [Self::ring], this is empty if the
    /// range doesn't fit in the `i32` coordinate space.
    pub fn range(self, distance: u32) -> Vec<Self> {
        // https://www.redblobgames.com/grids/hexagons/#range
        let d = match self.checked_reach(distance) {
            Some(d) => d,
            None => return Vec::new(),
        };
        let mut range = Vec::new();
        for dx in -d..=d {
            let dy_min = if dx < 0 { -dx - d } else { -d };
            let dy_max = if dx > 0 { d - dx } else { d };
            for dy in dy_min..=dy_max {
                range.push(self + CubeVector::new_xy(dx, dy));
            }
        }
        range
    }

    /// Convert a step count into an `i32`, as long as every coordinate within
    /// that many steps of this one is representable
    fn checked_reach(self, steps: u32) -> Option<i32> {
        let steps = i32::try_from(steps).ok()?;
        let reach = i64::from(steps);
        let fits = |component: i64| {
            component - reach >= i64::from(i32::MIN)
                && component + reach <= i64::from(i32::MAX)
        };
        let (x, z) = (i64::from(self.x), i64::from(self.z));
        if fits(x) && fits(z) && fits(-(x + z)) {
            Some(steps)
        } else {
            None
        }
    }

    /// Position of this coordinate along the ring walk around `center` (see
    /// [Self::ring]), where the ring's radius is the distance between the two.
    /// `center.ring(r)[i].ring_position(center) == i` for every ring.
    pub(crate) fn ring_position(self, center: Self) -> u64 {
        let x = i64::from(self.x) - i64::from(center.x);
        let z = i64::from(self.z) - i64::from(center.z);
        let y = -(x + z);
        let radius = x.abs().max(y.abs()).max(z.abs());

        // Each side of the ring is `radius` long, walked in direction order
        let (side, step) = if z == radius && x < 0 {
            (0, x + radius)
        } else if y == -radius && x < radius {
            (1, x)
        } else if x == radius && z > -radius {
            (2, -z)
        } else if z == -radius && x > 0 {
            (3, radius - x)
        } else if y == radius && x > -radius {
            (4, -x)
        } else {
            (5, z)
        };
        (side * radius + step) as u64
    }

    /// Trace the straight line from this coordinate to `other`. The line
    /// always starts with `self`, ends with `other`, and holds exactly
    /// `distance + 1` coordinates.
    pub fn line_to(self, other: Self) -> Vec<Self> {
        // https://www.redblobgames.com/grids/hexagons/#line-drawing
        let distance = self.distance_to(other);
        if distance == 0 {
            return vec![self];
        }

        (0..=distance)
            .map(|step| {
                let t = f64::from(step) / f64::from(distance);
                Self::round(
                    lerp(self.x(), other.x(), t),
                    lerp(self.y(), other.y(), t),
                    lerp(self.z(), other.z(), t),
                )
            })
            .collect()
    }

    /// Round a fractional cube position to the nearest valid coordinate. Each
    /// component is rounded on its own, then the component with the largest
    /// rounding error is recalculated from the other two, so that the result
    /// is back on the plane `x + y + z = 0`.
    fn round(x: f64, y: f64, z: f64) -> Self {
        let mut rx = x.round();
        let ry = y.round();
        let mut rz = z.round();

        let diff_x = (rx - x).abs();
        let diff_y = (ry - y).abs();
        let diff_z = (rz - z).abs();

        if diff_x > diff_y && diff_x > diff_z {
            rx = -ry - rz;
        } else if diff_y <= diff_z {
            rz = -rx - ry;
        }
        // Otherwise y is the odd one out, and it's derived anyway

        Self::new(rx as i32, rz as i32)
    }
}

fn lerp(from: i32, to: i32, t: f64) -> f64 {
    f64::from(from) + (f64::from(to) - f64::from(from)) * t
}

impl TryFrom<(i32, i32, i32)> for CubeCoordinate {
    type Error = anyhow::Error;

    fn try_from((x, y, z): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new_xyz(x, y, z)
    }
}

impl Add<CubeVector> for CubeCoordinate {
    type Output = Self;

    fn add(self, rhs: CubeVector) -> Self::Output {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for CubeCoordinate {
    type Output = CubeVector;

    fn sub(self, rhs: Self) -> Self::Output {
        CubeVector::new(self.x - rhs.x, self.z - rhs.z)
    }
}

/// A vector in cube space, i.e. the difference between two
/// [CubeCoordinate]s. Like coordinates, vectors only store `x` and `z`, and
/// `x + y + z = 0` always holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display(fmt = "<{}, {}, {}>", "self.x()", "self.y()", "self.z()")]
pub struct CubeVector {
    x: i32,
    z: i32,
}

impl CubeVector {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self::new(x, -x - y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        -(self.x + self.z)
    }

    pub fn z(&self) -> i32 {
        self.z
    }
}

impl Mul<i32> for CubeVector {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.x * rhs, self.z * rhs)
    }
}

impl Neg for CubeVector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.z)
    }
}

/// A coordinate in 2D offset (column/row) space. Offset coordinates are what
/// rectangular-looking layouts are defined in. Whether odd rows or odd columns
/// are shoved over depends on the [HexagonOrientation].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", col, row)]
pub struct OffsetCoordinate {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoordinate {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Which way the hexagons point. This changes both the pixel geometry of each
/// hexagon and how offset coordinates map onto cube coordinates.
///
/// See https://www.redblobgames.com/grids/hexagons/#basics
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
pub enum HexagonOrientation {
    /// A vertex points straight up. Rows of hexagons are horizontal, and odd
    /// rows are shoved right by half a hexagon.
    PointyTop,
    /// A side faces straight up. Columns of hexagons are vertical, and odd
    /// columns are shoved down by half a hexagon.
    FlatTop,
}

impl HexagonOrientation {
    /// The angular offset of the first corner, in sixths of a full turn. Corner
    /// `i` sits at `60° * (i + offset)` from the center.
    pub fn coordinate_offset(self) -> f64 {
        match self {
            Self::PointyTop => 0.5,
            Self::FlatTop => 0.0,
        }
    }
}

impl Default for HexagonOrientation {
    fn default() -> Self {
        Self::PointyTop
    }
}

/// The 6 directions in which hexagons can line up side-to-side, i.e. the
/// direction from a cell's center to a neighbor's center. Variants are in
/// canonical order, which is also the order of neighbor indexes 0 through 5.
///
/// Names describe the direction for [HexagonOrientation::PointyTop] grids,
/// where `z` grows downwards on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum HexDirection {
    /// East, `(+1, 0)` on `(x, z)`
    E,
    /// Northeast, `(+1, -1)` on `(x, z)`
    NE,
    /// Northwest, `(0, -1)` on `(x, z)`
    NW,
    /// West, `(-1, 0)` on `(x, z)`
    W,
    /// Southwest, `(-1, +1)` on `(x, z)`
    SW,
    /// Southeast, `(0, +1)` on `(x, z)`
    SE,
}

impl HexDirection {
    /// Every direction, in canonical (neighbor index) order
    pub const ALL: [Self; 6] =
        [Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    /// Get the direction for a neighbor index. `None` if the index isn't in
    /// `0..6`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The neighbor index of this direction
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::ALL.len()]
    }

    /// Get a vector that would move a coordinate one cell in this direction
    pub fn to_vector(self) -> CubeVector {
        match self {
            Self::E => CubeVector::new(1, 0),
            Self::NE => CubeVector::new(1, -1),
            Self::NW => CubeVector::new(0, -1),
            Self::W => CubeVector::new(-1, 0),
            Self::SW => CubeVector::new(-1, 1),
            Self::SE => CubeVector::new(0, 1),
        }
    }
}

/// Direction of a 60° rotation in cube space
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
pub enum RotationDirection {
    Right,
    Left,
}

impl RotationDirection {
    /// Rotate a vector 60° around the origin. A 60° rotation in cube space is
    /// a rotation of the components plus a negation.
    pub fn rotate(self, vector: CubeVector) -> CubeVector {
        match self {
            // (x, y, z) => (-z, -x, -y)
            Self::Right => CubeVector::new(-vector.z(), -vector.y()),
            // (x, y, z) => (-y, -z, -x)
            Self::Left => CubeVector::new(-vector.y(), -vector.x()),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}
