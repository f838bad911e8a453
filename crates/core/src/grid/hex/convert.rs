//! Conversions between offset (column/row) coordinates and cube coordinates.
//!
//! Pointy-top grids use "odd-r" offsets (odd rows are shoved right), flat-top
//! grids use "odd-q" offsets (odd columns are shoved down). See
//! https://www.redblobgames.com/grids/hexagons/#conversions-offset
//!
//! All of these are exact integer math. Halving uses floored division, so
//! converting offset -> cube -> offset is lossless for every input, including
//! negative rows/columns.

use crate::grid::hex::{CubeCoordinate, HexagonOrientation};

/// Get the cube `x` component for an offset coordinate
pub fn offset_to_cube_x(
    col: i32,
    row: i32,
    orientation: HexagonOrientation,
) -> i32 {
    match orientation {
        HexagonOrientation::PointyTop => col - row.div_euclid(2),
        HexagonOrientation::FlatTop => col,
    }
}

/// Get the cube `z` component for an offset coordinate
pub fn offset_to_cube_z(
    col: i32,
    row: i32,
    orientation: HexagonOrientation,
) -> i32 {
    match orientation {
        HexagonOrientation::PointyTop => row,
        HexagonOrientation::FlatTop => row - col.div_euclid(2),
    }
}

/// Convert an offset coordinate to a cube coordinate
pub fn offset_to_cube(
    col: i32,
    row: i32,
    orientation: HexagonOrientation,
) -> CubeCoordinate {
    CubeCoordinate::new(
        offset_to_cube_x(col, row, orientation),
        offset_to_cube_z(col, row, orientation),
    )
}

/// Get the offset column for a cube coordinate
pub fn cube_to_offset_column(
    coordinate: CubeCoordinate,
    orientation: HexagonOrientation,
) -> i32 {
    match orientation {
        HexagonOrientation::PointyTop => {
            coordinate.x() + coordinate.z().div_euclid(2)
        }
        HexagonOrientation::FlatTop => coordinate.x(),
    }
}

/// Get the offset row for a cube coordinate
pub fn cube_to_offset_row(
    coordinate: CubeCoordinate,
    orientation: HexagonOrientation,
) -> i32 {
    match orientation {
        HexagonOrientation::PointyTop => coordinate.z(),
        HexagonOrientation::FlatTop => {
            coordinate.z() + coordinate.x().div_euclid(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::hex::OffsetCoordinate;
    use strum::IntoEnumIterator;

    #[test]
    fn test_offset_to_cube_pointy() {
        let orientation = HexagonOrientation::PointyTop;
        assert_eq!(offset_to_cube(0, 0, orientation), CubeCoordinate::new(0, 0));
        assert_eq!(offset_to_cube(1, 0, orientation), CubeCoordinate::new(1, 0));
        assert_eq!(offset_to_cube(0, 1, orientation), CubeCoordinate::new(0, 1));
        assert_eq!(
            offset_to_cube(0, 2, orientation),
            CubeCoordinate::new(-1, 2)
        );
        assert_eq!(
            offset_to_cube(2, 5, orientation),
            CubeCoordinate::new(0, 5)
        );
    }

    #[test]
    fn test_offset_to_cube_flat() {
        let orientation = HexagonOrientation::FlatTop;
        assert_eq!(offset_to_cube(0, 0, orientation), CubeCoordinate::new(0, 0));
        assert_eq!(offset_to_cube(1, 0, orientation), CubeCoordinate::new(1, 0));
        assert_eq!(
            offset_to_cube(2, 0, orientation),
            CubeCoordinate::new(2, -1)
        );
        assert_eq!(
            offset_to_cube(5, 2, orientation),
            CubeCoordinate::new(5, 0)
        );
    }

    #[test]
    fn test_round_trip() {
        for orientation in HexagonOrientation::iter() {
            for col in -7..=7 {
                for row in -7..=7 {
                    let offset = OffsetCoordinate::new(col, row);
                    let cube = CubeCoordinate::from_offset(offset, orientation);
                    // Invariant holds for every converted coordinate
                    assert_eq!(cube.x() + cube.y() + cube.z(), 0);
                    assert_eq!(
                        cube.to_offset(orientation),
                        offset,
                        "round trip failed for {offset} ({orientation})"
                    );
                }
            }
        }
    }
}
