use crate::{
    grid::{
        hex::{CubeCoordinate, RotationDirection},
        hexagon::Hexagon,
        HexagonalGrid,
    },
    HexGridError,
};

/// Spatial queries over a grid. The calculator holds no state of its own, it
/// just borrows the grid it was created from. Get one with
/// [HexagonalGrid::calculator].
///
/// Queries that return a set of cells only return cells that are actually on
/// the grid, with the exception of [Self::draw_line].
#[derive(Debug)]
pub struct HexagonalGridCalculator<'a, T> {
    grid: &'a HexagonalGrid<T>,
}

impl<'a, T> HexagonalGridCalculator<'a, T> {
    pub fn new(grid: &'a HexagonalGrid<T>) -> Self {
        Self { grid }
    }

    /// Number of steps between two hexagons
    pub fn distance(&self, from: &Hexagon<'_, T>, to: &Hexagon<'_, T>) -> u32 {
        from.coordinate().distance_to(to.coordinate())
    }

    /// Every cell at most `distance` steps from `origin`, including `origin`
    /// itself (if it's on the grid). There's no notion of obstacles here, so
    /// this is purely geometric. Any distance is accepted; once the range is
    /// bigger than the grid, every cell is checked instead.
    pub fn movement_range(
        &self,
        origin: &Hexagon<'_, T>,
        distance: u32,
    ) -> Vec<Hexagon<'a, T>> {
        let origin = origin.coordinate();
        if range_size(distance) > self.grid.len() as u64 {
            self.grid
                .hexagons()
                .filter(|hexagon| {
                    origin.distance_to(hexagon.coordinate()) <= distance
                })
                .collect()
        } else {
            self.on_grid(origin.range(distance))
        }
    }

    /// Every cell exactly `radius` steps from `center`, in perimeter order.
    /// A radius of 0 gives just the center. Radii past the edge of the grid
    /// give nothing.
    pub fn ring(
        &self,
        center: &Hexagon<'_, T>,
        radius: u32,
    ) -> Vec<Hexagon<'a, T>> {
        let center = center.coordinate();
        // A full ring is 6r cells. Past the size of the grid, check every cell
        // and put the matches in walk order
        if u64::from(radius) * 6 > self.grid.len() as u64 {
            let mut ring: Vec<_> = self
                .grid
                .hexagons()
                .filter(|hexagon| {
                    center.distance_to(hexagon.coordinate()) == radius
                })
                .collect();
            ring.sort_by_key(|hexagon| {
                hexagon.coordinate().ring_position(center)
            });
            ring
        } else {
            self.on_grid(center.ring(radius))
        }
    }

    /// The straight line of hexagons between two hexagons, in order from
    /// `from` to `to` (both included). The line can pass over coordinates that
    /// aren't on the grid, in which case the returned hexagons are virtual,
    /// see [Hexagon::is_on_grid].
    pub fn draw_line(
        &self,
        from: &Hexagon<'_, T>,
        to: &Hexagon<'_, T>,
    ) -> Vec<Hexagon<'a, T>> {
        from.coordinate()
            .line_to(to.coordinate())
            .into_iter()
            .map(|coordinate| self.grid.hexagon(coordinate))
            .collect()
    }

    /// Rotate `target` 60° around `origin`. Fails if the rotated coordinate
    /// isn't on the grid.
    pub fn rotate(
        &self,
        origin: &Hexagon<'_, T>,
        target: &Hexagon<'_, T>,
        direction: RotationDirection,
    ) -> Result<Hexagon<'a, T>, HexGridError> {
        let rotated = target
            .coordinate()
            .rotate_around(origin.coordinate(), direction);
        self.grid.get_by_cube_coordinate(rotated)
    }

    /// Is there a clear line of sight between two hexagons? The line is only
    /// blocked by gaps in the grid, i.e. a coordinate between the two ends
    /// that isn't part of the grid. The endpoints themselves are never
    /// checked.
    pub fn is_visible(&self, from: &Hexagon<'_, T>, to: &Hexagon<'_, T>) -> bool {
        self.is_visible_by(from, to, |_| false)
    }

    /// Like [Self::is_visible], but the line is also blocked by any cell
    /// between the two ends whose data is opaque, according to `is_opaque`.
    /// Cells with no data are transparent.
    pub fn is_visible_by(
        &self,
        from: &Hexagon<'_, T>,
        to: &Hexagon<'_, T>,
        is_opaque: impl Fn(&T) -> bool,
    ) -> bool {
        let line = self.draw_line(from, to);
        // Lines always include both ends, strip them off
        let interior = line.iter().skip(1).take(line.len().saturating_sub(2));
        for hexagon in interior {
            if !hexagon.is_on_grid() {
                return false;
            }
            if let Ok(data) = hexagon.data() {
                if is_opaque(data) {
                    return false;
                }
            }
        }
        true
    }

    fn on_grid(&self, coordinates: Vec<CubeCoordinate>) -> Vec<Hexagon<'a, T>> {
        coordinates
            .into_iter()
            .filter(|coordinate| self.grid.contains_coordinate(*coordinate))
            .map(|coordinate| self.grid.hexagon(coordinate))
            .collect()
    }
}

/// Number of coordinates within `distance` steps of any one coordinate
fn range_size(distance: u32) -> u64 {
    let distance = u64::from(distance);
    (distance * (distance + 1)).saturating_mul(3).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridLayout, HexagonalGridBuilder};

    /// 5x5 parallelogram, covering x and z in [0, 5)
    fn grid() -> HexagonalGrid<bool> {
        HexagonalGridBuilder::new()
            .width(5)
            .height(5)
            .layout(GridLayout::Trapezoid)
            .build()
            .unwrap()
    }

    fn coords(hexagons: &[Hexagon<'_, bool>]) -> Vec<CubeCoordinate> {
        hexagons.iter().map(|h| h.coordinate()).collect()
    }

    #[test]
    fn test_distance() {
        let grid = grid();
        let calc = grid.calculator();
        let a = grid.get_by_cube_coordinate(CubeCoordinate::new(0, 0)).unwrap();
        let b = grid.get_by_cube_coordinate(CubeCoordinate::new(3, 2)).unwrap();
        let c = grid.get_by_cube_coordinate(CubeCoordinate::new(4, 0)).unwrap();
        assert_eq!(calc.distance(&a, &a), 0);
        assert_eq!(calc.distance(&a, &b), 5);
        assert_eq!(calc.distance(&b, &a), 5);
        assert_eq!(calc.distance(&b, &c), 2);
    }

    #[test]
    fn test_movement_range() {
        let grid = grid();
        let calc = grid.calculator();
        let center = grid.get_by_cube_coordinate(CubeCoordinate::new(2, 2)).unwrap();
        assert_eq!(calc.movement_range(&center, 0), vec![center]);
        assert_eq!(calc.movement_range(&center, 1).len(), 7);
        assert_eq!(calc.movement_range(&center, 2).len(), 19);

        // Clipped at the grid corner
        let corner = grid.get_by_cube_coordinate(CubeCoordinate::ORIGIN).unwrap();
        let range = calc.movement_range(&corner, 1);
        assert_eq!(range.len(), 3);
        for hexagon in range {
            assert!(calc.distance(&corner, &hexagon) <= 1);
        }
    }

    #[test]
    fn test_ring() {
        let grid = grid();
        let calc = grid.calculator();
        let center = grid.get_by_cube_coordinate(CubeCoordinate::new(2, 2)).unwrap();
        assert_eq!(calc.ring(&center, 0), vec![center]);

        let ring = calc.ring(&center, 1);
        // Starts to the southwest, then walks the perimeter
        assert_eq!(
            coords(&ring),
            vec![
                CubeCoordinate::new(1, 3),
                CubeCoordinate::new(2, 3),
                CubeCoordinate::new(3, 2),
                CubeCoordinate::new(3, 1),
                CubeCoordinate::new(2, 1),
                CubeCoordinate::new(1, 2),
            ]
        );
        for hexagon in calc.ring(&center, 2) {
            assert_eq!(calc.distance(&center, &hexagon), 2);
        }

        // Off-grid cells are left out
        let corner = grid.get_by_cube_coordinate(CubeCoordinate::ORIGIN).unwrap();
        assert_eq!(calc.ring(&corner, 1).len(), 2);
    }

    #[test]
    fn test_movement_range_large() {
        let grid = grid();
        let calc = grid.calculator();
        for coordinate in [CubeCoordinate::new(2, 2), CubeCoordinate::ORIGIN] {
            let origin = grid.get_by_cube_coordinate(coordinate).unwrap();
            // Small ranges get scanned, big ones check every cell. Both have
            // to agree on which cells are in range
            for distance in 0..=10 {
                let mut expected: Vec<_> = coordinate
                    .range(distance)
                    .into_iter()
                    .filter(|c| grid.contains_coordinate(*c))
                    .collect();
                let mut actual = coords(&calc.movement_range(&origin, distance));
                expected.sort_by_key(|c| (c.x(), c.z()));
                actual.sort_by_key(|c| (c.x(), c.z()));
                assert_eq!(actual, expected, "distance {}", distance);
            }

            assert_eq!(calc.movement_range(&origin, 100_000).len(), grid.len());
            assert_eq!(calc.movement_range(&origin, u32::MAX).len(), grid.len());
        }
    }

    #[test]
    fn test_ring_large() {
        let grid = grid();
        let calc = grid.calculator();
        for coordinate in [CubeCoordinate::new(2, 2), CubeCoordinate::ORIGIN] {
            let center = grid.get_by_cube_coordinate(coordinate).unwrap();
            // Same perimeter order whether the ring is walked or collected
            // from the whole grid
            for radius in 0..=10 {
                let expected: Vec<_> = coordinate
                    .ring(radius)
                    .into_iter()
                    .filter(|c| grid.contains_coordinate(*c))
                    .collect();
                assert_eq!(
                    coords(&calc.ring(&center, radius)),
                    expected,
                    "radius {}",
                    radius
                );
            }

            assert!(calc.ring(&center, 100_000).is_empty());
            assert!(calc.ring(&center, u32::MAX).is_empty());
        }
    }

    #[test]
    fn test_draw_line() {
        let grid = grid();
        let calc = grid.calculator();
        let from = grid.get_by_cube_coordinate(CubeCoordinate::new(0, 0)).unwrap();
        let to = grid.get_by_cube_coordinate(CubeCoordinate::new(4, 2)).unwrap();
        let line = calc.draw_line(&from, &to);
        assert_eq!(line.len(), calc.distance(&from, &to) as usize + 1);
        assert_eq!(line.first(), Some(&from));
        assert_eq!(line.last(), Some(&to));
        // Every step moves to a neighbor
        for pair in line.windows(2) {
            assert_eq!(calc.distance(&pair[0], &pair[1]), 1);
        }

        assert_eq!(calc.draw_line(&from, &from), vec![from]);
    }

    #[test]
    fn test_draw_line_virtual() {
        // Triangle with x + z < 4. The line between (3, 0) and (0, 3) runs
        // right along the long edge
        let grid: HexagonalGrid<bool> = HexagonalGridBuilder::new()
            .width(4)
            .height(4)
            .layout(GridLayout::Triangular)
            .build()
            .unwrap();
        let calc = grid.calculator();
        let a = grid.get_by_cube_coordinate(CubeCoordinate::new(3, 0)).unwrap();
        let b = grid.get_by_cube_coordinate(CubeCoordinate::new(0, 3)).unwrap();
        let line = calc.draw_line(&a, &b);
        assert_eq!(line.len(), 4);
        assert!(line.iter().all(|hexagon| hexagon.is_on_grid()));
        assert!(calc.is_visible(&a, &b));
    }

    #[test]
    fn test_rotate() {
        let grid = grid();
        let calc = grid.calculator();
        let origin = grid.get_by_cube_coordinate(CubeCoordinate::new(2, 2)).unwrap();
        let target = grid.get_by_cube_coordinate(CubeCoordinate::new(4, 1)).unwrap();
        assert_eq!(
            calc.rotate(&origin, &target, RotationDirection::Right)
                .unwrap()
                .coordinate(),
            CubeCoordinate::new(3, 3)
        );
        assert_eq!(
            calc.rotate(&origin, &target, RotationDirection::Left)
                .unwrap()
                .coordinate(),
            CubeCoordinate::new(3, 0)
        );

        // Rotating a neighbor six times comes back around, staying on the
        // grid the whole way
        let mut current = grid.get_by_cube_coordinate(CubeCoordinate::new(3, 2)).unwrap();
        for _ in 0..6 {
            current = calc
                .rotate(&origin, &current, RotationDirection::Right)
                .unwrap();
        }
        assert_eq!(current.coordinate(), CubeCoordinate::new(3, 2));

        // (4, 0) rotates left around the origin to (4, -4), off the grid
        let corner = grid.get_by_cube_coordinate(CubeCoordinate::ORIGIN).unwrap();
        let far = grid.get_by_cube_coordinate(CubeCoordinate::new(4, 0)).unwrap();
        assert!(matches!(
            calc.rotate(&corner, &far, RotationDirection::Left),
            Err(HexGridError::CoordinateNotFound(_))
        ));
    }

    #[test]
    fn test_is_visible() {
        let mut grid = grid();
        let from = CubeCoordinate::new(0, 2);
        let to = CubeCoordinate::new(4, 2);
        let blocker = CubeCoordinate::new(2, 2);
        grid.storage_mut().set_data(blocker, true).unwrap();

        let calc = grid.calculator();
        let a = grid.get_by_cube_coordinate(from).unwrap();
        let b = grid.get_by_cube_coordinate(to).unwrap();
        assert!(calc.is_visible(&a, &b));
        assert!(!calc.is_visible_by(&a, &b, |opaque| *opaque));
        // A transparent payload doesn't block
        assert!(calc.is_visible_by(&a, &b, |_| false));
        // Adjacent cells can always see each other
        let c = grid.get_by_cube_coordinate(CubeCoordinate::new(1, 2)).unwrap();
        assert!(calc.is_visible_by(&a, &c, |_| true));
    }

    #[test]
    fn test_is_visible_gap() {
        // Rectangular layout is notched at offset (1, 0), which blocks the
        // line along the top row
        let grid: HexagonalGrid<()> = HexagonalGridBuilder::new()
            .width(3)
            .height(3)
            .build()
            .unwrap();
        let calc = grid.calculator();
        let a = grid.get_by_offset_coordinate(0, 0).unwrap();
        let b = grid.get_by_offset_coordinate(2, 0).unwrap();
        let line = calc.draw_line(&a, &b);
        assert_eq!(line.len(), 3);
        assert!(!line[1].is_on_grid());
        assert!(!calc.is_visible(&a, &b));
        assert!(calc.is_visible(&a, &a));
    }
}
