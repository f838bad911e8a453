use crate::{
    grid::hex::{CubeCoordinate, CubeCoordinateIndexMap},
    HexGridError,
};

/// Sparse per-cell data for a grid, keyed by cube coordinate. Each coordinate
/// is in one of three states:
///
/// - Absent: the coordinate isn't part of the grid
/// - Present with no data: the coordinate is a cell, but nothing has been
///   attached to it yet
/// - Present with data
///
/// Coordinates are iterated in the order they were registered. Once a
/// coordinate is registered it's never removed, only its data can change.
#[derive(Clone, Debug)]
pub struct HexagonDataStorage<T> {
    storage: CubeCoordinateIndexMap<Option<T>>,
}

impl<T> HexagonDataStorage<T> {
    pub fn new() -> Self {
        Self {
            storage: CubeCoordinateIndexMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: CubeCoordinateIndexMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            ),
        }
    }

    /// Register a coordinate with no data. If the coordinate is already
    /// registered, this does nothing (any attached data is kept).
    pub fn add_coordinate(&mut self, coordinate: CubeCoordinate) {
        self.storage.entry(coordinate).or_insert(None);
    }

    /// Register a coordinate and attach data to it, overwriting any data it
    /// already had. Returns `true` if the coordinate was already registered.
    pub fn add_coordinate_with_data(
        &mut self,
        coordinate: CubeCoordinate,
        data: T,
    ) -> bool {
        self.storage.insert(coordinate, Some(data)).is_some()
    }

    /// Get the data attached to a coordinate. Fails if the coordinate isn't
    /// registered, or if it has no data.
    pub fn get(&self, coordinate: CubeCoordinate) -> Result<&T, HexGridError> {
        match self.storage.get(&coordinate) {
            Some(Some(data)) => Ok(data),
            Some(None) => Err(HexGridError::NoData(coordinate)),
            None => Err(HexGridError::CoordinateNotFound(coordinate)),
        }
    }

    /// Mutable version of [Self::get]
    pub fn get_mut(
        &mut self,
        coordinate: CubeCoordinate,
    ) -> Result<&mut T, HexGridError> {
        match self.storage.get_mut(&coordinate) {
            Some(Some(data)) => Ok(data),
            Some(None) => Err(HexGridError::NoData(coordinate)),
            None => Err(HexGridError::CoordinateNotFound(coordinate)),
        }
    }

    /// Is the coordinate part of the grid? This is true regardless of whether
    /// any data is attached.
    pub fn contains_coordinate(&self, coordinate: CubeCoordinate) -> bool {
        self.storage.contains_key(&coordinate)
    }

    /// Is the coordinate part of the grid AND has data attached?
    pub fn has_data(&self, coordinate: CubeCoordinate) -> bool {
        matches!(self.storage.get(&coordinate), Some(Some(_)))
    }

    /// Remove the data attached to a coordinate, leaving the coordinate itself
    /// registered. Returns `true` if there was data to remove. Clearing an
    /// unregistered coordinate does nothing.
    pub fn clear_data(&mut self, coordinate: CubeCoordinate) -> bool {
        match self.storage.get_mut(&coordinate) {
            Some(slot) => slot.take().is_some(),
            None => false,
        }
    }

    /// All registered coordinates, in registration order
    pub fn coordinates(&self) -> impl Iterator<Item = CubeCoordinate> + '_ {
        self.storage.keys().copied()
    }

    /// Every registered coordinate and its data (if any), in registration
    /// order
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (CubeCoordinate, Option<&T>)> + '_ {
        self.storage
            .iter()
            .map(|(coordinate, data)| (*coordinate, data.as_ref()))
    }

    /// Mutable access to the data slot of a registered coordinate. Used to
    /// build writable hexagon views.
    pub(crate) fn slot_mut(
        &mut self,
        coordinate: CubeCoordinate,
    ) -> Option<&mut Option<T>> {
        self.storage.get_mut(&coordinate)
    }

    /// Mutable access to every data slot, in registration order
    pub(crate) fn slots_mut(
        &mut self,
    ) -> impl Iterator<Item = (CubeCoordinate, &mut Option<T>)> + '_ {
        self.storage
            .iter_mut()
            .map(|(coordinate, data)| (*coordinate, data))
    }

    /// Number of registered coordinates
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<T> Default for HexagonDataStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<CubeCoordinate> for HexagonDataStorage<T> {
    fn extend<I: IntoIterator<Item = CubeCoordinate>>(&mut self, iter: I) {
        for coordinate in iter {
            self.add_coordinate(coordinate);
        }
    }
}
