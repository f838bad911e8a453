use crate::{
    grid::{
        hex::HexagonOrientation,
        layout::{GridLayout, GridLayoutStrategy},
        GridData, HexagonalGrid,
    },
    HexGridError,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{marker::PhantomData, sync::Arc};
use validator::{Validate, ValidationError, ValidationErrors};

/// Configuration that defines the shape of a grid. Two grids built from the
/// same config will always have the same set of cells.
///
/// Any field left out during deserialization takes its default value, so
/// `{}` is a valid config.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells across the grid. The exact meaning depends on the
    /// layout, see [GridLayout]. At most [MAX_GRID_SIZE].
    ///
    /// [MAX_GRID_SIZE]: crate::grid::layout::MAX_GRID_SIZE
    #[validate(range(min = 1, max = 10000))]
    pub width: u32,

    /// Number of cells down the grid. The exact meaning depends on the
    /// layout, see [GridLayout]. At most [MAX_GRID_SIZE].
    ///
    /// [MAX_GRID_SIZE]: crate::grid::layout::MAX_GRID_SIZE
    #[validate(range(min = 1, max = 10000))]
    pub height: u32,

    /// Distance from the center of a hexagon to any of its corners, in
    /// pixels. Must be positive.
    pub radius: f64,

    pub orientation: HexagonOrientation,

    pub layout: GridLayout,
}

impl GridConfig {
    /// Check every field of the config. Unlike [Validate::validate], this
    /// also checks the radius, which can't be expressed as a field validation.
    /// All field errors are collected before failing.
    pub fn validate_all(&self) -> Result<(), HexGridError> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        // Written this way so NaN gets rejected too
        if !(self.radius > 0.0) {
            let mut error = ValidationError::new("range");
            error.add_param("value".into(), &self.radius);
            errors.add("radius", error);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(HexGridError::InvalidConfig(errors))
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            radius: 10.0,
            orientation: HexagonOrientation::default(),
            layout: GridLayout::default(),
        }
    }
}

/// Builder for [HexagonalGrid]. Every setting has a default (see
/// [GridConfig]'s default), so the minimum is:
///
/// ```
/// use hexgrid::{HexagonalGrid, HexagonalGridBuilder};
///
/// let grid: HexagonalGrid<()> = HexagonalGridBuilder::new().build().unwrap();
/// assert_eq!(grid.len(), 95);
/// ```
///
/// `T` is the type of data that can be attached to each cell.
#[derive(Clone, Debug)]
pub struct HexagonalGridBuilder<T> {
    config: GridConfig,
    /// Overrides `config.layout` when set
    layout_strategy: Option<Arc<dyn GridLayoutStrategy>>,
    phantom: PhantomData<T>,
}

impl<T> HexagonalGridBuilder<T> {
    pub fn new() -> Self {
        Self::from_config(GridConfig::default())
    }

    /// Start with every setting from a config
    pub fn from_config(config: GridConfig) -> Self {
        Self {
            config,
            layout_strategy: None,
            phantom: PhantomData,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.config.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.config.height = height;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    pub fn orientation(mut self, orientation: HexagonOrientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    /// Use one of the built-in layouts. Replaces any custom strategy set with
    /// [Self::layout_strategy].
    pub fn layout(mut self, layout: GridLayout) -> Self {
        self.config.layout = layout;
        self.layout_strategy = None;
        self
    }

    /// Use a custom layout strategy, instead of one of the built-in layouts
    pub fn layout_strategy(
        mut self,
        strategy: impl GridLayoutStrategy + 'static,
    ) -> Self {
        self.layout_strategy = Some(Arc::new(strategy));
        self
    }

    /// The config this builder will build from. If a custom layout strategy
    /// is set, the `layout` field of the config is ignored.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Validate the settings and compute the grid metadata, without
    /// generating any cells
    pub fn grid_data(&self) -> Result<GridData, HexGridError> {
        self.config.validate_all()?;

        let layout = match &self.layout_strategy {
            Some(strategy) => Arc::clone(strategy),
            None => self.config.layout.strategy(),
        };
        if !layout.validate(self.config.width, self.config.height) {
            return Err(HexGridError::InvalidLayout {
                layout: layout.name().to_owned(),
                width: self.config.width,
                height: self.config.height,
            });
        }

        Ok(GridData::new(
            self.config.orientation,
            layout,
            self.config.radius,
            self.config.width,
            self.config.height,
        ))
    }

    /// Validate the settings and build the grid. Every cell starts with no
    /// data attached.
    pub fn build(&self) -> Result<HexagonalGrid<T>, HexGridError> {
        debug!("Building grid with config {:?}", self.config);
        let grid_data = self.grid_data()?;
        Ok(HexagonalGrid::new(grid_data))
    }
}

impl<T> Default for HexagonalGridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
