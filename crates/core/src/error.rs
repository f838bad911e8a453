use crate::CubeCoordinate;
use thiserror::Error;
use validator::ValidationErrors;

/// Every way a grid operation can fail.
#[derive(Debug, Error)]
pub enum HexGridError {
    /// One or more config fields are out of range. The keys of the inner
    /// errors are the offending field names.
    #[error("invalid grid config: {0}")]
    InvalidConfig(#[from] ValidationErrors),

    /// The layout strategy rejected the grid dimensions
    #[error("width {width} and height {height} are not valid for the {layout} layout")]
    InvalidLayout {
        layout: String,
        width: u32,
        height: u32,
    },

    /// A lookup targeted a coordinate that isn't part of the grid. This is
    /// expected at grid edges.
    #[error("coordinate {0} is not part of the grid")]
    CoordinateNotFound(CubeCoordinate),

    /// The coordinate is part of the grid, but has no data attached
    #[error("no data is attached to coordinate {0}")]
    NoData(CubeCoordinate),

    #[error("neighbor index {0} is out of range, must be in [0, 5]")]
    InvalidNeighborIndex(usize),
}
