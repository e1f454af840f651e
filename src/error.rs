use thiserror::Error;

use crate::PointId;

/// An error returned by a [`HullSession`](crate::HullSession) operation or by
/// [`GridConfig::new`](crate::GridConfig::new).
///
/// Every error leaves the session unchanged; the failed operation is a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// The grid cell is already occupied by an active point.
    #[error("cell ({x}, {y}) is already occupied")]
    DuplicateCoordinate {
        /// The `x` coordinate of the occupied cell.
        x: i32,
        /// The `y` coordinate of the occupied cell.
        y: i32,
    },
    /// The id does not refer to an active point.
    #[error("point {0:?} is not active")]
    UnknownPoint(PointId),
    /// The operation needs at least one active point.
    #[error("operation requires at least one active point")]
    DegenerateInput,
    /// The coordinates fall outside the configured grid.
    #[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// The requested `x` coordinate.
        x: i32,
        /// The requested `y` coordinate.
        y: i32,
        /// The grid width.
        width: i32,
        /// The grid height.
        height: i32,
    },
    /// The grid dimensions are not both positive.
    #[error("a {width}x{height} grid has no cells")]
    InvalidGrid {
        /// The requested width.
        width: i32,
        /// The requested height.
        height: i32,
    },
}
