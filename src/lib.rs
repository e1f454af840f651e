//! # Polar Hull
//!
//! Convex hulls of a mutable set of points on an integer grid, computed with a
//! Graham scan around the lowest point.
//!
//! Points are added and removed one at a time through a [`HullSession`]. Every
//! change keeps a cache of pairwise relations (slope, distance and polar angle)
//! and the anchor of the scan up to date, so rebuilding the hull only needs a
//! sort and a single stack pass. Collinear points are resolved explicitly:
//! points in the middle of a hull edge are never hull vertices.
//!
//! On top of the hull, a session can [prune](HullSession::prune) every point
//! that is not a hull vertex and [smooth](HullSession::smooth) the point set
//! with a 5-tap moving average along insertion order.
//!
//! ## References
//!
//! - R. L. Graham. 1972. An Efficient Algorithm for Determining the Convex Hull
//!   of a Finite Planar Set. Information Processing Letters 1, 132–133.

#![warn(missing_docs)]

pub mod angle;
mod anchor;
mod cluster;
mod config;
mod error;
mod fixed_hasher;
mod hull;
mod point;
pub mod polar;
mod relation;
mod session;
mod smooth;

pub use anchor::AnchorTracker;
pub use cluster::ClusterSummary;
pub use config::GridConfig;
pub use error::HullError;
pub use hull::{Hull, ScanStep};
pub use point::{Point, PointId, PointStore};
pub use relation::{PairKey, PairRelation, RelationCache};
pub use session::{AnchorRelation, HullSession, Snapshot, Toggled};
pub use smooth::{smoothed_positions, PruneReport, SmoothReport, SMOOTHING_WEIGHTS};
