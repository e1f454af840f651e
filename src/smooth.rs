//! Pruning a point set down to its hull, and smoothing its boundary.

use glam::{I64Vec2, IVec2};

use crate::{HullError, HullSession, Point, PointId};

/// Weights of the smoothing kernel over the offsets `-2..=2`. They sum to 9.
pub const SMOOTHING_WEIGHTS: [i32; 5] = [1, 2, 3, 2, 1];

/// What a [`HullSession::prune`] call removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PruneReport {
    /// The removed points, in insertion order.
    pub removed: Vec<Point>,
}

/// What a [`HullSession::smooth`] call changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmoothReport {
    /// The ids of the original points, all of which were removed.
    pub removed: Vec<PointId>,
    /// The smoothed points that were added, in order.
    pub added: Vec<Point>,
    /// Smoothed points that landed on a cell claimed by an earlier smoothed
    /// point and were skipped.
    pub collisions: Vec<HullError>,
}

/// Replaces every position by the weighted average of itself and its two
/// neighbors on each side, wrapping around the ends of the sequence.
///
/// Averages are rounded to the nearest cell. Each average lies between the
/// smallest and largest input coordinates, so it always fits an `i32`.
pub fn smoothed_positions(positions: &[IVec2]) -> Vec<IVec2> {
    let n = positions.len();
    let total: i64 = SMOOTHING_WEIGHTS.iter().map(|&weight| i64::from(weight)).sum();

    (0..n)
        .map(|i| {
            // Summed in i64: nine times a large coordinate overflows i32.
            let weighted = SMOOTHING_WEIGHTS
                .iter()
                .enumerate()
                .map(|(k, &weight)| {
                    positions[(i + 2 * n + k - 2) % n].as_i64vec2() * i64::from(weight)
                })
                .fold(I64Vec2::ZERO, |acc, p| acc + p);
            // (2 * sum + total) / (2 * total) rounds the mean half up.
            (weighted * 2 + I64Vec2::splat(total))
                .div_euclid(I64Vec2::splat(2 * total))
                .as_ivec2()
        })
        .collect()
}

impl HullSession {
    /// Removes every active point that is not a vertex of the current hull.
    ///
    /// Running it twice in a row removes nothing the second time.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::DegenerateInput`] if there are no active points.
    pub fn prune(&mut self) -> Result<PruneReport, HullError> {
        if self.store.is_empty() {
            return Err(HullError::DegenerateInput);
        }

        let hull = self.compute_hull().clone();
        let doomed: Vec<PointId> = self.store.ids().filter(|&id| !hull.contains(id)).collect();

        let mut report = PruneReport::default();
        for id in doomed {
            report.removed.push(self.remove(id)?);
        }

        log::debug!(
            "pruned {} points, {} hull vertices remain",
            report.removed.len(),
            self.store.len()
        );
        Ok(report)
    }

    /// Replaces the point set by a smoothed copy of itself.
    ///
    /// Points are smoothed along their insertion order with
    /// [`smoothed_positions`]. All original points are removed first, then the
    /// smoothed points are added in order. When two smoothed points round to
    /// the same cell the first one wins and the later one is reported in
    /// [`SmoothReport::collisions`], so the point count never grows.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::DegenerateInput`] if there are no active points.
    pub fn smooth(&mut self) -> Result<SmoothReport, HullError> {
        if self.store.is_empty() {
            return Err(HullError::DegenerateInput);
        }

        let originals: Vec<Point> = self.store.enumerate().copied().collect();
        let positions: Vec<IVec2> = originals.iter().map(|p| p.position).collect();
        let smoothed = smoothed_positions(&positions);
        if let Some(off_grid) = smoothed.iter().find(|&&p| !self.config().contains(p)) {
            return Err(self.out_of_bounds(off_grid.x, off_grid.y));
        }

        let mut report = SmoothReport::default();
        for point in &originals {
            self.remove(point.id)?;
            report.removed.push(point.id);
        }

        for position in smoothed {
            match self.add(position.x, position.y) {
                Ok(id) => report.added.push(Point { id, position }),
                Err(err @ HullError::DuplicateCoordinate { .. }) => report.collisions.push(err),
                Err(err) => return Err(err),
            }
        }

        if !report.collisions.is_empty() {
            log::debug!(
                "smoothing merged {} points onto occupied cells",
                report.collisions.len()
            );
        }
        Ok(report)
    }
}
