use std::cmp::Ordering;

use glam::IVec2;

use crate::{Point, PointId, PointStore, RelationCache};

/// Compares two cells first by `y`, then by `x`.
#[inline]
pub fn lowest_cmp(a: IVec2, b: IVec2) -> Ordering {
    a.y.cmp(&b.y).then(a.x.cmp(&b.x))
}

/// Tracks the anchor, the lowest point by `(y, x)`, and the greatest polar
/// angle among the relations incident to it.
///
/// The greatest angle is only meaningful for the current anchor. Whenever the
/// anchor changes it is recomputed from scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorTracker {
    anchor: Option<PointId>,
    greatest_angle: f64,
}

impl AnchorTracker {
    /// Creates a tracker with no anchor.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the anchor and greatest angle of `store` with a full scan.
    pub fn from_scratch(store: &PointStore, cache: &RelationCache) -> Self {
        let mut tracker = Self {
            anchor: Self::scan_lowest(store),
            greatest_angle: 0.0,
        };
        tracker.recompute_greatest_angle(store, cache);
        tracker
    }

    /// Returns the current anchor.
    #[inline]
    pub fn anchor(&self) -> Option<PointId> {
        self.anchor
    }

    /// Returns the greatest polar angle among the relations incident to the
    /// anchor, or `0.0` if the anchor has none.
    #[inline]
    pub fn greatest_angle(&self) -> f64 {
        self.greatest_angle
    }

    /// Updates the tracker after `point` was added to `store` and `cache`.
    pub fn on_point_added(&mut self, point: &Point, store: &PointStore, cache: &RelationCache) {
        let current = self.anchor.and_then(|id| store.get(id));
        let Some(current) = current else {
            self.anchor = Some(point.id);
            self.recompute_greatest_angle(store, cache);
            return;
        };

        if lowest_cmp(point.position, current.position) == Ordering::Less {
            log::trace!("anchor moved from {:?} to {:?}", current.id, point.id);
            self.anchor = Some(point.id);
            self.recompute_greatest_angle(store, cache);
        } else if let Some(relation) = cache.get(current.id, point.id) {
            self.greatest_angle = self.greatest_angle.max(relation.angle_deg);
        }
    }

    /// Updates the tracker after `removed` left `store`.
    ///
    /// Must run before `cache` purges the relations of `removed`.
    pub fn on_point_removed(&mut self, removed: PointId, store: &PointStore, cache: &RelationCache) {
        let Some(anchor) = self.anchor else {
            return;
        };

        if anchor == removed {
            self.anchor = Self::scan_lowest(store);
            log::trace!("anchor {:?} removed, new anchor {:?}", removed, self.anchor);
            self.recompute_greatest_angle(store, cache);
        } else if cache
            .get(anchor, removed)
            .is_some_and(|relation| relation.angle_deg >= self.greatest_angle)
        {
            self.recompute_greatest_angle(store, cache);
        }
    }

    /// Rescans the anchor's relations for the greatest angle.
    fn recompute_greatest_angle(&mut self, store: &PointStore, cache: &RelationCache) {
        self.greatest_angle = self.anchor.map_or(0.0, |anchor| {
            cache
                .relations_incident_to(anchor, store)
                .fold(0.0_f64, |greatest, relation| greatest.max(relation.angle_deg))
        });
    }

    fn scan_lowest(store: &PointStore) -> Option<PointId> {
        store
            .enumerate()
            .min_by(|a, b| lowest_cmp(a.position, b.position))
            .map(|point| point.id)
    }
}
