//! Ordering of the non-anchor points around the anchor.

use std::cmp::Ordering;

use glam::IVec2;

use crate::{Point, PointId, PointStore, RelationCache};

/// A non-anchor point together with its polar angle seen from the anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarEntry {
    /// The id of the point.
    pub id: PointId,
    /// The cell the point occupies.
    pub position: IVec2,
    /// Angle of the anchor-point line, in `(0, 180]`.
    pub angle_deg: f64,
}

impl PolarEntry {
    /// Returns the entry as a [`Point`].
    #[inline]
    pub fn point(&self) -> Point {
        Point {
            id: self.id,
            position: self.position,
        }
    }
}

/// Orders two entries by polar angle, breaking ties on raw coordinates.
///
/// Equal angles are ordered by `(x, y)` as a stand-in for the distance from the
/// anchor: descending on the ray that carries `greatest_angle`, ascending on
/// every other ray. Once reversed by the hull scan this visits the first ray
/// near to far and the others far to near.
///
/// The coordinate proxy only agrees with the true distance for rays that do
/// not lean left of vertical. On a ray leaning left, larger `x` means *nearer*
/// to the anchor, so the order along that ray flips.
pub fn polar_cmp(p: &PolarEntry, q: &PolarEntry, greatest_angle: f64) -> Ordering {
    p.angle_deg.total_cmp(&q.angle_deg).then_with(|| {
        let coordinates = p
            .position
            .x
            .cmp(&q.position.x)
            .then(p.position.y.cmp(&q.position.y));
        if p.angle_deg == greatest_angle {
            coordinates.reverse()
        } else {
            coordinates
        }
    })
}

/// Returns every non-anchor point of `store` sorted by [`polar_cmp`].
pub fn polar_sort(
    anchor: PointId,
    greatest_angle: f64,
    store: &PointStore,
    cache: &RelationCache,
) -> Vec<PolarEntry> {
    let mut entries: Vec<PolarEntry> = cache
        .relations_incident_to(anchor, store)
        .filter_map(|relation| {
            let point = store.get(relation.other(anchor))?;
            Some(PolarEntry {
                id: point.id,
                position: point.position,
                angle_deg: relation.angle_deg,
            })
        })
        .collect();

    entries.sort_by(|p, q| polar_cmp(p, q, greatest_angle));
    entries
}
