use crate::{
    angle::{angle_from_slope, distance, slope},
    fixed_hasher::FixedHashMap,
    Point, PointId, PointStore,
};

/// An unordered pair of point ids, stored with the smaller id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairKey(PointId, PointId);

impl PairKey {
    /// Creates the key for the pair `{a, b}`.
    #[inline]
    pub fn new(a: PointId, b: PointId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Memoized geometric relation between two active points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairRelation {
    /// The first point of the pair.
    pub a: PointId,
    /// The second point of the pair.
    pub b: PointId,
    /// Slope of the line through both points, rounded to two decimals.
    /// `None` for a vertical pair.
    pub slope: Option<f64>,
    /// Distance between the points, rounded to two decimals.
    pub distance: f64,
    /// Polar angle of the line in `(0, 180]`. See [`crate::angle`].
    pub angle_deg: f64,
}

impl PairRelation {
    /// Computes the relation between `a` and `b`.
    pub fn between(a: &Point, b: &Point) -> Self {
        let slope = slope(a.position, b.position);
        Self {
            a: a.id,
            b: b.id,
            slope,
            distance: distance(a.position, b.position),
            angle_deg: angle_from_slope(slope),
        }
    }

    /// Returns the key of this pair.
    #[inline]
    pub fn key(&self) -> PairKey {
        PairKey::new(self.a, self.b)
    }

    /// Returns `true` if `id` is one of the two points.
    #[inline]
    pub fn has_point(&self, id: PointId) -> bool {
        self.a == id || self.b == id
    }

    /// Returns the member of the pair that is not `id`.
    #[inline]
    pub fn other(&self, id: PointId) -> PointId {
        if self.a == id {
            self.b
        } else {
            self.a
        }
    }
}

/// Cache holding exactly one [`PairRelation`] per unordered pair of active points.
///
/// Relations are never updated in place: a pair is inserted when its second
/// point becomes active and purged when either point is removed.
#[derive(Clone, Debug, Default)]
pub struct RelationCache {
    relations: FixedHashMap<PairKey, PairRelation>,
}

impl RelationCache {
    /// Creates an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the relations between the freshly added `point` and every other
    /// active point of `store`.
    pub fn on_point_added(&mut self, point: &Point, store: &PointStore) {
        for other in store.enumerate().filter(|other| other.id != point.id) {
            let relation = PairRelation::between(point, other);
            self.relations.insert(relation.key(), relation);
        }
    }

    /// Purges every relation incident to the removed point `id`.
    ///
    /// `store` must no longer contain `id`.
    pub fn on_point_removed(&mut self, id: PointId, store: &PointStore) {
        for other in store.ids() {
            self.relations.remove(&PairKey::new(id, other));
        }
    }

    /// Returns the relation between `a` and `b`, if both are active.
    #[inline]
    pub fn get(&self, a: PointId, b: PointId) -> Option<&PairRelation> {
        self.relations.get(&PairKey::new(a, b))
    }

    /// Iterates over the relations incident to `id`, in insertion order of the
    /// other point.
    pub fn relations_incident_to<'a>(
        &'a self,
        id: PointId,
        store: &'a PointStore,
    ) -> impl Iterator<Item = &'a PairRelation> + 'a {
        store
            .ids()
            .filter(move |&other| other != id)
            .filter_map(move |other| self.get(id, other))
    }

    /// Returns the number of cached relations.
    #[inline]
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Returns `true` if no relation is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
