use glam::IVec2;

use crate::{fixed_hasher::FixedHashMap, HullError};

/// Stable handle of a point. Ids are never reused within a [`PointStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u32);

/// An active point on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// The handle of the point.
    pub id: PointId,
    /// The grid cell the point occupies.
    pub position: IVec2,
}

/// The authoritative set of active points.
///
/// Only active points are kept. Ids are handed out in increasing order and
/// points are appended, so `points` stays sorted by id and enumeration order
/// is insertion order.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
    cells: FixedHashMap<IVec2, PointId>,
    next_id: u32,
}

impl PointStore {
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::DuplicateCoordinate`] if the cell is occupied.
    pub fn add(&mut self, position: IVec2) -> Result<Point, HullError> {
        if self.cells.contains_key(&position) {
            return Err(HullError::DuplicateCoordinate {
                x: position.x,
                y: position.y,
            });
        }

        let id = PointId(self.next_id);
        self.next_id += 1;
        let point = Point { id, position };
        self.points.push(point);
        self.cells.insert(position, id);
        Ok(point)
    }

    /// Removes the point with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::UnknownPoint`] if `id` is not active.
    pub fn remove(&mut self, id: PointId) -> Result<Point, HullError> {
        let index = self.slot(id).ok_or(HullError::UnknownPoint(id))?;
        let point = self.points.remove(index);
        self.cells.remove(&point.position);
        Ok(point)
    }

    /// Returns the active point with the given id.
    #[inline]
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.slot(id).map(|index| &self.points[index])
    }

    /// Returns the id of the point occupying `position`, if any.
    #[inline]
    pub fn find(&self, position: IVec2) -> Option<PointId> {
        self.cells.get(&position).copied()
    }

    /// Iterates over the active points in insertion order.
    #[inline]
    pub fn enumerate(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Iterates over the ids of the active points in insertion order.
    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.enumerate().map(|point| point.id)
    }

    /// Returns the number of active points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no active points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn slot(&self, id: PointId) -> Option<usize> {
        self.points.binary_search_by_key(&id, |point| point.id).ok()
    }
}

#[cfg(test)]
mod test {
    use glam::ivec2;

    use super::*;

    #[test]
    fn rejects_occupied_cell() {
        let mut store = PointStore::new();
        store.add(ivec2(2, 3)).unwrap();
        assert_eq!(
            store.add(ivec2(2, 3)),
            Err(HullError::DuplicateCoordinate { x: 2, y: 3 })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn enumerates_in_insertion_order() {
        let mut store = PointStore::new();
        let a = store.add(ivec2(5, 5)).unwrap().id;
        let b = store.add(ivec2(1, 1)).unwrap().id;
        let c = store.add(ivec2(3, 2)).unwrap().id;
        store.remove(b).unwrap();
        let d = store.add(ivec2(1, 1)).unwrap().id;

        assert_ne!(b, d, "ids are never reused");
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![a, c, d]);
        assert_eq!(store.find(ivec2(1, 1)), Some(d));
    }

    #[test]
    fn remove_unknown() {
        let mut store = PointStore::new();
        let a = store.add(ivec2(1, 1)).unwrap().id;
        store.remove(a).unwrap();
        assert_eq!(store.remove(a), Err(HullError::UnknownPoint(a)));
        assert_eq!(store.remove(PointId(42)), Err(HullError::UnknownPoint(PointId(42))));
        assert!(store.is_empty());
    }

    #[test]
    fn holds_only_active_points() {
        let mut store = PointStore::new();
        let keep = store.add(ivec2(1, 1)).unwrap().id;
        for _ in 0..1000 {
            let id = store.add(ivec2(4, 4)).unwrap().id;
            store.remove(id).unwrap();
        }
        let last = store.add(ivec2(2, 2)).unwrap().id;

        assert_eq!(store.points.len(), 2);
        assert_eq!(last, PointId(1001));
        assert_eq!(store.get(keep).map(|p| p.position), Some(ivec2(1, 1)));
        assert_eq!(store.get(PointId(500)), None);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![keep, last]);
    }
}
