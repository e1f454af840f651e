use glam::{ivec2, IVec2};

use crate::{
    AnchorTracker, ClusterSummary, GridConfig, Hull, HullError, Point, PointId, PointStore,
    PruneReport, RelationCache, ScanStep, SmoothReport,
};

/// Outcome of [`HullSession::on_point_toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    /// The cell was empty and now holds a new point.
    Added(PointId),
    /// The cell held this point, which was removed.
    Removed(PointId),
}

/// Slope and angle between the anchor and another point, for inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRelation {
    /// The non-anchor point.
    pub id: PointId,
    /// The cell the point occupies.
    pub position: IVec2,
    /// Slope of the anchor-point line, `None` if vertical.
    pub slope: Option<f64>,
    /// Polar angle of the anchor-point line.
    pub angle_deg: f64,
    /// Distance from the anchor.
    pub distance: f64,
}

/// A read-only view of a [`HullSession`] for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// The active points in insertion order.
    pub points: Vec<Point>,
    /// The anchor, if any point is active.
    pub anchor: Option<PointId>,
    /// The greatest polar angle seen from the anchor.
    pub greatest_angle: f64,
    /// The hull vertices in counterclockwise order, starting at the anchor.
    pub hull: Vec<PointId>,
    /// The steps of the scan that produced `hull`.
    pub trace: Vec<ScanStep>,
    /// The relations between the anchor and every other point.
    pub anchor_relations: Vec<AnchorRelation>,
    /// The cluster summary, if any point is active.
    pub cluster: Option<ClusterSummary>,
}

/// The mutable point set with its derived geometry.
///
/// The store, relation cache and anchor tracker are always updated together,
/// so they never disagree. The hull is rebuilt lazily after every change.
///
/// # Example
///
/// ```
/// use polar_hull::HullSession;
///
/// let mut session = HullSession::default();
/// for (x, y) in [(1, 1), (2, 1), (3, 1), (2, 5)] {
///     session.add(x, y).unwrap();
/// }
///
/// let hull: Vec<_> = session
///     .compute_hull()
///     .points_ref()
///     .iter()
///     .map(|p| (p.position.x, p.position.y))
///     .collect();
///
/// // The middle of the collinear base is not a vertex.
/// assert_eq!(hull, vec![(1, 1), (3, 1), (2, 5)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HullSession {
    config: GridConfig,
    pub(crate) store: PointStore,
    cache: RelationCache,
    tracker: AnchorTracker,
    hull: Option<Hull>,
}

impl HullSession {
    /// Creates an empty session on the given grid.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Returns the grid configuration.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the active points.
    #[inline]
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    /// Returns the pair relation cache.
    #[inline]
    pub fn relations(&self) -> &RelationCache {
        &self.cache
    }

    /// Returns the current anchor.
    #[inline]
    pub fn anchor(&self) -> Option<PointId> {
        self.tracker.anchor()
    }

    /// Returns the greatest polar angle seen from the anchor.
    #[inline]
    pub fn greatest_angle(&self) -> f64 {
        self.tracker.greatest_angle()
    }

    /// Adds a point at `(x, y)` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::OutOfBounds`] if the cell is not on the grid and
    /// [`HullError::DuplicateCoordinate`] if it is occupied.
    pub fn add(&mut self, x: i32, y: i32) -> Result<PointId, HullError> {
        let position = ivec2(x, y);
        if !self.config.contains(position) {
            return Err(self.out_of_bounds(x, y));
        }

        let point = self.store.add(position)?;
        self.cache.on_point_added(&point, &self.store);
        self.tracker.on_point_added(&point, &self.store, &self.cache);
        self.hull = None;
        Ok(point.id)
    }

    pub(crate) fn out_of_bounds(&self, x: i32, y: i32) -> HullError {
        HullError::OutOfBounds {
            x,
            y,
            width: self.config.width(),
            height: self.config.height(),
        }
    }

    /// Removes the point with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::UnknownPoint`] if `id` is not active.
    pub fn remove(&mut self, id: PointId) -> Result<Point, HullError> {
        let point = self.store.remove(id)?;
        self.tracker.on_point_removed(id, &self.store, &self.cache);
        self.cache.on_point_removed(id, &self.store);
        self.hull = None;
        Ok(point)
    }

    /// Adds a point at `(x, y)`, or removes the point already there.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::OutOfBounds`] if the cell is not on the grid.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<Toggled, HullError> {
        match self.store.find(ivec2(x, y)) {
            Some(id) => self.remove(id).map(|_| Toggled::Removed(id)),
            None => self.add(x, y).map(Toggled::Added),
        }
    }

    /// Handles a click on `(x, y)`: toggles the cell and returns a snapshot
    /// with the rebuilt hull.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::OutOfBounds`] if the cell is not on the grid.
    pub fn on_point_toggle(&mut self, x: i32, y: i32) -> Result<(Toggled, Snapshot), HullError> {
        let toggled = self.toggle(x, y)?;
        Ok((toggled, self.snapshot()))
    }

    /// Returns the hull of the active points, rebuilding it if the point set
    /// changed since the last call.
    pub fn compute_hull(&mut self) -> &Hull {
        self.hull
            .get_or_insert_with(|| Hull::compute(&self.store, &self.cache, &self.tracker))
    }

    /// Handles a hull request: rebuilds the hull if needed and returns a
    /// snapshot of the session.
    pub fn on_compute_hull(&mut self) -> Snapshot {
        self.snapshot()
    }

    /// Handles a prune request: prunes, then returns the report together with
    /// a snapshot of the pruned session.
    ///
    /// # Errors
    ///
    /// See [`HullSession::prune`].
    pub fn on_prune(&mut self) -> Result<(PruneReport, Snapshot), HullError> {
        let report = self.prune()?;
        Ok((report, self.snapshot()))
    }

    /// Handles a smooth request: smooths, then returns the report together
    /// with a snapshot of the smoothed session.
    ///
    /// # Errors
    ///
    /// See [`HullSession::smooth`].
    pub fn on_smooth(&mut self) -> Result<(SmoothReport, Snapshot), HullError> {
        let report = self.smooth()?;
        Ok((report, self.snapshot()))
    }

    /// Returns the last hull built, unless the point set changed since.
    #[inline]
    pub fn hull(&self) -> Option<&Hull> {
        self.hull.as_ref()
    }

    /// Returns the relations between the anchor and every other point, in
    /// insertion order.
    pub fn anchor_relations(&self) -> Vec<AnchorRelation> {
        let Some(anchor) = self.tracker.anchor() else {
            return Vec::new();
        };

        self.cache
            .relations_incident_to(anchor, &self.store)
            .filter_map(|relation| {
                let other = self.store.get(relation.other(anchor))?;
                Some(AnchorRelation {
                    id: other.id,
                    position: other.position,
                    slope: relation.slope,
                    angle_deg: relation.angle_deg,
                    distance: relation.distance,
                })
            })
            .collect()
    }

    /// Summarizes where the active points gather.
    pub fn cluster(&self) -> Option<ClusterSummary> {
        let points: Vec<Point> = self.store.enumerate().copied().collect();
        ClusterSummary::from_points(&points)
    }

    /// Captures the current state, rebuilding the hull if needed.
    pub fn snapshot(&mut self) -> Snapshot {
        let hull = self.compute_hull();
        let trace = hull.trace().to_vec();
        let hull: Vec<PointId> = hull.ids().collect();

        Snapshot {
            points: self.store.enumerate().copied().collect(),
            anchor: self.tracker.anchor(),
            greatest_angle: self.tracker.greatest_angle(),
            hull,
            trace,
            anchor_relations: self.anchor_relations(),
            cluster: self.cluster(),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn positions(session: &HullSession, ids: &[PointId]) -> Vec<(i32, i32)> {
        ids.iter()
            .map(|&id| {
                let p = session.store().get(id).unwrap().position;
                (p.x, p.y)
            })
            .collect()
    }

    #[test]
    fn rejects_cells_off_the_grid() {
        let mut session = HullSession::new(GridConfig::square(5).unwrap());
        assert_eq!(
            session.add(6, 1),
            Err(HullError::OutOfBounds {
                x: 6,
                y: 1,
                width: 5,
                height: 5
            })
        );
        assert_eq!(session.toggle(0, 3).unwrap_err(), HullError::OutOfBounds {
            x: 0,
            y: 3,
            width: 5,
            height: 5
        });
        assert!(session.store().is_empty());
        assert_eq!(session.config().area(), 25);
    }

    #[test]
    fn duplicate_and_unknown_are_noops() {
        let mut session = HullSession::default();
        let a = session.add(2, 2).unwrap();
        session.add(4, 3).unwrap();
        session.compute_hull();

        assert_eq!(
            session.add(2, 2),
            Err(HullError::DuplicateCoordinate { x: 2, y: 2 })
        );
        assert!(session.hull().is_some(), "failed add keeps the hull");

        session.remove(a).unwrap();
        assert_eq!(session.remove(a), Err(HullError::UnknownPoint(a)));
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.relations().len(), 0);
    }

    #[test]
    fn toggle_returns_rebuilt_hull() {
        let mut session = HullSession::default();
        for (x, y) in [(1, 1), (5, 1), (5, 5)] {
            session.on_point_toggle(x, y).unwrap();
        }

        let (toggled, snapshot) = session.on_point_toggle(1, 5).unwrap();
        let Toggled::Added(id) = toggled else {
            panic!("expected an added point, got {toggled:?}");
        };
        assert_eq!(snapshot.hull.len(), 4);
        assert_eq!(snapshot.hull[3], id);
        assert_eq!(
            positions(&session, &snapshot.hull),
            vec![(1, 1), (5, 1), (5, 5), (1, 5)]
        );

        let (toggled, snapshot) = session.on_point_toggle(5, 5).unwrap();
        assert!(matches!(toggled, Toggled::Removed(_)));
        assert_eq!(
            positions(&session, &snapshot.hull),
            vec![(1, 1), (5, 1), (1, 5)]
        );
    }

    #[test]
    fn snapshot_exposes_anchor_relations() {
        let mut session = HullSession::default();
        session.add(3, 3).unwrap();
        let anchor = session.add(1, 1).unwrap();
        session.add(1, 4).unwrap();
        session.add(4, 1).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.anchor, Some(anchor));
        assert_eq!(snapshot.greatest_angle, 180.0);
        assert_eq!(snapshot.points.len(), 4);
        assert!(!snapshot.trace.is_empty());

        let angles: Vec<_> = snapshot
            .anchor_relations
            .iter()
            .map(|r| ((r.position.x, r.position.y), r.slope, r.angle_deg))
            .collect();
        assert_eq!(
            angles,
            vec![
                ((3, 3), Some(1.0), 135.0),
                ((1, 4), None, 90.0),
                ((4, 1), Some(0.0), 180.0),
            ]
        );

        let cluster = snapshot.cluster.unwrap();
        assert_eq!(cluster.center, ivec2(2, 2));
    }

    #[test]
    fn removing_anchor_from_three_points() {
        let mut session = HullSession::default();
        let a = session.add(2, 1).unwrap();
        session.add(5, 3).unwrap();
        session.add(1, 4).unwrap();
        assert_eq!(session.anchor(), Some(a));

        session.remove(a).unwrap();
        let expected = AnchorTracker::from_scratch(session.store(), session.relations());
        assert_eq!(session.anchor(), expected.anchor());
        assert_eq!(session.greatest_angle(), expected.greatest_angle());
        assert_eq!(positions(&session, &[session.anchor().unwrap()]), vec![(5, 3)]);
    }

    #[test]
    fn prune_then_smooth_cycle() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut session = HullSession::new(GridConfig::square(8).unwrap());
        while session.store().len() < 25 {
            let _ = session.add(rng.random_range(1..=8), rng.random_range(1..=8));
        }

        for _ in 0..4 {
            session.prune().unwrap();
            assert!(session.prune().unwrap().removed.is_empty());
            let before = session.store().len();
            session.smooth().unwrap();
            assert!(session.store().len() <= before);

            let expected = AnchorTracker::from_scratch(session.store(), session.relations());
            assert_eq!(session.anchor(), expected.anchor());
            let n = session.store().len();
            assert_eq!(session.relations().len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn request_handlers_return_snapshots() {
        let mut session = HullSession::default();
        for (x, y) in [(1, 1), (5, 1), (3, 2), (5, 5), (1, 5)] {
            session.add(x, y).unwrap();
        }

        let snapshot = session.on_compute_hull();
        assert_eq!(snapshot.points.len(), 5);
        assert_eq!(snapshot.hull.len(), 4);

        let (report, snapshot) = session.on_prune().unwrap();
        assert_eq!(report.removed.len(), 1);
        assert_eq!(report.removed[0].position, ivec2(3, 2));
        assert_eq!(snapshot.points.len(), 4);
        assert_eq!(snapshot.hull.len(), 4);

        let (report, snapshot) = session.on_smooth().unwrap();
        assert_eq!(report.added.len(), 1);
        assert_eq!(snapshot.points.len(), 1);
        assert_eq!(snapshot.hull, vec![report.added[0].id]);

        let mut empty = HullSession::default();
        assert_eq!(empty.on_prune().unwrap_err(), HullError::DegenerateInput);
        assert_eq!(empty.on_smooth().unwrap_err(), HullError::DegenerateInput);
    }
}
