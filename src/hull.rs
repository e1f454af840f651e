use crate::{
    angle::orient2d,
    polar::{polar_sort, PolarEntry},
    AnchorTracker, Point, PointId, PointStore, RelationCache,
};

/// One step of a hull scan, in the order it happened.
///
/// Replaying the steps against an empty stack reproduces every intermediate
/// state of the scan, ending with the hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStep {
    /// The point became the current candidate.
    Visit(PointId),
    /// The point was pushed onto the stack.
    Push(PointId),
    /// The point was popped off the stack.
    Pop(PointId),
}

/// A 2D [convex hull] of the active points, built with a Graham scan around the
/// anchor.
///
/// The points are in counterclockwise order starting at the anchor. Points in
/// the middle of a hull edge are not part of the hull.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    points: Vec<Point>,
    trace: Vec<ScanStep>,
}

impl Hull {
    /// Computes the hull of the points in `store`.
    ///
    /// `cache` and `tracker` must be in sync with `store`. An empty store gives
    /// an empty hull.
    pub fn compute(store: &PointStore, cache: &RelationCache, tracker: &AnchorTracker) -> Self {
        let Some(anchor) = tracker.anchor().and_then(|id| store.get(id)) else {
            return Self::default();
        };
        let sorted = polar_sort(anchor.id, tracker.greatest_angle(), store, cache);
        Self::build(*anchor, &sorted)
    }

    /// Builds the hull from the anchor and the other points sorted by
    /// [`polar_cmp`](crate::polar::polar_cmp).
    ///
    /// With fewer than three points in total no orientation test is made and
    /// the hull is the anchor followed by the remaining point, if any.
    pub fn build(anchor: Point, sorted: &[PolarEntry]) -> Self {
        let mut sequence = Vec::with_capacity(sorted.len() + 1);
        sequence.push(anchor);
        sequence.extend(sorted.iter().rev().map(PolarEntry::point));

        let mut scan = Scan::default();
        if sequence.len() < 3 {
            for point in sequence {
                scan.push(point);
            }
            return scan.finish();
        }

        scan.push(anchor);
        for &candidate in &sequence[1..] {
            scan.trace.push(ScanStep::Visit(candidate.id));
            scan.advance(candidate, false);
        }

        // Closing the polygon at the anchor settles the last edge.
        scan.advance(anchor, true);

        let hull = scan.finish();
        log::debug!(
            "hull of {} points has {} vertices",
            sequence.len(),
            hull.len()
        );
        hull
    }

    /// Returns the hull points in counterclockwise order.
    ///
    /// This consumes the hull. If you want a reference to the points,
    /// consider using [`points_ref`](Self::points_ref) instead.
    #[inline]
    pub fn points(self) -> Vec<Point> {
        self.points
    }

    /// Returns a reference to the hull points in counterclockwise order.
    #[inline]
    pub fn points_ref(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the ids of the hull points.
    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.iter().map(|point| point.id)
    }

    /// Returns `true` if `id` is a hull vertex.
    #[inline]
    pub fn contains(&self, id: PointId) -> bool {
        self.points.iter().any(|point| point.id == id)
    }

    /// Returns the steps the scan took.
    #[inline]
    pub fn trace(&self) -> &[ScanStep] {
        &self.trace
    }

    /// Returns the number of hull vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the hull has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The monotonic stack of a running scan.
#[derive(Default)]
struct Scan {
    stack: Vec<Point>,
    trace: Vec<ScanStep>,
}

impl Scan {
    fn push(&mut self, point: Point) {
        self.trace.push(ScanStep::Push(point.id));
        self.stack.push(point);
    }

    fn pop(&mut self) -> Option<Point> {
        let point = self.stack.pop()?;
        self.trace.push(ScanStep::Pop(point.id));
        Some(point)
    }

    /// Feeds `candidate` to the scan. A `closing` candidate only settles the
    /// stack and is never pushed.
    fn advance(&mut self, candidate: Point, closing: bool) {
        // Points popped on a collinear turn. Whether they are interior is only
        // known once the backtracking stops.
        let mut collinear: Vec<Point> = Vec::new();

        while let [.., a, b] = self.stack.as_slice() {
            let (a, b) = (*a, *b);
            let turn = orient2d(a.position, b.position, candidate.position);
            if turn > 0.0 {
                break;
            }

            self.pop();
            if turn < 0.0 {
                // Right turn: `b` is interior, and so is everything deferred above it.
                collinear.clear();
            } else {
                collinear.push(b);
            }
        }

        let Some(&base) = self.stack.last() else {
            if !closing {
                self.push(candidate);
            }
            return;
        };

        // `base`, the deferred points and the candidate share a line with
        // `base` at one end. Only the point farthest from `base` can be a vertex.
        let reach = |point: &Point| {
            (point.position - base.position)
                .as_i64vec2()
                .length_squared()
        };
        match collinear.into_iter().max_by_key(reach) {
            Some(far) if reach(&far) > reach(&candidate) => self.push(far),
            _ if closing => {}
            _ => self.push(candidate),
        }
    }

    fn finish(self) -> Hull {
        Hull {
            points: self.stack,
            trace: self.trace,
        }
    }
}
