use glam::{DVec2, IVec2};

use crate::{angle::round2, Point, PointId};

/// Where the active points gather, and which of them stay close to it.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSummary {
    /// The mean position of the points, rounded to the nearest cell.
    pub center: IVec2,
    /// The mean distance from the points to `center`.
    pub average_radius: f64,
    /// Points no farther from `center` than `average_radius`, in insertion order.
    pub within_average: Vec<PointId>,
    /// Every point with its distance to `center`, farthest first.
    pub by_distance: Vec<(PointId, f64)>,
}

impl ClusterSummary {
    /// Summarizes `points`, or returns `None` if there are none.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let n = points.len() as i64;
        let sum = points.iter().fold((0i64, 0i64), |(x, y), p| {
            (x + i64::from(p.position.x), y + i64::from(p.position.y))
        });
        // Halves round up.
        let mean = |sum: i64| (2 * sum + n).div_euclid(2 * n) as i32;
        let center = IVec2::new(mean(sum.0), mean(sum.1));

        let distances: Vec<(PointId, f64)> = points
            .iter()
            .map(|p| (p.id, distance_to(center, p.position)))
            .collect();
        let average_radius = distances.iter().map(|(_, d)| d).sum::<f64>() / points.len() as f64;

        let within_average = distances
            .iter()
            .filter(|(_, d)| *d <= average_radius)
            .map(|(id, _)| *id)
            .collect();

        let mut by_distance: Vec<(PointId, f64)> = distances
            .iter()
            .map(|&(id, d)| (id, round2(d + 0.00001)))
            .collect();
        by_distance.sort_by(|a, b| b.1.total_cmp(&a.1));

        Some(Self {
            center,
            average_radius,
            within_average,
            by_distance,
        })
    }
}

fn distance_to(center: IVec2, position: IVec2) -> f64 {
    let d = DVec2::distance(center.as_dvec2(), position.as_dvec2());
    if d.is_nan() {
        0.0
    } else {
        d
    }
}
