//! Slope, distance and polar angle between grid points.
//!
//! Angles follow a half-plane convention that only makes sense above the anchor:
//! a horizontal line is 180°, a vertical line 90°, ascending lines fall in
//! (90°, 180°) and descending lines in (0°, 90°). Equivalently, the angle is
//! `180° - θ` where `θ` is the usual counterclockwise angle from the `+x` axis.

use glam::IVec2;

/// Rounds to two decimals, with halves rounded toward positive infinity.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Slope of the line through `a` and `b`, rounded to two decimals.
///
/// Returns `None` for a vertical line.
#[inline]
pub fn slope(a: IVec2, b: IVec2) -> Option<f64> {
    let d = b - a;
    if d.x == 0 {
        return None;
    }
    Some(round2(f64::from(d.y) / f64::from(d.x)))
}

/// Euclidean distance between `a` and `b`, rounded to two decimals.
#[inline]
pub fn distance(a: IVec2, b: IVec2) -> f64 {
    let d = a.as_dvec2().distance(b.as_dvec2());
    if d.is_nan() {
        0.0
    } else {
        round2(d)
    }
}

/// Polar angle in degrees derived from a slope, in `(0, 180]`.
///
/// A vertical line (`None`) is 90°, a horizontal line 180°.
pub fn angle_from_slope(slope: Option<f64>) -> f64 {
    let Some(slope) = slope else {
        return 90.0;
    };

    let degrees = slope.atan().to_degrees();
    let folded = if degrees < 0.0 {
        degrees.abs()
    } else if degrees > 0.0 {
        180.0 - degrees
    } else {
        180.0
    };
    round2(folded)
}

/// Gives the orientation of the triangle formed by `a`, `b`, `c`.
///
/// This is `(b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)`:
///
/// - `orientation > 0`: counterclockwise (left turn)
/// - `orientation < 0`: clockwise (right turn)
/// - `orientation == 0`: collinear
#[inline]
pub fn orient2d(a: IVec2, b: IVec2, c: IVec2) -> f64 {
    use robust::Coord;
    let coord = |p: IVec2| Coord {
        x: f64::from(p.x),
        y: f64::from(p.y),
    };
    robust::orient2d(coord(a), coord(b), coord(c))
}
