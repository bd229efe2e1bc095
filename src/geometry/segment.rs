//! Orientation and segment-intersection primitives
//!
//! The building blocks of the polygon collision check:
//! - Classify the turn of an ordered point triple via the cross product
//! - Bounding-box containment for collinear points
//! - Segment intersection with explicit handling of touching and
//!   collinear-overlap cases

use super::Point;

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify the turn made at `q` when walking `p` -> `q` -> `r`
///
/// Computed as the sign of the cross product
/// `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Check if `q` lies within the axis-aligned box spanned by `p` and `r`
///
/// Only meaningful when `q` is already known to be collinear with `p`-`r`;
/// under that precondition box containment equals segment containment.
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    p.x.min(r.x) <= q.x && q.x <= p.x.max(r.x) && p.y.min(r.y) <= q.y && q.y <= p.y.max(r.y)
}

/// Check if segment `p1`-`q1` intersects segment `p2`-`q2`
///
/// Touching counts: shared endpoints, a vertex lying on the other segment,
/// and collinear overlap are all intersections.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    // General case: the endpoints of each segment lie on opposite sides
    // of the other segment.
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear cases. Each is a sufficient condition on its own, so all
    // four are tested independently.
    if o1 == Orientation::Collinear && on_segment(p1, p2, q1) {
        return true;
    }
    if o2 == Orientation::Collinear && on_segment(p1, q2, q1) {
        return true;
    }
    if o3 == Orientation::Collinear && on_segment(p2, p1, q2) {
        return true;
    }
    if o4 == Orientation::Collinear && on_segment(p2, q1, q2) {
        return true;
    }

    false
}
