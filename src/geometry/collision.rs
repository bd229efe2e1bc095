//! Polygon boundary-collision check
//!
//! Tests every edge of one polygon against every edge of the other, so two
//! polygons collide exactly when their boundaries cross or touch. This is a
//! boundary test only: a polygon lying strictly inside another, touching no
//! edge, does NOT collide. Callers that need containment must combine this
//! with a point-in-polygon test.

use super::{Polygon, segments_intersect};

/// Check if the boundaries of `a` and `b` intersect (crossing or touching)
///
/// Symmetric and deterministic: `collides(a, b) == collides(b, a)`. Cost is
/// O(edges(a) * edges(b)) with an early return on the first intersecting
/// edge pair.
pub fn collides(a: &Polygon, b: &Polygon) -> bool {
    collides_inspect(a, b, |_, _| {})
}

/// Like [`collides`], additionally reporting the first intersecting edge pair
///
/// `on_hit` receives the indices `(i, j)` of the first colliding pair - edge
/// `i` of `a` against edge `j` of `b`, scanning `a`'s edges in vertex order
/// with `b`'s nested inside - and is called at most once. The boolean result
/// never depends on the scan order.
pub fn collides_inspect<F>(a: &Polygon, b: &Polygon, mut on_hit: F) -> bool
where
    F: FnMut(usize, usize),
{
    for (i, (p1, q1)) in a.edges().enumerate() {
        for (j, (p2, q2)) in b.edges().enumerate() {
            if segments_intersect(p1, q1, p2, q2) {
                on_hit(i, j);
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(origin: (f64, f64), side: f64) -> Polygon {
        let (x, y) = origin;
        Polygon::from_coords(&[(x, y), (x + side, y), (x + side, y + side), (x, y + side)])
            .unwrap()
    }

    #[test]
    fn test_disjoint_squares() {
        let a = square((0.0, 0.0), 4.0);
        let b = square((5.0, 5.0), 2.0);

        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_overlapping_squares() {
        let a = square((0.0, 0.0), 4.0);
        let b = square((2.0, 2.0), 4.0);

        assert!(collides(&a, &b));
    }

    #[test]
    fn test_shared_edge() {
        // Two squares sharing the x = 2 edge; collinear overlap counts
        let a = square((0.0, 0.0), 2.0);
        let b = square((2.0, 0.0), 2.0);

        assert!(collides(&a, &b));
    }

    #[test]
    fn test_shared_corner() {
        let a = square((0.0, 0.0), 2.0);
        let b = square((2.0, 2.0), 2.0);

        assert!(collides(&a, &b));
    }

    #[test]
    fn test_contained_polygon_does_not_collide() {
        // Boundary-only contract: strict containment reports false
        let outer = square((0.0, 0.0), 10.0);
        let inner = square((4.0, 4.0), 1.0);

        assert!(!collides(&outer, &inner));
        assert!(!collides(&inner, &outer));
    }

    #[test]
    fn test_self_collision() {
        let a = square((0.0, 0.0), 4.0);

        assert!(collides(&a, &a));
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (square((0.0, 0.0), 4.0), square((5.0, 5.0), 2.0)),
            (square((0.0, 0.0), 4.0), square((2.0, 2.0), 4.0)),
            (square((0.0, 0.0), 2.0), square((2.0, 0.0), 2.0)),
        ];

        for (a, b) in &pairs {
            assert_eq!(collides(a, b), collides(b, a));
        }
    }

    #[test]
    fn test_triangle_crossing_square() {
        let square = square((0.0, 0.0), 4.0);
        let triangle = Polygon::from_coords(&[(3.0, 2.0), (6.0, 1.0), (6.0, 3.0)]).unwrap();

        assert!(collides(&square, &triangle));
    }

    #[test]
    fn test_inspect_reports_first_pair_in_scan_order() {
        let a = square((0.0, 0.0), 4.0);
        let b = square((2.0, 2.0), 4.0);

        let mut hit = None;
        let mut calls = 0;
        assert!(collides_inspect(&a, &b, |i, j| {
            hit = Some((i, j));
            calls += 1;
        }));

        assert_eq!(calls, 1);
        // a's edge 0 (y = 0) misses b entirely; edge 1, (4,0)->(4,4),
        // crosses b's edge 0, (2,2)->(6,2), at (4,2).
        assert_eq!(hit, Some((1, 0)));
    }

    #[test]
    fn test_inspect_not_called_when_disjoint() {
        let a = square((0.0, 0.0), 4.0);
        let b = square((5.0, 5.0), 2.0);

        let mut calls = 0;
        assert!(!collides_inspect(&a, &b, |_, _| calls += 1));
        assert_eq!(calls, 0);
    }
}
