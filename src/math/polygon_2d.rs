use super::{Point2, CROSSING_EPSILON};

/// Crossing-number containment test over raw vertices.
///
/// An edge counts when the point's y lies on opposite sides of the edge's
/// endpoints (half-open: `y > p.y` on one side only) and the point is left of
/// the edge at that height. Inside iff the crossing count is odd.
///
/// Horizontal edges never satisfy the straddle test, so the epsilon in the
/// denominator only guards the arithmetic, not the outcome.
#[must_use]
pub fn crossing_number_contains(point: &Point2, verts: &[Point2]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (verts[i].x, verts[i].y);
        let (xj, yj) = (verts[j].x, verts[j].y);
        if (yi > point.y) != (yj > point.y) {
            let x_at = (xj - xi) * (point.y - yi) / (yj - yi + CROSSING_EPSILON) + xi;
            if point.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of the vertices. Returns the origin for an empty slice.
#[must_use]
pub fn vertex_centroid(verts: &[Point2]) -> Point2 {
    if verts.is_empty() {
        return Point2::origin();
    }
    let mut sx = 0.0;
    let mut sy = 0.0;
    for p in verts {
        sx += p.x;
        sy += p.y;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = verts.len() as f64;
    Point2::new(sx / n, sy / n)
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame. Pentagons built with the
/// `-90°` start are counter-clockwise in angle space and therefore positive.
#[must_use]
pub fn signed_area(verts: &[Point2]) -> f64 {
    let n = verts.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += verts[i].x * verts[j].y - verts[j].x * verts[i].y;
    }
    sum * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn interior_point_is_inside() {
        assert!(crossing_number_contains(&Point2::new(5.0, 5.0), &square()));
    }

    #[test]
    fn exterior_points_are_outside() {
        let sq = square();
        assert!(!crossing_number_contains(&Point2::new(-5.0, 5.0), &sq));
        assert!(!crossing_number_contains(&Point2::new(15.0, 5.0), &sq));
        assert!(!crossing_number_contains(&Point2::new(5.0, 20.0), &sq));
    }

    #[test]
    fn point_level_with_horizontal_edge() {
        let sq = square();
        // Half-open in y: the bottom edge belongs to the polygon, the top does not.
        assert!(crossing_number_contains(&Point2::new(5.0, 0.0), &sq));
        assert!(!crossing_number_contains(&Point2::new(5.0, 10.0), &sq));
        assert!(!crossing_number_contains(&Point2::new(-5.0, 0.0), &sq));
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape opening upwards.
        let u = vec![
            Point2::new(0.0, 0.0),
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
            Point2::new(6.0, 9.0),
            Point2::new(6.0, 3.0),
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 9.0),
            Point2::new(0.0, 9.0),
        ];
        assert!(!crossing_number_contains(&Point2::new(4.5, 6.0), &u));
        assert!(crossing_number_contains(&Point2::new(1.5, 6.0), &u));
        assert!(crossing_number_contains(&Point2::new(4.5, 1.5), &u));
    }

    #[test]
    fn too_few_vertices_is_never_inside() {
        let seg = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(!crossing_number_contains(&Point2::new(0.5, 0.5), &seg));
    }

    #[test]
    fn centroid_of_square() {
        let c = vertex_centroid(&square());
        assert!((c.x - 5.0).abs() < TOLERANCE);
        assert!((c.y - 5.0).abs() < TOLERANCE);
        assert_eq!(vertex_centroid(&[]), Point2::origin());
    }

    #[test]
    fn signed_area_orientation() {
        let sq = square();
        assert!((signed_area(&sq) - 100.0).abs() < TOLERANCE);
        let rev: Vec<Point2> = sq.into_iter().rev().collect();
        assert!((signed_area(&rev) + 100.0).abs() < TOLERANCE);
    }
}
