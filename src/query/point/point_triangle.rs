use crate::math::{Point, Real};
use crate::shape::Triangle;

impl Triangle {
    /// Projects a point on this triangle.
    ///
    /// The point is first projected on the triangle's plane. Each edge is then tested with the
    /// sign of `(edge × (proj - edge_start)) · normal`: if no test fails, the projection lies
    /// inside of the triangle. Otherwise the result is the closest of the projections on the
    /// failing edges, clamped to their endpoints.
    ///
    /// A degenerate triangle is handled as the union of its edges.
    pub fn project_local_point(&self, pt: &Point) -> Point {
        let edges = self.edges();

        let Some(normal) = self.normal().map(|n| n.into_inner()) else {
            return closest_projection(pt, edges.iter().map(|e| e.project_local_point(pt)));
        };

        let proj = pt - normal * normal.dot(&(pt - self.a));
        let mut outside = edges
            .iter()
            .filter(|e| e.scaled_direction().cross(&(proj - e.a)).dot(&normal) <= 0.0)
            .peekable();

        if outside.peek().is_none() {
            proj
        } else {
            closest_projection(pt, outside.map(|e| e.project_local_point(pt)))
        }
    }
}

fn closest_projection(pt: &Point, candidates: impl Iterator<Item = Point>) -> Point {
    let mut best = *pt;
    let mut best_dist = Real::MAX;

    for candidate in candidates {
        let dist = na::distance_squared(pt, &candidate);
        if dist < best_dist {
            best_dist = dist;
            best = candidate;
        }
    }

    best
}
