//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, UnitVector, Vector};
use crate::shape::Segment;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point,
    /// The triangle second point.
    pub b: Point,
    /// The triangle third point.
    pub c: Point,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        Triangle { a, b, c }
    }

    /// The vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: `[ab, bc, ca]`.
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The normal of this triangle, with a norm equal to twice its area.
    ///
    /// Points toward the side from which `a`, `b`, `c` appear counter-clockwise.
    #[inline]
    pub fn scaled_normal(&self) -> Vector {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector> {
        UnitVector::try_new(self.scaled_normal(), 0.0)
    }

    /// Is `pt` strictly on the side of this triangle toward which its normal points?
    #[inline]
    pub fn is_facing(&self, pt: &Point) -> bool {
        self.scaled_normal().dot(&(pt - self.a)) > 0.0
    }

    /// The local-space AABB of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }
}
