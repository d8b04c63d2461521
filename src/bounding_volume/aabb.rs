//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{HomogeneousMatrix, Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// The box is defined by its corners with the smallest (`mins`) and the largest (`maxs`)
/// coordinates. A valid box satisfies `mins <= maxs` componentwise.
///
/// The box with all coordinates set to NaN is reserved as the "invalid" box: it represents
/// an empty or not-yet-computed bound. It never intersects nor contains anything, and it must
/// be replaced by a valid box before being used in a broad-phase.
///
/// # Example
///
/// ```rust
/// use rigid3d::bounding_volume::{Aabb, BoundingVolume};
/// use rigid3d::math::Point;
///
/// let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
/// let b = Aabb::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 1.0, 1.0));
///
/// // Boxes that only share a face do not intersect.
/// assert!(!a.intersects(&b));
/// assert!(a.merged(&b).contains(&a));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point,
    /// The point with maximum coordinates.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates the invalid AABB, with all its coordinates set to NaN.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::from(Vector::repeat(Real::NAN)),
            Point::from(Vector::repeat(Real::NAN)),
        )
    }

    /// Is this the invalid AABB?
    ///
    /// Any NaN coordinate makes the AABB invalid.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.mins.iter().chain(self.maxs.iter()).any(|x| x.is_nan())
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB enclosing all the given points.
    ///
    /// Returns the invalid AABB if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut it = pts.into_iter();

        match it.next() {
            Some(first) => {
                let mut result = Aabb::new(first, first);
                it.for_each(|pt| result.take_point(pt));
                result
            }
            None => Self::new_invalid(),
        }
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// Half the extents of this AABB along each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// The volume of this `Aabb`.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Computes the `Aabb` bounding the eight corners of `self` transformed by `m`.
    ///
    /// This is not the tightest box bounding the transformed shape, only the box of the
    /// transformed box.
    #[inline]
    pub fn transform_by(&self, m: &HomogeneousMatrix) -> Self {
        Self::from_points(self.vertices().iter().map(|pt| m.transform_point(pt)))
    }

    /// Computes the `Aabb` bounding `self` translated by `translation`.
    #[inline]
    pub fn translated(mut self, translation: &Vector) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Does this AABB contain the given point? Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point) -> bool {
        na::partial_le(&self.mins, point) && na::partial_ge(&self.maxs, point)
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point {
        self.center()
    }

    /// Strict overlap test: boxes sharing only a face, an edge or a corner do not intersect.
    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_lt(&self.mins, &other.maxs) && na::partial_gt(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Moves every face of this box outward by `amount`.
    ///
    /// A negative `amount` shrinks the box.
    #[inline]
    fn loosen(&mut self, amount: Real) {
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}
