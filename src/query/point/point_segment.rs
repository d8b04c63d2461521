use crate::math::Point;
use crate::shape::Segment;

impl Segment {
    /// Projects a point on this segment.
    ///
    /// The projection is clamped to the segment endpoints.
    #[inline]
    pub fn project_local_point(&self, pt: &Point) -> Point {
        let ab = self.scaled_direction();
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        if ab_ap <= 0.0 {
            // Voronoï region of vertex 'a'.
            self.a
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            self.b
        } else {
            // Voronoï region of the segment interior.
            self.a + ab * (ab_ap / sqnab)
        }
    }
}
