use crate::math::{Point, Real};
use na::{Point2, RealField};

/// Builds the surface of revolution of a 2D profile around the `y` axis.
///
/// Each profile point `(r, h)` describes a circle of radius `r` at the height `h`. The profile is
/// swept by `segments` rotations of `2π / segments` radians; consecutive rotated profiles are
/// stitched with two triangles per pair of consecutive profile points. If the profile goes
/// upward (increasing `h`) with a positive `r`, faces are wound counter-clockwise when seen
/// from outside.
///
/// Points with `r = 0` yield degenerate triangles around the axis. They don't contribute to the
/// volume of the surface.
pub fn sweep_surface(profile: &[Point2<Real>], segments: u32) -> (Vec<Point>, Vec<[u32; 3]>) {
    assert!(segments > 0, "A sweep surface needs at least one segment.");
    assert!(
        profile.len() >= 2,
        "A sweep surface needs at least two profile points."
    );

    let npts = profile.len() as u32;
    let dtheta = Real::two_pi() / segments as Real;
    let mut vertices = Vec::with_capacity((segments * npts) as usize);
    let mut indices = Vec::with_capacity((segments * (npts - 1) * 2) as usize);

    for seg in 0..segments {
        let (sin, cos) = (dtheta * seg as Real).sin_cos();
        vertices.extend(
            profile
                .iter()
                .map(|pt| Point::new(pt.x * cos, pt.y, pt.x * sin)),
        );
    }

    for seg in 0..segments {
        let curr = seg * npts;
        let next = ((seg + 1) % segments) * npts;

        for i in 0..npts - 1 {
            let p0 = curr + i;
            let p1 = curr + i + 1;
            let p2 = next + i + 1;
            let p3 = next + i;
            indices.push([p0, p1, p2]);
            indices.push([p0, p2, p3]);
        }
    }

    (vertices, indices)
}
