use crate::math::{Real, TangentBasis, Vector};

const DEGENERATE_TANGENT_EPS: Real = 1.0e-5;

/// Computes two unit tangent directions spanning the plane orthogonal to `normal`.
///
/// The first tangent is `normal × x`. If `normal` is (almost) parallel to the `x` axis,
/// the `y` axis is tried, then the `z` axis. The second tangent is `normal × t0`,
/// normalized. `normal` is expected to be a unit vector.
pub fn compute_tangents(normal: &Vector) -> TangentBasis {
    let mut t0 = normal.cross(&Vector::x());

    if t0.norm() < DEGENERATE_TANGENT_EPS {
        t0 = normal.cross(&Vector::y());

        if t0.norm() < DEGENERATE_TANGENT_EPS {
            t0 = normal.cross(&Vector::z());
        }
    }

    let t0 = t0.normalize();
    let t1 = normal.cross(&t0).normalize();
    [t0, t1]
}
