use crate::math::{Matrix, Real};

/// The reciprocal of `val`, or zero if `val` is zero.
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

/// The inverse of `m`, or the zero matrix if `m` is not invertible.
///
/// A zero inverse inertia tensor stands for an infinite inertia.
pub fn inv_matrix(m: &Matrix) -> Matrix {
    m.try_inverse().unwrap_or_else(Matrix::zeros)
}
