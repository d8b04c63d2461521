//! Various unsorted geometrical and logical operators.

pub(crate) use self::inv::{inv, inv_matrix};
pub use self::tangents::compute_tangents;

mod inv;
mod tangents;
