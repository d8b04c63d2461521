use crate::math::{Point, Real, UnitVector, Vector};
use arrayvec::ArrayVec;
use std::mem;

/// The maximum number of contacts generated between two colliders.
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// The contacts between two colliders.
pub type ContactManifold = ArrayVec<Contact, MAX_MANIFOLD_POINTS>;

/// Geometric description of a contact between two colliders.
///
/// Contact points are given as offsets from the origin of each collider, expressed with
/// world-space orientation (not in the collider's local frame).
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// Position of the contact on the first collider, relative to its origin.
    pub offset1: Vector,
    /// Position of the contact on the second collider, relative to its origin.
    pub offset2: Vector,
    /// The world-space contact normal, pointing from the first collider toward the second.
    pub normal: UnitVector,
    /// The penetration depth. Non-negative for contacts returned by the generators.
    pub depth: Real,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(offset1: Vector, offset2: Vector, normal: UnitVector, depth: Real) -> Self {
        Contact {
            offset1,
            offset2,
            normal,
            depth,
        }
    }

    /// Swaps the roles of both colliders.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.offset1, &mut self.offset2);
        self.normal = -self.normal;
    }

    /// Returns a new contact with the roles of both colliders swapped.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// The world-space contact point on the first collider, placed at `origin1`.
    #[inline]
    pub fn world_point1(&self, origin1: &Point) -> Point {
        origin1 + self.offset1
    }

    /// The world-space contact point on the second collider, placed at `origin2`.
    #[inline]
    pub fn world_point2(&self, origin2: &Point) -> Point {
        origin2 + self.offset2
    }
}
