use crate::math::{Point, Pose};
use crate::query::{contact_ball_ball, contact_trimesh_ball, ContactManifold, Unsupported};
use crate::shape::Collider;

/// Computes the contacts between two colliders placed at `pose1` and `pose2`.
///
/// Contact normals point from the first collider toward the second one. Offsets are relative
/// to each collider's origin, with world-space orientation.
///
/// Returns `Err(Unsupported)` for a pair of meshes.
pub fn contact_manifold(
    pose1: &Pose,
    g1: &Collider,
    pose2: &Pose,
    g2: &Collider,
) -> Result<ContactManifold, Unsupported> {
    let center1 = Point::from(pose1.translation);
    let center2 = Point::from(pose2.translation);

    match (g1, g2) {
        (Collider::Sphere(b1), Collider::Sphere(b2)) => {
            let contact = contact_ball_ball(&center1, b1, &center2, b2);
            Ok(contact.into_iter().collect())
        }
        (Collider::Mesh(m1), Collider::Sphere(b2)) => {
            Ok(contact_trimesh_ball(pose1, m1, &center2, b2))
        }
        (Collider::Sphere(b1), Collider::Mesh(m2)) => {
            let mut manifold = contact_trimesh_ball(pose2, m2, &center1, b1);
            manifold.iter_mut().for_each(|c| c.flip());
            Ok(manifold)
        }
        (Collider::Mesh(_), Collider::Mesh(_)) => Err(Unsupported),
    }
}
