use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Pose, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::{Contact, ContactManifold};
use crate::shape::{Ball, MeshCollider, TriMesh};
use either::Either;

/// Minimal distance between the two contact points generated on a mesh.
const SECOND_CONTACT_MIN_SEPARATION: Real = 0.1;
/// Candidates for a second contact whose direction has a cosine with the first contact normal
/// larger than this are rejected.
const SECOND_CONTACT_MAX_COS: Real = 0.98;
/// Margin added to the ball's box when looking for candidate faces in the mesh BVH.
const BVH_QUERY_MARGIN: Real = 1.0e-3;

#[derive(Copy, Clone)]
struct ClosestFeature {
    face: u32,
    point: Point,
    dist: Real,
}

/// Computes up to two contacts between a triangle mesh and a ball.
///
/// Only the faces facing the ball center are considered. The first contact is located at the
/// point of the mesh closest to the ball center. The second contact is the closest point of
/// another face, at least `0.1` away from the first one, and whose direction toward the ball
/// center deviates from the first normal by more than ~11°. This keeps nearly parallel contacts
/// from flat regions out of the manifold.
///
/// If the collider has a BVH, only the faces whose boxes intersect the ball's box are visited.
/// Faces are always visited in increasing index order.
pub fn contact_trimesh_ball(
    pose1: &Pose,
    mesh1: &MeshCollider,
    center2: &Point,
    ball2: &Ball,
) -> ContactManifold {
    let mut manifold = ContactManifold::new();
    let trimesh = mesh1.mesh();
    let local_center = pose1.inverse_transform_point(center2);
    let radius = ball2.radius;

    let candidates = match mesh1.bvh() {
        Some(bvh) => {
            let query = ball2
                .local_aabb()
                .translated(&local_center.coords)
                .loosened(BVH_QUERY_MARGIN);
            let mut faces = bvh.query(&query);
            faces.sort_unstable();
            Either::Right(faces.into_iter())
        }
        None => Either::Left(0..trimesh.num_triangles() as u32),
    };

    let Some(first) =
        closest_facing_feature(trimesh, &local_center, candidates.clone(), |_, _| true)
    else {
        return manifold;
    };

    if first.dist > radius {
        return manifold;
    }

    let first_normal = feature_normal(trimesh, &first, &local_center);
    manifold.push(make_contact(pose1, &first, &first_normal, radius));

    let second = closest_facing_feature(trimesh, &local_center, candidates, |proj, dist| {
        (proj - first.point).norm() >= SECOND_CONTACT_MIN_SEPARATION
            && first_normal.dot(&(local_center - proj)) <= dist * SECOND_CONTACT_MAX_COS
    });

    if let Some(second) = second {
        if second.dist <= radius {
            let second_normal = feature_normal(trimesh, &second, &local_center);
            manifold.push(make_contact(pose1, &second, &second_normal, radius));
        }
    }

    manifold
}

/// The closest projection of `pt` on the faces facing it, among the ones accepted by `filter`.
fn closest_facing_feature(
    trimesh: &TriMesh,
    pt: &Point,
    faces: impl Iterator<Item = u32>,
    filter: impl Fn(&Point, Real) -> bool,
) -> Option<ClosestFeature> {
    let mut closest: Option<ClosestFeature> = None;

    for face in faces {
        let tri = trimesh.triangle(face);

        if !tri.is_facing(pt) {
            continue;
        }

        let point = tri.project_local_point(pt);
        let dist = na::distance(&point, pt);

        if !filter(&point, dist) {
            continue;
        }

        if closest.map(|c| dist < c.dist).unwrap_or(true) {
            closest = Some(ClosestFeature { face, point, dist });
        }
    }

    closest
}

/// The local-space normal pointing from the feature toward `pt`.
///
/// Falls back to the face normal if `pt` lies on the feature.
fn feature_normal(trimesh: &TriMesh, feature: &ClosestFeature, pt: &Point) -> Vector {
    UnitVector::try_new(pt - feature.point, DEFAULT_EPSILON)
        .or_else(|| trimesh.triangle(feature.face).normal())
        .map(|n| n.into_inner())
        .unwrap_or_else(Vector::zeros)
}

fn make_contact(
    pose1: &Pose,
    feature: &ClosestFeature,
    local_normal: &Vector,
    radius: Real,
) -> Contact {
    let normal = UnitVector::new_unchecked(pose1.transform_vector(local_normal));
    let offset1 = pose1.transform_vector(&feature.point.coords);
    let offset2 = -*normal * radius;

    Contact::new(offset1, offset2, normal, radius - feature.dist)
}
