use approx::assert_relative_eq;
use oorandom::Rand32;
use rigid3d::math::{Pose, Real, Vector};
use rigid3d::query::{self, Unsupported};
use rigid3d::shape::{Ball, SharedCollider, TriMesh};
use rigid3d::transformation;
use std::sync::Arc;

#[test]
fn unit_spheres() {
    let ball = SharedCollider::ball(1.0);
    let origin = Pose::identity();

    let manifold = query::contact_manifold(
        &origin,
        &ball,
        &Pose::from_translation(Vector::new(1.5, 0.0, 0.0)),
        &ball,
    )
    .unwrap();
    assert_eq!(manifold.len(), 1);
    assert_relative_eq!(manifold[0].depth, 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(*manifold[0].normal, Vector::x(), epsilon = 1.0e-6);

    let manifold = query::contact_manifold(
        &origin,
        &ball,
        &Pose::from_translation(Vector::new(3.0, 0.0, 0.0)),
        &ball,
    )
    .unwrap();
    assert!(manifold.is_empty());
}

#[test]
fn bvh_does_not_change_mesh_contacts() {
    let (vertices, indices) = Ball::new(2.0).to_trimesh(16, 8);
    let mesh = Arc::new(TriMesh::new(vertices, indices).unwrap());
    let plain = SharedCollider::trimesh(mesh.clone());
    let accelerated = SharedCollider::trimesh_with_bvh(mesh);
    let ball = SharedCollider::ball(0.4);
    let mut rng = Rand32::new(99);
    let mut num_contacts = 0;

    for _ in 0..500 {
        let dir = Vector::new(
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
        );
        if dir.norm() < 1.0e-3 {
            continue;
        }
        let dist = 1.5 + rng.rand_float() as Real;
        let ball_pose = Pose::from_translation(dir.normalize() * dist);
        let mesh_pose = Pose::from_translation(Vector::new(0.0, 0.1, 0.0));

        let expected = query::contact_manifold(&mesh_pose, &plain, &ball_pose, &ball).unwrap();
        let found = query::contact_manifold(&mesh_pose, &accelerated, &ball_pose, &ball).unwrap();

        assert_eq!(found, expected);
        num_contacts += found.len();
    }

    assert!(num_contacts > 0);
}

#[test]
fn mesh_contacts_push_the_ball_out() {
    let (vertices, indices) = transformation::cuboid(&Vector::new(2.0, 0.5, 2.0));
    let floor = SharedCollider::trimesh(Arc::new(TriMesh::new(vertices, indices).unwrap()));
    let ball = SharedCollider::ball(0.5);

    let floor_pose = Pose::from_translation(Vector::new(0.0, -0.5, 0.0));
    let ball_pose = Pose::from_translation(Vector::new(0.7, 0.45, -1.1));

    let manifold = query::contact_manifold(&ball_pose, &ball, &floor_pose, &floor).unwrap();
    assert_eq!(manifold.len(), 1);

    // The ball comes first: the normal points down, into the floor.
    let contact = manifold[0];
    assert_relative_eq!(*contact.normal, -Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(contact.depth, 0.05, epsilon = 1.0e-5);
    assert_relative_eq!(contact.offset1, -Vector::y() * 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(
        contact.offset2,
        Vector::new(0.7, 0.5, -1.1),
        epsilon = 1.0e-5
    );
}

#[test]
fn mesh_pairs_are_unsupported() {
    let (vertices, indices) = transformation::cuboid(&Vector::repeat(1.0));
    let cube = SharedCollider::trimesh(Arc::new(TriMesh::new(vertices, indices).unwrap()));
    let pose = Pose::identity();

    assert_eq!(
        query::contact_manifold(&pose, &cube, &pose, &cube),
        Err(Unsupported)
    );
}
