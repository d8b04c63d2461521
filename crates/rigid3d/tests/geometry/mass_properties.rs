use approx::assert_relative_eq;
use rigid3d::mass_properties::MassProperties;
use rigid3d::math::{Matrix, Point, Real, Vector};
use rigid3d::shape::{Ball, Collider, SharedCollider, TriMesh};
use rigid3d::transformation;
use std::sync::Arc;

#[test]
fn unit_cube_mesh() {
    let (vertices, indices) = transformation::cuboid(&Vector::repeat(0.5));
    assert_eq!(vertices.len(), 8);
    assert_eq!(indices.len(), 12);

    let props = MassProperties::from_trimesh(&vertices, indices);
    assert_relative_eq!(props.volume, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(props.local_com, Point::origin(), epsilon = 1.0e-6);
    assert_relative_eq!(props.inertia, Matrix::identity() / 6.0, epsilon = 1.0e-6);
}

#[test]
fn ball_mesh_volume_converges() {
    let radius = 2.0;
    let exact = 4.0 / 3.0 * std::f64::consts::PI as Real * radius * radius * radius;
    let mut prev_error = Real::MAX;

    for subdivs in [8, 16, 32, 64] {
        let (vertices, indices) = Ball::new(radius).to_trimesh(subdivs, subdivs / 2);
        let volume = MassProperties::from_trimesh(&vertices, indices).volume;
        let error = (exact - volume).abs() / exact;

        assert!(volume < exact);
        assert!(error < prev_error);
        prev_error = error;
    }

    assert!(prev_error < 0.01);
}

#[test]
fn mesh_collider_reuses_mesh_mass_properties() {
    let (vertices, indices) = transformation::cuboid(&Vector::new(1.0, 2.0, 3.0));
    let mesh = Arc::new(TriMesh::new(vertices, indices).unwrap());
    let collider = SharedCollider::trimesh(mesh.clone());
    let shared = collider.clone();

    assert_relative_eq!(collider.volume(), 48.0, epsilon = 1.0e-4);
    assert!(Arc::ptr_eq(&collider.0, &shared.0));

    match &*collider {
        Collider::Mesh(mesh_collider) => assert!(Arc::ptr_eq(mesh_collider.shared_mesh(), &mesh)),
        Collider::Sphere(_) => unreachable!(),
    }
}
