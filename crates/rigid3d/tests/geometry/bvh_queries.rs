use oorandom::Rand32;
use rigid3d::bounding_volume::{Aabb, BoundingVolume};
use rigid3d::math::{Point, Real, Vector};
use rigid3d::shape::{Ball, MeshCollider, TriMesh};
use std::sync::Arc;

fn random_point(rng: &mut Rand32, extent: Real) -> Point {
    Point::new(
        (rng.rand_float() as Real * 2.0 - 1.0) * extent,
        (rng.rand_float() as Real * 2.0 - 1.0) * extent,
        (rng.rand_float() as Real * 2.0 - 1.0) * extent,
    )
}

#[test]
fn mesh_bvh_matches_brute_force() {
    let (vertices, indices) = Ball::new(2.0).to_trimesh(24, 12);
    let mesh = Arc::new(TriMesh::new(vertices, indices).unwrap());
    let collider = MeshCollider::with_bvh(mesh.clone());
    let bvh = collider.bvh().unwrap();

    assert_eq!(bvh.len(), mesh.num_triangles());
    bvh.assert_well_formed();
    assert!(bvh.root_aabb().contains(mesh.local_aabb()));

    let mut rng = Rand32::new(1234);

    for _ in 0..200 {
        let center = random_point(&mut rng, 3.0);
        let half_extents = Vector::repeat(0.05 + rng.rand_float() as Real);
        let query = Aabb::from_half_extents(center, half_extents);

        let mut found = bvh.query(&query);
        found.sort_unstable();

        let expected: Vec<u32> = mesh
            .triangles()
            .enumerate()
            .filter(|(_, tri)| tri.local_aabb().intersects(&query))
            .map(|(i, _)| i as u32)
            .collect();

        assert_eq!(found, expected);
    }
}

#[test]
fn depth_first_traversal_visits_every_node() {
    let (vertices, indices) = Ball::new(1.0).to_trimesh(8, 4);
    let collider = MeshCollider::with_bvh(Arc::new(TriMesh::new(vertices, indices).unwrap()));
    let bvh = collider.bvh().unwrap();

    let mut visited = 0;
    let mut leaves = 0;
    let mut max_depth = 0;
    bvh.traverse_depth_first(|node, depth| {
        visited += 1;
        max_depth = max_depth.max(depth);
        if node.is_leaf() {
            leaves += 1;
        }
    });

    assert_eq!(visited, bvh.node_count());
    assert_eq!(leaves, bvh.len());
    // A binary tree with n leaves has 2n - 1 nodes.
    assert_eq!(visited, 2 * leaves - 1);
    assert!(max_depth >= 6);
}
