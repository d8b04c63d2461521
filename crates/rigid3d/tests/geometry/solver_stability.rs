use approx::assert_relative_eq;
use rigid3d::dynamics::{RigidBody, RigidBodyDesc, SimulationParams};
use rigid3d::math::{Pose, Real, Vector};
use rigid3d::pipeline::PhysicsWorld;
use rigid3d::shape::{SharedCollider, TriMesh};
use rigid3d::transformation;
use std::sync::Arc;

fn gravity_params() -> SimulationParams {
    SimulationParams {
        gravity: Vector::new(0.0, -9.81, 0.0),
        ..SimulationParams::default()
    }
}

#[test]
fn falling_sphere_comes_to_rest_on_sphere() {
    let mut world = PhysicsWorld::new(gravity_params());
    let ground = world.insert_body(RigidBody::new(
        Pose::identity(),
        Some(SharedCollider::ball(1.0)),
    ));
    let falling = world.insert_body(
        RigidBodyDesc::new(Some(SharedCollider::ball(0.5)))
            .translation(Vector::new(0.0, 2.0, 0.0))
            .density(1.0)
            .restitution(0.0)
            .build(),
    );

    let penetration = |world: &PhysicsWorld| -> Real {
        let p1 = world.body(ground).unwrap().position();
        let p2 = world.body(falling).unwrap().position();
        1.5 - (p2 - p1).norm()
    };

    let mut history = Vec::new();
    for _ in 0..720 {
        world.step();
        history.push(penetration(&world));
    }

    // Once in contact, the penetration must not keep growing.
    let tail = &history[360..];
    let max_tail = tail.iter().cloned().fold(Real::MIN, Real::max);
    assert!(max_tail < 0.01, "penetration: {}", max_tail);
    assert!(tail.windows(2).any(|w| w[1] <= w[0]));

    let body = world.body(falling).unwrap();
    assert!(body.linvel.norm() < 0.05);
    assert_relative_eq!(body.position().x, 0.0, epsilon = 1.0e-4);
    assert!(world.body(ground).unwrap().position().norm() == 0.0);
}

#[test]
fn sphere_stack_does_not_diverge() {
    let mut world = PhysicsWorld::new(gravity_params());
    let ball = SharedCollider::ball(0.5);
    let _ = world.insert_body(RigidBody::new(Pose::identity(), Some(ball.clone())));

    let stack: Vec<_> = (1..4)
        .map(|i| {
            world.insert_body(
                RigidBodyDesc::new(Some(ball.clone()))
                    .translation(Vector::new(0.0, 1.05 * i as Real, 0.0))
                    .mass(1.0)
                    .restitution(0.0)
                    .build(),
            )
        })
        .collect();

    for _ in 0..540 {
        world.step();
    }

    for pair in stack.windows(2) {
        let lower = world.body(pair[0]).unwrap().position();
        let upper = world.body(pair[1]).unwrap().position();
        let gap = (upper - lower).norm();
        assert!(gap > 0.97 && gap < 1.02, "gap: {}", gap);
    }

    assert!(world
        .bodies()
        .iter()
        .all(|b| b.position().iter().all(|e| e.is_finite())));
}

#[test]
fn sphere_settles_on_mesh_floor() {
    let (vertices, indices) = transformation::cuboid(&Vector::new(5.0, 0.5, 5.0));
    let mesh = Arc::new(TriMesh::new(vertices, indices).unwrap());
    let floor = SharedCollider::trimesh_with_bvh(mesh);

    let mut world = PhysicsWorld::new(gravity_params());
    let _ = world.insert_body(RigidBody::new(
        Pose::from_translation(Vector::new(0.0, -0.5, 0.0)),
        Some(floor),
    ));
    let ball = world.insert_body(
        RigidBodyDesc::new(Some(SharedCollider::ball(0.5)))
            .translation(Vector::new(2.0, 1.5, -1.0))
            .density(2.0)
            .restitution(0.0)
            .build(),
    );

    for _ in 0..540 {
        world.step();
    }

    let body = world.body(ball).unwrap();
    assert_relative_eq!(body.position().y, 0.5, epsilon = 1.0e-2);
    assert_relative_eq!(body.position().x, 2.0, epsilon = 1.0e-2);
    assert_relative_eq!(body.position().z, -1.0, epsilon = 1.0e-2);
    assert!(body.linvel.norm() < 0.05);
}

#[test]
fn bouncing_sphere_loses_height() {
    let (vertices, indices) = transformation::cuboid(&Vector::new(5.0, 0.5, 5.0));
    let floor = SharedCollider::trimesh(Arc::new(TriMesh::new(vertices, indices).unwrap()));

    let mut world = PhysicsWorld::new(gravity_params());
    let _ = world.insert_body(
        RigidBodyDesc::new(Some(floor))
            .translation(Vector::new(0.0, -0.5, 0.0))
            .restitution(1.0)
            .build(),
    );
    let ball = world.insert_body(
        RigidBodyDesc::new(Some(SharedCollider::ball(0.5)))
            .translation(Vector::new(-2.0, 2.0, 1.5))
            .mass(1.0)
            .restitution(0.5)
            .build(),
    );

    let mut max_height_after_bounce: Real = 0.0;
    let mut bounced = false;
    for _ in 0..360 {
        world.step();
        let body = world.body(ball).unwrap();
        if body.linvel.y > 0.0 {
            bounced = true;
        }
        if bounced {
            max_height_after_bounce = max_height_after_bounce.max(body.position().y);
        }
    }

    assert!(bounced);
    assert!(max_height_after_bounce > 0.6);
    assert!(max_height_after_bounce < 2.0);
}
