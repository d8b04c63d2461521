use approx::assert_relative_eq;
use rigid3d::dynamics::{
    HingeJoint, JointDesc, JointKind, RigidBody, RigidBodyDesc, SimulationParams,
};
use rigid3d::math::{Point, Pose, Real, Vector};
use rigid3d::pipeline::PhysicsWorld;
use rigid3d::shape::SharedCollider;

#[test]
fn hinge_swings_in_its_plane() {
    let mut world = PhysicsWorld::new(SimulationParams {
        gravity: Vector::new(0.0, -9.81, 0.0),
        ..SimulationParams::default()
    });
    let pivot = world.insert_body(RigidBody::new(Pose::identity(), None));
    let arm = world.insert_body(
        RigidBodyDesc::new(Some(SharedCollider::ball(0.25)))
            .translation(Vector::new(1.0, 0.0, 0.0))
            .density(1.0)
            .angvel(Vector::new(2.0, 1.0, 0.0))
            .build(),
    );
    let _ = world.insert_joint(HingeJoint::new(
        pivot,
        arm,
        Point::origin(),
        Point::new(-1.0, 0.0, 0.0),
        Vector::z(),
        Vector::z(),
    ));

    for _ in 0..360 {
        world.step();

        let body = world.body(arm).unwrap();
        let axis = body.local_to_global_vec(&Vector::z());
        let anchor = body.local_to_global(&Point::new(-1.0, 0.0, 0.0));
        assert!(axis.dot(&Vector::z()) > 0.99);
        assert!(anchor.coords.norm() < 0.05);
    }

    let body = world.body(arm).unwrap();
    assert_relative_eq!(body.position().z, 0.0, epsilon = 1.0e-2);
    assert_relative_eq!(body.position().norm(), 1.0, epsilon = 2.0e-2);
}

#[test]
fn chain_described_by_name() {
    let mut world = PhysicsWorld::new(SimulationParams {
        gravity: Vector::new(0.0, -9.81, 0.0),
        ..SimulationParams::default()
    });
    let link = SharedCollider::ball(0.2);
    let _ = world.insert_body(RigidBodyDesc::new(None).name("ceiling").build());

    for i in 0..3 {
        let _ = world.insert_body(
            RigidBodyDesc::new(Some(link.clone()))
                .name(format!("link{}", i))
                .translation(Vector::new(0.0, -0.25 - 0.5 * i as Real, 0.0))
                .density(1.0)
                .build(),
        );
    }

    let names = ["ceiling", "link0", "link1", "link2"];
    for pair in names.windows(2) {
        let _ = world.insert_joint_desc(&JointDesc {
            bodies: [pair[0].to_string(), pair[1].to_string()],
            kind: JointKind::Point {
                local_anchors: [
                    if pair[0] == "ceiling" {
                        Point::origin()
                    } else {
                        Point::new(0.0, -0.25, 0.0)
                    },
                    Point::new(0.0, 0.25, 0.0),
                ],
            },
        });
    }
    assert_eq!(world.joints().len(), 3);

    // Push the last link sideways and let the chain swing.
    let last = world.body_by_name("link2").unwrap();
    world.body_mut(last).unwrap().linvel = Vector::new(1.0, 0.0, 0.0);

    world.advance(2.0);

    for pair in names.windows(2).skip(1) {
        let upper = world.body(world.body_by_name(pair[0]).unwrap()).unwrap();
        let lower = world.body(world.body_by_name(pair[1]).unwrap()).unwrap();
        let a = upper.local_to_global(&Point::new(0.0, -0.25, 0.0));
        let b = lower.local_to_global(&Point::new(0.0, 0.25, 0.0));
        assert!((a - b).norm() < 0.05, "joint error: {}", (a - b).norm());
    }
}
