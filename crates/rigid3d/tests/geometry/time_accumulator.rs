use approx::assert_relative_eq;
use oorandom::Rand32;
use rigid3d::dynamics::{PointJoint, RigidBody, RigidBodyDesc, SimulationParams};
use rigid3d::math::{Point, Pose, Real, Vector};
use rigid3d::pipeline::PhysicsWorld;
use rigid3d::shape::SharedCollider;

const STEP: Real = 1.0 / 128.0;

fn scene() -> PhysicsWorld {
    scene_with_step(STEP)
}

fn scene_with_step(step: Real) -> PhysicsWorld {
    let mut world = PhysicsWorld::new(SimulationParams {
        gravity: Vector::new(0.0, -9.81, 0.0),
        max_step_size: step,
        ..SimulationParams::default()
    });

    let ball = SharedCollider::ball(0.5);
    let _ = world.insert_body(RigidBody::new(Pose::identity(), Some(ball.clone())));
    let _ = world.insert_body(
        RigidBodyDesc::new(Some(ball.clone()))
            .translation(Vector::new(0.2, 1.5, 0.0))
            .density(1.0)
            .build(),
    );
    let pivot = world.insert_body(RigidBody::new(
        Pose::from_translation(Vector::new(5.0, 3.0, 0.0)),
        None,
    ));
    let bob = world.insert_body(
        RigidBodyDesc::new(Some(ball))
            .translation(Vector::new(6.0, 3.0, 0.0))
            .density(1.0)
            .build(),
    );
    let _ = world.insert_joint(PointJoint::new(
        pivot,
        bob,
        Point::origin(),
        Point::new(-1.0, 0.0, 0.0),
    ));

    world
}

#[test]
fn irregular_time_steps_match_fixed_steps() {
    const NUM_STEPS: u32 = 64;

    let mut fixed = scene();
    for _ in 0..NUM_STEPS {
        fixed.advance(STEP);
    }

    // Random multiples of 1/512 summing to NUM_STEPS * STEP, all exactly representable.
    let mut irregular = scene();
    let mut rng = Rand32::new(5);
    let mut remaining = NUM_STEPS * 4;
    while remaining > 0 {
        let ticks = rng.rand_range(0..7).min(remaining);
        irregular.advance(ticks as Real / 512.0);
        remaining -= ticks;
    }

    assert_eq!(irregular.tick(), fixed.tick());
    assert_eq!(irregular.remaining_time(), 0.0);
    assert_eq!(fixed.remaining_time(), 0.0);

    for (a, b) in fixed.bodies().iter().zip(irregular.bodies()) {
        assert_relative_eq!(*a.position(), *b.position(), epsilon = 1.0e-6);
        assert_relative_eq!(*a.orientation(), *b.orientation(), epsilon = 1.0e-6);
        assert_relative_eq!(a.linvel, b.linvel, epsilon = 1.0e-6);
        assert_relative_eq!(a.angvel, b.angvel, epsilon = 1.0e-6);
    }
}

#[test]
fn short_steps_accumulate() {
    let mut world = scene();
    for _ in 0..3 {
        world.advance(STEP / 4.0);
    }
    assert_eq!(world.tick(), 0.0);
    assert_eq!(world.remaining_time(), STEP * 0.75);

    world.advance(STEP / 2.0);
    assert_eq!(world.tick(), STEP as f64);
    assert_eq!(world.remaining_time(), STEP / 4.0);
}

#[test]
fn inexact_time_steps_match_fixed_steps() {
    const NUM_STEPS: usize = 100;

    // Fractions of the default substep of 1/180s that do not add up exactly.
    let splits: [&[Real]; 4] = [
        &[0.1, 0.9],
        &[0.3, 0.7],
        &[0.25, 0.75],
        &[1.0 / 3.0, 2.0 / 3.0],
    ];
    let step = SimulationParams::default().max_step_size;

    let mut fixed = scene_with_step(step);
    for _ in 0..NUM_STEPS {
        fixed.advance(step);
    }

    for split in splits {
        let mut irregular = scene_with_step(step);
        for _ in 0..NUM_STEPS {
            for fraction in split {
                irregular.advance(fraction * step);
            }
        }

        assert_eq!(irregular.tick(), fixed.tick());
        assert!(irregular.remaining_time() < step * 1.0e-3);

        for (a, b) in fixed.bodies().iter().zip(irregular.bodies()) {
            assert_relative_eq!(*a.position(), *b.position(), epsilon = 1.0e-6);
            assert_relative_eq!(a.linvel, b.linvel, epsilon = 1.0e-6);
            assert_relative_eq!(a.angvel, b.angvel, epsilon = 1.0e-6);
        }
    }
}
