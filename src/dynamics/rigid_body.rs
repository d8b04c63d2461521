use crate::bounding_volume::Aabb;
use crate::math::{AngVector, AngularInertia, HomogeneousMatrix, Matrix, Point, Pose, Real, Vector};
use crate::shape::SharedCollider;
use crate::utils;
use na::{Rotation3, UnitQuaternion};

/// A rigid body: a pose, velocities, mass properties and an optional collider.
///
/// A zero inverse mass (resp. inverse inertia) means the body cannot be translated (resp.
/// rotated) by impulses. Newly created bodies are immovable until a mass and an inertia are
/// assigned.
#[derive(Clone, Debug)]
pub struct RigidBody {
    name: Option<String>,
    collider: Option<SharedCollider>,
    pose: Pose,
    /// The linear velocity of this body.
    pub linvel: Vector,
    /// The angular velocity of this body, in world space.
    pub angvel: AngVector,
    /// The friction coefficient of this body.
    pub friction: Real,
    /// The restitution coefficient of this body.
    pub restitution: Real,
    mass: Real,
    inv_mass: Real,
    local_inv_inertia: AngularInertia,
    world_inv_inertia: AngularInertia,
    transform: HomogeneousMatrix,
    physics_aabb: Aabb,
}

impl RigidBody {
    /// The friction coefficient of new bodies.
    pub const DEFAULT_FRICTION: Real = 0.5;
    /// The restitution coefficient of new bodies.
    pub const DEFAULT_RESTITUTION: Real = 0.3;

    /// Creates an immovable body at rest.
    pub fn new(pose: Pose, collider: Option<SharedCollider>) -> Self {
        let mut result = Self {
            name: None,
            collider,
            pose,
            linvel: Vector::zeros(),
            angvel: AngVector::zeros(),
            friction: Self::DEFAULT_FRICTION,
            restitution: Self::DEFAULT_RESTITUTION,
            mass: 0.0,
            inv_mass: 0.0,
            local_inv_inertia: AngularInertia::zeros(),
            world_inv_inertia: AngularInertia::zeros(),
            transform: HomogeneousMatrix::identity(),
            physics_aabb: Aabb::new_invalid(),
        };
        result.update_transform();
        result
    }

    /// Sets the name of this body.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name of this body, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The collider attached to this body.
    pub fn collider(&self) -> Option<&SharedCollider> {
        self.collider.as_ref()
    }

    /// The pose of this body.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// The world-space position of the origin of this body.
    #[inline]
    pub fn position(&self) -> &Vector {
        &self.pose.translation
    }

    /// The rotation matrix mapping local directions to world directions.
    #[inline]
    pub fn orientation(&self) -> &Matrix {
        &self.pose.rotation
    }

    /// Moves this body to `position`.
    pub fn set_position(&mut self, position: Vector) {
        self.pose.translation = position;
        self.update_transform();
    }

    /// Sets the orientation of this body. `orientation` must be a rotation matrix.
    pub fn set_orientation(&mut self, orientation: Matrix) {
        self.pose.rotation = orientation;
        self.update_world_inv_inertia();
        self.update_transform();
    }

    /// The homogeneous matrix mapping local points to world points.
    #[inline]
    pub fn transform(&self) -> &HomogeneousMatrix {
        &self.transform
    }

    /// The world-space bounding box of the collider of this body.
    ///
    /// Invalid if this body has no collider.
    #[inline]
    pub fn physics_aabb(&self) -> &Aabb {
        &self.physics_aabb
    }

    /// The mass of this body. Zero for bodies without mass, `-1` for bodies made infinitely
    /// heavy with [`RigidBody::set_infinite_mass`].
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The inverse mass of this body. Zero if it cannot be translated by impulses.
    #[inline]
    pub fn inv_mass(&self) -> Real {
        self.inv_mass
    }

    /// The inverse inertia tensor of this body, in its local frame.
    #[inline]
    pub fn local_inv_inertia(&self) -> &AngularInertia {
        &self.local_inv_inertia
    }

    /// The inverse inertia tensor of this body, in world space.
    #[inline]
    pub fn world_inv_inertia(&self) -> &AngularInertia {
        &self.world_inv_inertia
    }

    /// Sets the mass of this body. The inertia is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `mass` is not positive.
    pub fn set_mass(&mut self, mass: Real) {
        assert!(mass > 0.0, "The mass of a rigid body must be positive.");
        self.mass = mass;
        self.inv_mass = utils::inv(mass);
    }

    /// Sets the mass of this body from the volume of its collider.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not positive or if this body has no collider.
    pub fn set_density(&mut self, density: Real) {
        assert!(density > 0.0, "The density of a rigid body must be positive.");
        let volume = self.collider_volume();
        self.mass = density * volume;
        self.inv_mass = utils::inv(self.mass);
    }

    /// Makes this body impossible to translate by impulses.
    pub fn set_infinite_mass(&mut self) {
        self.mass = -1.0;
        self.inv_mass = 0.0;
    }

    /// Sets the inertia of this body to the inertia of its collider with a total mass `mass`.
    ///
    /// # Panics
    ///
    /// Panics if `mass` is not positive or if this body has no collider.
    pub fn set_inertia_mass(&mut self, mass: Real) {
        assert!(mass > 0.0, "The mass of a rigid body must be positive.");
        let volume = self.collider_volume();
        let inertia = self.collider_inertia();
        self.set_inertia(inertia * (mass / volume));
    }

    /// Sets the inertia of this body to the inertia of its collider with a uniform density.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not positive or if this body has no collider.
    pub fn set_inertia_density(&mut self, density: Real) {
        assert!(density > 0.0, "The density of a rigid body must be positive.");
        let inertia = self.collider_inertia();
        self.set_inertia(inertia * density);
    }

    /// Sets the local inertia tensor of this body.
    ///
    /// A singular tensor makes the body impossible to rotate by impulses.
    pub fn set_inertia(&mut self, inertia: AngularInertia) {
        self.local_inv_inertia = utils::inv_matrix(&inertia);
        self.update_world_inv_inertia();
    }

    /// Makes this body impossible to rotate by impulses.
    pub fn set_infinite_inertia(&mut self) {
        self.local_inv_inertia = AngularInertia::zeros();
        self.world_inv_inertia = AngularInertia::zeros();
    }

    /// The world-space velocity of the point located at `offset` from the origin of this body.
    #[inline]
    pub fn velocity_at(&self, offset: &Vector) -> Vector {
        self.linvel + self.angvel.cross(offset)
    }

    /// Advances this body by `dt` seconds.
    ///
    /// Gravity only affects bodies with a finite mass. The orientation is re-orthonormalized
    /// after each rotation.
    pub fn integrate(&mut self, gravity: &Vector, dt: Real) {
        if self.inv_mass != 0.0 {
            self.linvel += gravity * dt;
        }

        self.pose.translation += self.linvel * dt;

        let angle = self.angvel.norm() * dt;
        if angle != 0.0 {
            let rotation = Rotation3::new(self.angvel * dt);
            self.pose.rotation = orthonormalize(&(rotation.matrix() * self.pose.rotation));
            self.update_world_inv_inertia();
        }

        self.update_transform();
    }

    /// Converts a point from the local frame of this body to world space.
    #[inline]
    pub fn local_to_global(&self, pt: &Point) -> Point {
        self.pose.transform_point(pt)
    }

    /// Converts a world-space point to the local frame of this body.
    #[inline]
    pub fn global_to_local(&self, pt: &Point) -> Point {
        self.pose.inverse_transform_point(pt)
    }

    /// Rotates a direction from the local frame of this body to world space.
    #[inline]
    pub fn local_to_global_vec(&self, v: &Vector) -> Vector {
        self.pose.transform_vector(v)
    }

    /// Rotates a world-space direction to the local frame of this body.
    #[inline]
    pub fn global_to_local_vec(&self, v: &Vector) -> Vector {
        self.pose.inverse_transform_vector(v)
    }

    fn collider_volume(&self) -> Real {
        match &self.collider {
            Some(collider) => collider.volume(),
            None => panic!("Cannot derive mass properties of a rigid body without collider."),
        }
    }

    fn collider_inertia(&self) -> AngularInertia {
        match &self.collider {
            Some(collider) => collider.inertia(),
            None => panic!("Cannot derive mass properties of a rigid body without collider."),
        }
    }

    fn update_world_inv_inertia(&mut self) {
        let rot = &self.pose.rotation;
        self.world_inv_inertia = rot * self.local_inv_inertia * rot.transpose();
    }

    fn update_transform(&mut self) {
        self.transform = self.pose.to_homogeneous();

        if let Some(collider) = &self.collider {
            self.physics_aabb = collider.compute_aabb(&self.pose);
        }
    }
}

fn orthonormalize(rotation: &Matrix) -> Matrix {
    let rotation = Rotation3::from_matrix_unchecked(*rotation);
    UnitQuaternion::from_rotation_matrix(&rotation)
        .to_rotation_matrix()
        .into_inner()
}

/// How the mass of a body described by a [`RigidBodyDesc`] is determined.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MassSpec {
    /// An explicit total mass.
    Mass(Real),
    /// A uniform density, multiplied by the collider volume.
    Density(Real),
}

/// A declarative description of a rigid body.
///
/// Mass properties are applied by [`RigidBodyDesc::build`]:
/// - if `moveable`, the mass is set from `mass_spec`;
/// - if the body has a collider and is `rotatable`, the inertia is derived from the collider
///   with the same mass or density.
///
/// Without `mass_spec`, the body is immovable.
#[derive(Clone, Debug)]
pub struct RigidBodyDesc {
    /// The name used to look the body up.
    pub name: Option<String>,
    /// The collider of the body.
    pub collider: Option<SharedCollider>,
    /// The initial pose.
    pub pose: Pose,
    /// The initial linear velocity.
    pub linvel: Vector,
    /// The initial angular velocity.
    pub angvel: AngVector,
    /// The mass or density of the body.
    pub mass_spec: Option<MassSpec>,
    /// Can impulses translate the body?
    pub moveable: bool,
    /// Can impulses rotate the body?
    pub rotatable: bool,
    /// Overrides the default friction coefficient.
    pub friction: Option<Real>,
    /// Overrides the default restitution coefficient.
    pub restitution: Option<Real>,
}

impl Default for RigidBodyDesc {
    fn default() -> Self {
        Self {
            name: None,
            collider: None,
            pose: Pose::identity(),
            linvel: Vector::zeros(),
            angvel: AngVector::zeros(),
            mass_spec: None,
            moveable: true,
            rotatable: true,
            friction: None,
            restitution: None,
        }
    }
}

impl RigidBodyDesc {
    /// A description of a body with the given collider.
    pub fn new(collider: Option<SharedCollider>) -> Self {
        Self {
            collider,
            ..Default::default()
        }
    }

    /// Sets the name of the body.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the initial position of the body.
    pub fn translation(mut self, translation: Vector) -> Self {
        self.pose.translation = translation;
        self
    }

    /// Sets the initial orientation of the body.
    pub fn rotation(mut self, rotation: Matrix) -> Self {
        self.pose.rotation = rotation;
        self
    }

    /// Sets the initial linear velocity of the body.
    pub fn linvel(mut self, linvel: Vector) -> Self {
        self.linvel = linvel;
        self
    }

    /// Sets the initial angular velocity of the body.
    pub fn angvel(mut self, angvel: AngVector) -> Self {
        self.angvel = angvel;
        self
    }

    /// Sets the total mass of the body.
    pub fn mass(mut self, mass: Real) -> Self {
        self.mass_spec = Some(MassSpec::Mass(mass));
        self
    }

    /// Sets the density of the body.
    pub fn density(mut self, density: Real) -> Self {
        self.mass_spec = Some(MassSpec::Density(density));
        self
    }

    /// Sets whether impulses can translate the body.
    pub fn moveable(mut self, moveable: bool) -> Self {
        self.moveable = moveable;
        self
    }

    /// Sets whether impulses can rotate the body.
    pub fn rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    /// Sets the friction coefficient of the body.
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = Some(friction);
        self
    }

    /// Sets the restitution coefficient of the body.
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = Some(restitution);
        self
    }

    /// Builds the described body.
    ///
    /// # Panics
    ///
    /// Panics if the mass or density is not positive, or if a density is given to a body
    /// without collider.
    pub fn build(&self) -> RigidBody {
        let mut body = RigidBody::new(self.pose, self.collider.clone());
        body.name = self.name.clone();
        body.linvel = self.linvel;
        body.angvel = self.angvel;

        let has_collider = body.collider.is_some();

        match self.mass_spec {
            Some(MassSpec::Mass(mass)) => {
                if self.moveable {
                    body.set_mass(mass);
                }
                if has_collider && self.rotatable {
                    body.set_inertia_mass(mass);
                }
            }
            Some(MassSpec::Density(density)) => {
                if self.moveable {
                    body.set_density(density);
                }
                if has_collider && self.rotatable {
                    body.set_inertia_density(density);
                }
            }
            None => {}
        }

        if let Some(friction) = self.friction {
            body.friction = friction;
        }
        if let Some(restitution) = self.restitution {
            body.restitution = restitution;
        }

        body
    }
}
