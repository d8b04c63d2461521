//! Volume, center-of-mass and inertia of shapes.

pub use self::mass_properties::MassProperties;

mod mass_properties;
mod mass_properties_ball;
mod mass_properties_trimesh3d;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_trimesh3d::canonical_tetrahedron_covariance;
}
