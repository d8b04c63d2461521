use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Point, Real};
use na::RealField;

impl MassProperties {
    /// Computes the mass properties of a ball of the given radius.
    ///
    /// The inertia of a solid sphere of unit density is `2/5 · volume · r²` along every axis.
    pub fn from_ball(radius: Real) -> Self {
        let volume = Real::pi() * radius * radius * radius * 4.0 / 3.0;
        let i = volume * radius * radius * 2.0 / 5.0;

        Self::new(volume, Point::origin(), AngularInertia::identity() * i)
    }
}
