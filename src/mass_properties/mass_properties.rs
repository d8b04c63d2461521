use crate::math::{AngularInertia, Point, Real};

/// The geometric mass properties of a shape, for a uniform unit density.
///
/// The inertia tensor is expressed with regard to the origin of the shape's local frame, **not**
/// its center of mass. Multiplying `volume` and `inertia` by a density gives the actual mass and
/// inertia of a body made of that shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MassProperties {
    /// The volume of the shape.
    pub volume: Real,
    /// The center of mass of the shape, in its local frame.
    pub local_com: Point,
    /// The inertia tensor of the shape for a unit density, relative to its local origin.
    pub inertia: AngularInertia,
}

impl MassProperties {
    /// Initializes the mass properties from the given volume, center of mass and unit-density
    /// inertia tensor.
    pub fn new(volume: Real, local_com: Point, inertia: AngularInertia) -> Self {
        Self {
            volume,
            local_com,
            inertia,
        }
    }

    /// The mass properties of a shape with no volume.
    pub fn zero() -> Self {
        Self::new(0.0, Point::origin(), AngularInertia::zeros())
    }

    /// The inertia tensor of this shape for the given density.
    pub fn inertia_with_density(&self, density: Real) -> AngularInertia {
        self.inertia * density
    }

    /// The inertia tensor of this shape if its total mass is `mass`.
    pub fn inertia_with_mass(&self, mass: Real) -> AngularInertia {
        self.inertia * (mass / self.volume)
    }
}
