use crate::math::{Point, Real};
use crate::shape::Ball;
use crate::transformation::sweep_surface;
use na::{Point2, RealField};

impl Ball {
    /// Discretize the boundary of this ball as a triangle-mesh.
    ///
    /// The ball is swept from a half-circle profile with `nphi_subdiv` subdivisions, around the
    /// `y` axis with `ntheta_subdiv` subdivisions.
    pub fn to_trimesh(&self, ntheta_subdiv: u32, nphi_subdiv: u32) -> (Vec<Point>, Vec<[u32; 3]>) {
        let dphi = Real::pi() / nphi_subdiv as Real;
        let profile: Vec<_> = (0..=nphi_subdiv)
            .map(|i| {
                let (sin, cos) = (dphi * i as Real).sin_cos();
                Point2::new(self.radius * sin, -self.radius * cos)
            })
            .collect();

        sweep_surface(&profile, ntheta_subdiv)
    }
}
