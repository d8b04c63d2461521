use crate::math::{Real, Vector};

/// Parameters shared by every substep of a simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SimulationParams {
    /// The acceleration applied to every body with a finite mass.
    ///
    /// Default: zero.
    pub gravity: Vector,
    /// The fraction of positional error fed back into the velocity targets of each constraint.
    ///
    /// Default: `0.2`.
    pub baumgarte_factor: Real,
    /// The length of a single fixed substep, in seconds.
    ///
    /// Default: `1.0 / 180.0`.
    pub max_step_size: Real,
    /// The number of passes over all the joints and contacts per substep.
    ///
    /// Default: `8`.
    pub solver_iterations: usize,
}

impl SimulationParams {
    /// The Baumgarte bias factor applied to positional errors during a substep of length `dt`.
    #[inline]
    pub fn erp_inv_dt(&self, dt: Real) -> Real {
        self.baumgarte_factor / dt
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: Vector::zeros(),
            baumgarte_factor: 0.2,
            max_step_size: 1.0 / 180.0,
            solver_iterations: 8,
        }
    }
}
