//! Gravity of the fixed central body.
//!
//! The sun sits at the origin and never moves, so the acceleration on a
//! planet depends only on the planet's own position. No softening is applied;
//! the acceleration is singular at the origin and initial conditions are
//! validated to keep orbits away from it.

use crate::simulation::states::NVec2;

/// Inverse-square attraction toward the origin.
///
/// `mu` is the gravitational parameter `G * M` of the central body.
#[derive(Debug, Clone)]
pub struct CentralGravity {
    pub mu: f64,
}

impl CentralGravity {
    /// Acceleration felt at position `x` relative to the origin.
    ///
    /// `a = -mu / |x|^3 * x` — the negative coefficient points the vector
    /// back toward the origin. Undefined at `x = 0`: the result is non-finite
    /// and stays non-finite from then on.
    pub fn acceleration_at(&self, x: NVec2) -> NVec2 {
        let r = x.norm();

        // 1 / r^3, the factor in a = -mu * x / |x|^3
        let inv_r = r.recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        -self.mu * inv_r3 * x
    }
}
