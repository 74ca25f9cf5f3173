//! Fixed-step time integrator for the two-body system.
//!
//! A single semi-implicit (symplectic) Euler scheme, first order: per body,
//! velocity is kicked by the current acceleration, then position drifts with
//! the updated velocity. One force evaluation per body per step.

use super::forces::CentralGravity;
use super::params::Parameters;
use super::states::System;

/// Advance the system by one step of size `params.dt`.
///
/// Every body is advanced in collection order; order cannot matter here
/// because bodies only interact with the fixed central body, never with each
/// other. Updates positions, velocities, trails, and `sys.t` in place.
pub fn euler_step(sys: &mut System, gravity: &CentralGravity, params: &Parameters) {
    let dt = params.dt;

    // Kick then drift, per body:
    // v_n+1 = v_n + dt * a(x_n)
    // x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.advance(gravity, dt);
    }

    // Advance the system time by one full step
    sys.t += dt;
}
