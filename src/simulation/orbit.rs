//! Initial-condition derivation for a launched planet.
//!
//! A planet always starts at `(distance, 0)`; only the velocity direction
//! uses the launch angle. The launch speed is the local circular speed scaled
//! by a factor, and the factor comes from one of two policies:
//!
//! - [`LaunchPolicy::SpeedFactor`] – a flat caller-supplied multiplier
//!   (e.g. 0.6 for a plunging ellipse, 1.0 for a circle),
//! - [`LaunchPolicy::VisViva`] – the exact factor for an elliptical orbit
//!   with a given semi-major axis, from the vis-viva equation
//!   `v^2 = mu * (2/r - 1/a)`.

use anyhow::{bail, Result};

use crate::simulation::states::NVec2;

/// How the launch speed relates to the local circular speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchPolicy {
    /// Multiply the circular speed by this constant.
    SpeedFactor(f64),
    /// Derive the factor from the vis-viva speed for an ellipse with this
    /// semi-major axis passing through the initial radius.
    VisViva { semi_major_axis: f64 },
}

/// Speed of a circular orbit of radius `r` around a body with gravitational
/// parameter `mu`.
pub fn circular_speed(mu: f64, r: f64) -> f64 {
    (mu / r).sqrt()
}

/// Compute the initial position and velocity for a planet launched from
/// `distance` along the +x axis at `angle_deg` degrees.
///
/// Rejects non-positive distances and semi-major axes; both would divide by
/// zero (or worse) inside the speed computation. A vis-viva radicand that
/// goes negative (r >= 2a, no bound ellipse through that radius) is not
/// caught here and yields NaN velocity.
pub fn launch_state(
    mu: f64,
    distance: f64,
    policy: LaunchPolicy,
    angle_deg: f64,
) -> Result<(NVec2, NVec2)> {
    if distance <= 0.0 {
        bail!("initial distance must be positive, got {distance}");
    }

    let position = NVec2::new(distance, 0.0);

    let v_circular = circular_speed(mu, distance);
    let speed_factor = match policy {
        LaunchPolicy::SpeedFactor(f) => f,
        LaunchPolicy::VisViva { semi_major_axis } => {
            if semi_major_axis <= 0.0 {
                bail!("semi-major axis must be positive, got {semi_major_axis}");
            }
            // v from the vis-viva equation, expressed as a ratio to the
            // circular speed at the same radius.
            let v = (mu * (2.0 / distance - 1.0 / semi_major_axis)).sqrt();
            v / circular_speed(mu, distance)
        }
    };

    let initial_speed = v_circular * speed_factor;

    let angle_rad = angle_deg.to_radians();
    let velocity = NVec2::new(
        initial_speed * angle_rad.cos(),
        initial_speed * angle_rad.sin(),
    );

    Ok((position, velocity))
}
