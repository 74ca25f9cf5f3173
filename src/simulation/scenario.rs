//! Build a fully-initialized simulation scenario from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - the fixed central body and its gravity term
//! - system state (`System` with planets at t = 0)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems; tests drive it synchronously
//! through [`Scenario::step`] and [`Scenario::run`] instead.

use anyhow::{bail, Result};
use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::CentralGravity;
use crate::simulation::orbit::launch_state;
use crate::simulation::params::Parameters;
use crate::simulation::states::{CentralBody, OrbitingBody, System};

/// Bevy resource representing a fully-initialized simulation scenario.
///
/// This is the one owned handle to a running simulation: parameters, the sun,
/// its gravity term, and the mutable system state. There are no process-wide
/// singletons; whoever builds a `Scenario` owns it and decides how it is
/// driven (the Bevy frame loop, or a plain loop in a test).
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub central: CentralBody,
    pub gravity: CentralGravity,
    pub system: System,
}

impl Scenario {
    /// Map a [`ScenarioConfig`] into a runtime scenario.
    ///
    /// Resolves the derived config forms (time step, distance), derives each
    /// planet's launch state, and validates the degenerate inputs that would
    /// otherwise poison the arithmetic with NaN.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters {
            g: cfg.parameters.g,
            dt: cfg.parameters.dt.resolve(),
        };
        if parameters.dt <= 0.0 {
            bail!("time step must be positive, got {}", parameters.dt);
        }
        if cfg.central.mass <= 0.0 {
            bail!("central mass must be positive, got {}", cfg.central.mass);
        }
        if cfg.bodies.is_empty() {
            bail!("scenario has no orbiting bodies");
        }

        let central = CentralBody::new(parameters.g, cfg.central.mass);
        let gravity = CentralGravity { mu: central.mu() };

        // Bodies: map `BodyConfig` -> runtime `OrbitingBody`, deriving each
        // launch state from the configured policy
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let distance = bc.distance.resolve();
            let (x, v) = launch_state(central.mu(), distance, bc.launch.resolve(), bc.angle_deg)?;
            bodies.push(OrbitingBody::new(x, v, bc.mass));
        }

        // Initial system state: planets at t = 0
        let system = System { bodies, t: 0.0 };

        Ok(Self {
            parameters,
            central,
            gravity,
            system,
        })
    }

    /// Advance the simulation by one fixed-size step.
    pub fn step(&mut self) {
        super::integrator::euler_step(&mut self.system, &self.gravity, &self.parameters);
    }

    /// Advance the simulation by `steps` steps synchronously.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }
}
