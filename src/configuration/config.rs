//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – gravitational constant and time step
//! - [`CentralConfig`]    – the fixed sun
//! - [`BodyConfig`]       – initial state for each planet
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 0.0001186                   # gravitational constant
//!   dt:                            # either a plain number, or derived:
//!     seconds_per_year: 10.0
//!     steps_per_year: 80000
//!
//! central:
//!   mass: 333000.0
//!
//! bodies:
//!   - mass: 1.0
//!     distance:                    # either a plain number, or derived:
//!       scale: 5.0
//!       eccentricity: 0.0167       # distance = scale * (1 - eccentricity)
//!     angle_deg: 90.0              # launch angle, default 90
//!     launch:
//!       semi_major_axis: 5.0       # vis-viva policy
//!     # launch:
//!     #   speed_factor: 0.6        # flat-multiplier policy
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; the derived forms are resolved here.

use serde::Deserialize;

use crate::simulation::orbit::LaunchPolicy;

/// Time step, either given directly or derived from how many wall-clock
/// seconds one simulated year takes and how many steps it is divided into.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TimeStepConfig {
    Fixed(f64),
    PerYear {
        seconds_per_year: f64,
        steps_per_year: f64,
    },
}

impl TimeStepConfig {
    pub fn resolve(&self) -> f64 {
        match *self {
            TimeStepConfig::Fixed(dt) => dt,
            TimeStepConfig::PerYear {
                seconds_per_year,
                steps_per_year,
            } => seconds_per_year / steps_per_year,
        }
    }
}

/// Initial distance from the sun, either given directly or derived as the
/// perihelion of an ellipse: `scale * (1 - eccentricity)`.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum DistanceConfig {
    Fixed(f64),
    FromEccentricity { scale: f64, eccentricity: f64 },
}

impl DistanceConfig {
    pub fn resolve(&self) -> f64 {
        match *self {
            DistanceConfig::Fixed(d) => d,
            DistanceConfig::FromEccentricity {
                scale,
                eccentricity,
            } => scale * (1.0 - eccentricity),
        }
    }
}

/// Launch-speed policy, selected by which key is present.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum LaunchConfig {
    SpeedFactor { speed_factor: f64 },
    VisViva { semi_major_axis: f64 },
}

impl LaunchConfig {
    pub fn resolve(&self) -> LaunchPolicy {
        match *self {
            LaunchConfig::SpeedFactor { speed_factor } => LaunchPolicy::SpeedFactor(speed_factor),
            LaunchConfig::VisViva { semi_major_axis } => LaunchPolicy::VisViva { semi_major_axis },
        }
    }
}

/// Global physical and numerical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub dt: TimeStepConfig, // fixed step size
}

/// The fixed central body.
#[derive(Deserialize, Debug, Clone)]
pub struct CentralConfig {
    pub mass: f64,
}

/// Configuration for a single planet's initial state.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub mass: f64,
    pub distance: DistanceConfig,
    #[serde(default = "default_angle_deg")]
    pub angle_deg: f64,
    pub launch: LaunchConfig,
}

fn default_angle_deg() -> f64 {
    90.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // gravitational constant and time step
    pub central: CentralConfig,       // the fixed sun
    pub bodies: Vec<BodyConfig>,      // planets that define the initial state
}
