pub mod configuration;
pub mod simulation;
pub mod visualization;

pub use simulation::forces::CentralGravity;
pub use simulation::integrator::euler_step;
pub use simulation::orbit::{circular_speed, launch_state, LaunchPolicy};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::states::{CentralBody, NVec2, OrbitingBody, System};

pub use configuration::config::{
    BodyConfig, CentralConfig, DistanceConfig, LaunchConfig, ParametersConfig, ScenarioConfig,
    TimeStepConfig,
};

pub use visualization::vis2d::run_2d;
