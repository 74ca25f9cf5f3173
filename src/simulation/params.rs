//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds the runtime settings:
//! - the gravitational constant `g`,
//! - the fixed integration step size `dt`.
//!
//! Both are set once when the scenario is built and never change afterwards.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,  // gravitational constant
    pub dt: f64, // fixed step size
}
