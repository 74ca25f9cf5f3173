//! Core state types for the two-body simulation.
//!
//! Defines the bodies and the system container:
//! - `CentralBody` – the fixed sun at the origin
//! - `OrbitingBody` – a planet with position/velocity state and its trail
//! - `System` – the list of planets and the current simulation time `t`
//!
//! The central body never moves; planets feel its gravity but not each
//! other's.

use nalgebra::Vector2;

use crate::simulation::forces::CentralGravity;

pub type NVec2 = Vector2<f64>;

/// Immovable mass pinned to the coordinate origin.
///
/// Constructed once from the gravitational constant and a mass; exposes the
/// gravitational parameter `mu = G * mass` that every orbit computation uses.
#[derive(Debug, Clone)]
pub struct CentralBody {
    mass: f64, // mass
    mu: f64,   // gravitational parameter G * mass
}

impl CentralBody {
    pub fn new(g: f64, mass: f64) -> Self {
        Self { mass, mu: g * mass }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Always at the origin.
    pub fn position(&self) -> NVec2 {
        NVec2::zeros()
    }
}

/// A planet orbiting the central body.
///
/// Fields are private: the integrator mutates state through [`advance`],
/// everything else (the viewer in particular) reads through the accessors.
///
/// [`advance`]: OrbitingBody::advance
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    x: NVec2,          // position
    v: NVec2,          // velocity
    m: f64,            // mass (unused by the point-mass force, kept for display scaling)
    trail: Vec<NVec2>, // past positions, one per step, never pruned
}

impl OrbitingBody {
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self {
            x,
            v,
            m,
            trail: Vec::new(),
        }
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Accumulated trajectory, oldest point first.
    pub fn trail(&self) -> &[NVec2] {
        &self.trail
    }

    /// Advance this body by one semi-implicit Euler step.
    ///
    /// Velocity is updated first, then position from the already-updated
    /// velocity. The ordering is what makes the scheme symplectic; do not
    /// swap the two updates.
    pub fn advance(&mut self, gravity: &CentralGravity, dt: f64) {
        let a = gravity.acceleration_at(self.x);
        self.v += a * dt;
        self.x += self.v * dt;
        self.trail.push(self.x);
    }
}

/// The full mutable simulation state: planets in update/draw order plus the
/// current time.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<OrbitingBody>, // planets, insertion order = update/draw order
    pub t: f64,                    // time
}
