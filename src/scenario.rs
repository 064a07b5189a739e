//! Scenario configuration loaded from JSON.
//!
//! A scenario is the system bound plus the initial state of each body:
//!
//! ```json
//! {
//!   "size": 400.0,
//!   "projection_2d": false,
//!   "bodies": [
//!     { "kind": "sun", "position": [0.0, 0.0, 0.0], "velocity": [0.0, 0.0, 0.0] },
//!     { "kind": "planet", "position": [0.0, 120.0, 0.0], "velocity": [-9.0, 0.0, 0.0] },
//!     { "kind": "body", "mass": 100.0, "position": [0.0, 0.0, 0.0], "velocity": [1.0, 1.0, 1.0] }
//!   ]
//! }
//! ```
//!
//! `mass` may be omitted for suns (10 000) and planets (10). Plain bodies
//! must state a mass; leaving it out fails with `InvalidMass` when the
//! system is built.

use crate::body::BodyKind;
use crate::error::PhysicsError;
use crate::system::System;
use crate::vector::Vec3;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy)]
pub enum KindConfig {
    #[serde(rename = "sun")]
    Sun,

    #[serde(rename = "planet")]
    Planet,

    #[serde(rename = "body")]
    Body,
}

/// Initial state for a single body.
#[derive(Deserialize, Debug)]
pub struct BodySpec {
    pub kind: KindConfig,
    pub mass: Option<f64>,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

/// Top-level scenario configuration.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub size: f64,
    #[serde(default)]
    pub projection_2d: bool,
    pub bodies: Vec<BodySpec>,
}

/// Map a scenario into a runtime [`System`], preserving declaration order as
/// registration order.
pub fn build_system(cfg: &ScenarioConfig) -> Result<System, PhysicsError> {
    let mut system = System::new(cfg.size, cfg.projection_2d);
    for spec in &cfg.bodies {
        let position = Vec3::new(spec.position[0], spec.position[1], spec.position[2]);
        let velocity = Vec3::new(spec.velocity[0], spec.velocity[1], spec.velocity[2]);
        match spec.kind {
            KindConfig::Sun => {
                let mass = spec.mass.unwrap_or(BodyKind::Sun.default_mass());
                system.spawn_sun(mass, position, velocity)?;
            }
            KindConfig::Planet => {
                let mass = spec.mass.unwrap_or(BodyKind::Planet.default_mass());
                system.spawn_planet(mass, position, velocity)?;
            }
            KindConfig::Body => {
                let mass = spec.mass.unwrap_or(BodyKind::Generic.default_mass());
                system.spawn_body(mass, position, velocity)?;
            }
        }
    }
    Ok(system)
}
