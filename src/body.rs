// src/body.rs

use crate::error::PhysicsError;
use crate::vector::{Vec3, VectorOps};
use std::fmt;

const DISPLAY_LOG_BASE: f64 = 1.3;
const MIN_DISPLAY_SIZE: f64 = 10.0;

pub const SUN_MASS: f64 = 10_000.0;
pub const PLANET_MASS: f64 = 10.0;

/// Marker colour handed to the presentation adapter, RGB in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const YELLOW: Color = Color { r: 1.0, g: 1.0, b: 0.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0 };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0 };
    pub const PINK: Color = Color { r: 1.0, g: 0.75, b: 0.8 };
}

/// Repeating palette assigned to planets in creation order.
pub const PLANET_PALETTE: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Tag distinguishing the central star from orbiting bodies. Rendering-only:
/// no physics differs between kinds beyond their default construction
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Planet,
    Generic,
}

impl BodyKind {
    /// Default mass applied when a scenario leaves the mass unspecified.
    /// Generic bodies have no default and must state one.
    pub fn default_mass(self) -> f64 {
        match self {
            BodyKind::Sun => SUN_MASS,
            BodyKind::Planet => PLANET_MASS,
            BodyKind::Generic => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub mass: f64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub display_size: f64,
    pub kind: BodyKind,
    pub color: Color,
}

impl Body {
    /// Mass must be positive; the display-size derivation rejects anything
    /// else with [`PhysicsError::InvalidMass`].
    pub fn new(
        kind: BodyKind,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
        color: Color,
    ) -> Result<Self, PhysicsError> {
        let display_size = display_size(mass)?;
        Ok(Body {
            mass,
            position,
            velocity,
            display_size,
            kind,
            color,
        })
    }

    /// Advance position by one unit time step of the current velocity.
    pub fn step_position(&mut self) {
        self.position += self.velocity;
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}(m={:.2e}, p=[{:.2e}, {:.2e}, {:.2e}], v=[{:.2e}, {:.2e}, {:.2e}])",
            self.kind,
            self.mass,
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z
        )
    }
}

/// Marker size for rendering: log base 1.3 of the mass, floored at 10.
pub fn display_size(mass: f64) -> Result<f64, PhysicsError> {
    if mass <= 0.0 {
        return Err(PhysicsError::InvalidMass { mass });
    }
    Ok(mass.log(DISPLAY_LOG_BASE).max(MIN_DISPLAY_SIZE))
}

/// Apply one pairwise gravitational impulse to both bodies.
///
/// G is folded to 1 and the time step is one tick, so the force feeds
/// straight into velocity. The pull on `first` is toward `second` and the
/// reaction is equal and opposite. Coincident bodies make the direction
/// degenerate and the call fails rather than skipping the pair.
pub fn accelerate_due_to_gravity(
    first: &mut Body,
    second: &mut Body,
) -> Result<(), PhysicsError> {
    let displacement = second.position - first.position;
    let distance = displacement.norm();
    let direction = displacement.try_unit()?;
    let force_magnitude = first.mass * second.mass / (distance * distance);
    let force = direction * force_magnitude;
    first.velocity += force.try_div(first.mass)?;
    second.velocity -= force.try_div(second.mass)?;
    Ok(())
}
