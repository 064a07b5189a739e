use crate::body::{self, Body, BodyKind, Color, PLANET_PALETTE};
use crate::error::PhysicsError;
use crate::render::Renderer;
use crate::vector::Vec3;

/// Owns the ordered collection of bodies and drives the two per-tick passes:
/// the pairwise interaction pass and the move/draw pass.
///
/// `size` is the cubic simulation/display bound. The core only stores it and
/// hands it to the renderer each frame; no physics depends on it.
#[derive(Debug, Clone)]
pub struct System {
    pub size: f64,
    pub projection_2d: bool,
    pub bodies: Vec<Body>,
    palette_cursor: usize,
}

impl System {
    pub fn new(size: f64, projection_2d: bool) -> Self {
        Self {
            size,
            projection_2d,
            bodies: Vec::new(),
            palette_cursor: 0,
        }
    }

    /// Append a body, returning its registration index. Duplicate
    /// registration is a caller error and is not guarded here.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Register a plain body with an explicit mass.
    pub fn spawn_body(
        &mut self,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
    ) -> Result<usize, PhysicsError> {
        let body = Body::new(BodyKind::Generic, mass, position, velocity, Color::PINK)?;
        Ok(self.add_body(body))
    }

    /// Register a sun-kind body.
    pub fn spawn_sun(
        &mut self,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
    ) -> Result<usize, PhysicsError> {
        let body = Body::new(BodyKind::Sun, mass, position, velocity, Color::YELLOW)?;
        Ok(self.add_body(body))
    }

    /// Register a planet-kind body. Planets take the next colour from the
    /// repeating palette; the cursor lives on the system, advancing once per
    /// planet spawned.
    pub fn spawn_planet(
        &mut self,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
    ) -> Result<usize, PhysicsError> {
        let color = PLANET_PALETTE[self.palette_cursor % PLANET_PALETTE.len()];
        self.palette_cursor += 1;
        let body = Body::new(BodyKind::Planet, mass, position, velocity, color)?;
        Ok(self.add_body(body))
    }

    /// Evaluate gravity for every unordered pair (i, j) with i < j exactly
    /// once: no self-pairs, no double-counting. Any degenerate pair aborts
    /// the pass.
    pub fn calculate_all_body_interactions(&mut self) -> Result<(), PhysicsError> {
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail.iter_mut() {
                body::accelerate_due_to_gravity(first, second)?;
            }
        }
        Ok(())
    }

    /// Move every body one step and report it to the renderer, then close
    /// the frame.
    ///
    /// In 2D-projection mode the sequence is first sorted ascending by the x
    /// component of position so bodies farther along the viewing axis draw
    /// first. Without projection, bodies are processed in registration order.
    pub fn update_all<R: Renderer>(&mut self, renderer: &mut R) {
        if self.projection_2d {
            self.bodies.sort_by(|a, b| {
                a.position
                    .x
                    .partial_cmp(&b.position.x)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        for body in &mut self.bodies {
            body.step_position();
            renderer.on_body_moved(body);
        }
        renderer.on_frame_complete(self.size);
    }

    /// One full simulation tick: the interaction pass, then the move/draw
    /// pass. Single-body demos skip the interaction pass by calling
    /// [`System::update_all`] directly, so a lone body drifts at constant
    /// velocity.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), PhysicsError> {
        self.calculate_all_body_interactions()?;
        self.update_all(renderer);
        Ok(())
    }
}
