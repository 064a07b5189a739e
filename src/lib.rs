pub mod body;
pub mod energy;
pub mod error;
pub mod generate;
pub mod recorder;
pub mod render;
pub mod scenario;
pub mod system;
pub mod vector;

pub use body::{accelerate_due_to_gravity, display_size, Body, BodyKind, Color, PLANET_MASS, PLANET_PALETTE, SUN_MASS};
pub use energy::{kinetic_energy, potential_energy, total_energy, EnergyMonitor};
pub use error::PhysicsError;
pub use generate::generate_solar_system;
pub use recorder::{export_run, BodySnapshot, TrajectoryRecorder};
pub use render::{NoOpRenderer, Renderer};
pub use scenario::{build_system, BodySpec, KindConfig, ScenarioConfig};
pub use system::System;
pub use vector::{Vec3, VectorOps};
