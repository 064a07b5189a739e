// src/generate.rs

use crate::body::SUN_MASS;
use crate::system::System;
use crate::vector::Vec3;
use rand::Rng;
use rand_distr::Uniform;

/// Tangential velocity for a bound orbit around the central mass, from the
/// vis-viva relation with the gravitational constant folded to 1.
fn generate_orbital_velocity(relative_position: Vec3, central_mass: f64) -> Vec3 {
    let mut rng = rand::rng();
    let r_vec = relative_position;
    let r = r_vec.norm();

    // Treat this point as periapsis, so the semi-major axis is at least r
    let a = r / (1.0 - rng.random::<f64>());

    let speed = (central_mass * (2.0 / r - 1.0 / a)).sqrt();

    let tangent = if r_vec.xy().norm_squared() < 1e-16 {
        Vec3::x()
    } else {
        r_vec.cross(&Vec3::z())
    };

    speed * tangent.normalize()
}

/// Generate a position that is not too close to any existing one.
fn generate_unique_position(
    existing_positions: &[Vec3],
    bounds: f64,
    min_distance: f64,
) -> Option<Vec3> {
    let mut rng = rand::rng();
    let range = Uniform::new_inclusive(-bounds, bounds).unwrap();
    for _ in 0..200 {
        let position = Vec3::new(rng.sample(&range), rng.sample(&range), rng.sample(&range));
        if existing_positions
            .iter()
            .all(|existing| (position - *existing).norm() >= min_distance)
        {
            return Some(position);
        }
    }
    None
}

/// Build a system with a sun at the origin and `n_planets` planets on random
/// bound orbits around it, all inside the display bound. Returns `None` if a
/// planet position cannot be placed with enough separation.
pub fn generate_solar_system(size: f64, n_planets: u32) -> Option<System> {
    let mut rng = rand::rng();
    let bounds = size / 2.0;
    let min_distance = bounds / 10.0;

    let mut system = System::new(size, false);
    system
        .spawn_sun(SUN_MASS, Vec3::zeros(), Vec3::zeros())
        .ok()?;

    let mut placed = vec![Vec3::zeros()];
    for _ in 0..n_planets {
        let mass = rng.random_range(5.0..50.0);
        let position = generate_unique_position(&placed, bounds, min_distance)?;
        let velocity = generate_orbital_velocity(position, SUN_MASS);
        system.spawn_planet(mass, position, velocity).ok()?;
        placed.push(position);
    }

    Some(system)
}
