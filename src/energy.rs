use crate::body::Body;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::collections::HashMap;

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.norm_squared())
        .sum()
}

pub fn potential_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .combinations(2)
        .map(|pair| {
            let r = (pair[0].position - pair[1].position).norm();
            if r > 1e-9 {
                -pair[0].mass * pair[1].mass / r
            } else {
                0.0
            }
        })
        .sum()
}

pub fn total_energy(bodies: &[Body]) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies)
}

/// Tracks total energy over a run and records, per relative-drift threshold,
/// the first fraction of the run at which the drift exceeded it. The explicit
/// Euler update is not symplectic, so drift is expected; the thresholds make
/// it measurable.
#[derive(Debug, Clone)]
pub struct EnergyMonitor {
    initial_energy: f64,
    pub total_energy: Vec<f64>,
    pub thresholds: Vec<f64>,
    pub first_exceeded: HashMap<OrderedFloat<f64>, Option<f64>>,
}

impl EnergyMonitor {
    pub fn new(bodies: &[Body]) -> Self {
        let thresholds = vec![0.01, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0];
        let first_exceeded = thresholds.iter().map(|&t| (OrderedFloat(t), None)).collect();
        Self {
            initial_energy: total_energy(bodies),
            total_energy: Vec::new(),
            thresholds,
            first_exceeded,
        }
    }

    pub fn record(&mut self, bodies: &[Body], tick: usize, num_ticks: usize) {
        let current_energy = total_energy(bodies);
        self.total_energy.push(current_energy);
        for &t in &self.thresholds {
            if let Some(val) = self.first_exceeded.get_mut(&OrderedFloat(t)) {
                if val.is_none()
                    && (current_energy > self.initial_energy + self.initial_energy.abs() * t
                        || current_energy < self.initial_energy - self.initial_energy.abs() * t)
                {
                    *val = Some(tick as f64 / num_ticks as f64);
                }
            }
        }
    }

    pub fn initial_energy(&self) -> f64 {
        self.initial_energy
    }

    /// Standard deviation of the recorded total energy, a summary measure of
    /// how far the run wandered from conservation.
    pub fn drift_std_dev(&self) -> f64 {
        if self.total_energy.is_empty() {
            return 0.0;
        }
        let mean = self.total_energy.iter().sum::<f64>() / self.total_energy.len() as f64;
        let variance = self
            .total_energy
            .iter()
            .map(|val| (*val - mean).powi(2))
            .sum::<f64>()
            / self.total_energy.len() as f64;
        variance.sqrt()
    }
}
