use crate::body::{Body, BodyKind, Color};
use crate::energy::EnergyMonitor;
use crate::render::Renderer;
use crate::system::System;
use crate::vector::Vec3;
use chrono::Utc;
use serde::Serialize;
use std::error::Error;

/// What the renderer boundary sees for one body on one tick.
#[derive(Debug, Clone)]
pub struct BodySnapshot {
    pub kind: BodyKind,
    pub position: Vec3,
    pub display_size: f64,
    pub color: Color,
}

/// A [`Renderer`] that keeps every frame it is shown, for CSV export or
/// assertions. Snapshots arrive in draw order, so in projection mode the
/// recorded order reflects the depth sort.
#[derive(Debug, Default)]
pub struct TrajectoryRecorder {
    current: Vec<BodySnapshot>,
    pub frames: Vec<Vec<BodySnapshot>>,
    pub bounds: Option<f64>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for TrajectoryRecorder {
    fn on_body_moved(&mut self, body: &Body) {
        self.current.push(BodySnapshot {
            kind: body.kind,
            position: body.position,
            display_size: body.display_size,
            color: body.color,
        });
    }

    fn on_frame_complete(&mut self, bounds: f64) {
        self.frames.push(std::mem::take(&mut self.current));
        self.bounds = Some(bounds);
    }
}

impl TrajectoryRecorder {
    pub fn save_to_csv(&self, filename: &str) -> Result<(), Box<dyn Error>> {
        let mut wtr = csv::Writer::from_path(filename)?;

        wtr.write_record([
            "Tick",
            "Object",
            "Kind",
            "Position X",
            "Position Y",
            "Position Z",
            "Display Size",
        ])?;

        for (tick, frame) in self.frames.iter().enumerate() {
            for (i, snapshot) in frame.iter().enumerate() {
                wtr.write_record(&[
                    tick.to_string(),
                    i.to_string(),
                    format!("{:?}", snapshot.kind),
                    snapshot.position.x.to_string(),
                    snapshot.position.y.to_string(),
                    snapshot.position.z.to_string(),
                    snapshot.display_size.to_string(),
                ])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct RunRecord {
    date: String,
    num_bodies: usize,
    num_ticks: usize,
    size: f64,
    projection_2d: bool,
    initial_energy: f64,
    energy_drift_std: f64,
    notes: String,
}

/// Append one summary row per run to a shared CSV log, writing the header
/// only when the file is first created.
pub fn export_run(
    file_path: &str,
    system: &System,
    num_ticks: usize,
    monitor: &EnergyMonitor,
    notes: &str,
) -> Result<(), Box<dyn Error>> {
    let record = RunRecord {
        date: Utc::now().to_rfc3339(),
        num_bodies: system.bodies.len(),
        num_ticks,
        size: system.size,
        projection_2d: system.projection_2d,
        initial_energy: monitor.initial_energy(),
        energy_drift_std: monitor.drift_std_dev(),
        notes: notes.to_string(),
    };

    let file_exists = std::path::Path::new(file_path).exists();
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(file_path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}
