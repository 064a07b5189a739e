use crate::body::Body;

/// Presentation boundary of the core. The system calls into this once per
/// body after its position update and once per frame after all bodies have
/// been processed; the core itself draws nothing and does no I/O.
pub trait Renderer {
    /// A body finished its position update this tick. The body exposes
    /// position, display size and kind/colour for marker rendering.
    fn on_body_moved(&mut self, _body: &Body) {}

    /// All bodies have been processed this tick. `bounds` is the system's
    /// cubic display bound, for axis extents.
    fn on_frame_complete(&mut self, _bounds: f64) {}
}

/// Renderer that discards every event. Used by headless runs and tests.
pub struct NoOpRenderer;

impl Renderer for NoOpRenderer {}
