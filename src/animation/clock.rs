//! Frame timing.

/// Turns absolute frame timestamps into per-frame deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous tick; zero on the first tick or if
    /// the host's clock went backwards.
    pub fn tick(&mut self, time_ms: f64) -> f64 {
        let delta = self
            .previous
            .map_or(0.0, |previous| (time_ms - previous).max(0.0));
        self.previous = Some(time_ms);
        delta
    }

    /// Start counting from `time_ms`.
    pub fn start(&mut self, time_ms: f64) {
        self.previous = Some(time_ms);
    }
}
