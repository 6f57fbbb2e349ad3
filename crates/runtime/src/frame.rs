/// Deterministic frame metadata.
///
/// The primary timebase for the viewer. It is intentionally small and pure so
/// a sequence of frames can be recorded and replayed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (seconds).
    pub dt_s: f64,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self { index, dt_s }
    }

    /// Elapsed time at the start of the frame (seconds).
    pub fn time_s(self) -> f64 {
        self.index as f64 * self.dt_s
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}
