use crate::frame::Frame;

/// Per-frame work, split into the two phases the viewer guarantees an order
/// for: `update` always runs before `render` within one tick.
pub trait FrameHandler {
    fn update(&mut self, frame: Frame);
    fn render(&mut self, frame: Frame);
}

/// Explicit frame loop with ownership of the running flag.
///
/// The platform's frame driver calls [`Ticker::tick`] at its natural refresh
/// cadence; the ticker itself owns no timer. This replaces the pattern of a
/// callback re-scheduling itself, so start/stop and cancellation have a
/// single owner.
///
/// `stop` is idempotent: stopping an already-stopped ticker is a no-op.
#[derive(Debug)]
pub struct Ticker {
    frame: Frame,
    running: bool,
}

impl Ticker {
    pub fn new(dt_s: f64) -> Self {
        Self {
            frame: Frame::new(0, dt_s),
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Run one update-then-render cycle and advance the frame.
    ///
    /// Does nothing while stopped. Returns whether a frame ran, so drivers
    /// can decide whether to request another callback.
    pub fn tick(&mut self, handler: &mut impl FrameHandler) -> bool {
        if !self.running {
            return false;
        }
        let frame = self.frame;
        handler.update(frame);
        handler.render(frame);
        self.frame = frame.next();
        true
    }
}
