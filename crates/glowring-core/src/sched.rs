/// Generation-counted admission control for the frame loop.
///
/// Animation-frame hosts may dispatch a callback that was already queued when
/// the loop got cancelled. Every `open` hands out a fresh token; a callback
/// whose token no longer matches falls through without rendering or
/// rescheduling. Opening while a loop is live implicitly invalidates the old
/// loop, which is what makes start-while-running a cancel-then-restart.
#[derive(Debug, Default)]
pub struct TickGate {
    generation: u64,
    running: bool,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new loop and return its admission token.
    pub fn open(&mut self) -> u64 {
        self.generation += 1;
        self.running = true;
        self.generation
    }

    /// Stop the loop. No token issued before this call is admitted again.
    pub fn close(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    /// Whether a tick carrying `token` may run and reschedule.
    pub fn admits(&self, token: u64) -> bool {
        self.running && token == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
