use crate::error::ErrorKind;

/// Playback lifecycle of one visualizer instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    RequestingAccess,
    Active,
    Error,
}

impl PlaybackState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::RequestingAccess => "requesting-access",
            PlaybackState::Active => "active",
            PlaybackState::Error => "error",
        }
    }
}

/// Coordinates user start/stop intent with asynchronous source acquisition.
///
/// Transitions are the only place side effects hang off: callers inspect the
/// return value and start/stop the scheduler or close the source accordingly.
/// At most one source handle is live, and only while `Active`.
#[derive(Debug)]
pub struct PlaybackStateMachine {
    state: PlaybackState,
    last_error: Option<ErrorKind>,
}

impl Default for PlaybackStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackStateMachine {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Idle,
            last_error: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Most recent acquisition failure, retained for UI display until the
    /// next successful acquisition.
    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn is_active(&self) -> bool {
        self.state == PlaybackState::Active
    }

    /// Idle|Error -> RequestingAccess. Error is non-terminal: retrying is
    /// always permitted. Returns false while a session is already being
    /// acquired or running, so double-starts collapse into one.
    pub fn begin_start(&mut self) -> bool {
        match self.state {
            PlaybackState::Idle | PlaybackState::Error => {
                self.state = PlaybackState::RequestingAccess;
                log::debug!("playback: requesting access");
                true
            }
            PlaybackState::RequestingAccess | PlaybackState::Active => false,
        }
    }

    /// RequestingAccess -> Active. Returns false when the user stopped while
    /// the permission prompt was up; the caller must then release whatever it
    /// just acquired.
    pub fn acquisition_succeeded(&mut self) -> bool {
        if self.state != PlaybackState::RequestingAccess {
            return false;
        }
        self.state = PlaybackState::Active;
        self.last_error = None;
        log::debug!("playback: active");
        true
    }

    /// RequestingAccess -> Error, retaining the failure kind for display.
    pub fn acquisition_failed(&mut self, kind: ErrorKind) {
        if self.state != PlaybackState::RequestingAccess {
            return;
        }
        self.state = PlaybackState::Error;
        self.last_error = Some(kind);
        log::debug!("playback: acquisition failed: {kind}");
    }

    /// Active|RequestingAccess -> Idle, from explicit stop or natural end of
    /// signal. Idempotent: a second call is a no-op. Returns true when a live
    /// session was actually torn down (scheduler stop, source close, field
    /// discard fall on the caller).
    pub fn stop(&mut self) -> bool {
        match self.state {
            PlaybackState::Active | PlaybackState::RequestingAccess => {
                self.state = PlaybackState::Idle;
                log::debug!("playback: idle");
                true
            }
            PlaybackState::Idle | PlaybackState::Error => false,
        }
    }
}
