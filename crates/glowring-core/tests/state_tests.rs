// Host-side tests for the playback state machine, including the scheduler
// accounting scenarios it is meant to guard.

use glowring_core::{ErrorKind, PlaybackState, PlaybackStateMachine, TickGate};

#[test]
fn start_happy_path_reaches_active() {
    let mut m = PlaybackStateMachine::new();
    assert_eq!(m.state(), PlaybackState::Idle);

    assert!(m.begin_start());
    assert_eq!(m.state(), PlaybackState::RequestingAccess);

    assert!(m.acquisition_succeeded());
    assert_eq!(m.state(), PlaybackState::Active);
    assert_eq!(m.last_error(), None);

    assert!(m.stop());
    assert_eq!(m.state(), PlaybackState::Idle);
}

#[test]
fn stop_twice_is_a_noop_the_second_time() {
    let mut m = PlaybackStateMachine::new();
    m.begin_start();
    m.acquisition_succeeded();

    assert!(m.stop());
    assert!(!m.stop());
    assert_eq!(m.state(), PlaybackState::Idle);
}

#[test]
fn permission_denied_records_error_and_never_ticks() {
    let mut m = PlaybackStateMachine::new();
    let mut gate = TickGate::new();
    let mut ticks = 0;

    assert!(m.begin_start());
    assert_eq!(m.state(), PlaybackState::RequestingAccess);

    // acquisition resolves with a denial; the scheduler is never opened
    m.acquisition_failed(ErrorKind::PermissionDenied);
    assert_eq!(m.state(), PlaybackState::Error);
    assert_eq!(m.last_error(), Some(ErrorKind::PermissionDenied));

    for token in 0..100 {
        if gate.admits(token) {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 0);
    assert!(!gate.is_running());
}

#[test]
fn error_state_permits_retry() {
    let mut m = PlaybackStateMachine::new();
    m.begin_start();
    m.acquisition_failed(ErrorKind::DeviceUnavailable);
    assert_eq!(m.state(), PlaybackState::Error);

    // the error is retained for display until the retry succeeds
    assert!(m.begin_start());
    assert_eq!(m.state(), PlaybackState::RequestingAccess);
    assert_eq!(m.last_error(), Some(ErrorKind::DeviceUnavailable));

    assert!(m.acquisition_succeeded());
    assert_eq!(m.state(), PlaybackState::Active);
    assert_eq!(m.last_error(), None);
}

#[test]
fn stop_during_acquisition_discards_the_grant() {
    let mut m = PlaybackStateMachine::new();
    m.begin_start();

    // user stops while the permission prompt is still up
    assert!(m.stop());
    assert_eq!(m.state(), PlaybackState::Idle);

    // the late grant must not activate a session
    assert!(!m.acquisition_succeeded());
    assert_eq!(m.state(), PlaybackState::Idle);
}

#[test]
fn begin_start_collapses_double_starts() {
    let mut m = PlaybackStateMachine::new();
    assert!(m.begin_start());
    assert!(!m.begin_start());
    assert_eq!(m.state(), PlaybackState::RequestingAccess);

    m.acquisition_succeeded();
    assert!(!m.begin_start());
    assert_eq!(m.state(), PlaybackState::Active);
}

#[test]
fn late_failure_after_stop_leaves_idle() {
    let mut m = PlaybackStateMachine::new();
    m.begin_start();
    m.stop();

    m.acquisition_failed(ErrorKind::DecodeError);
    assert_eq!(m.state(), PlaybackState::Idle);
    assert_eq!(m.last_error(), None);
}
