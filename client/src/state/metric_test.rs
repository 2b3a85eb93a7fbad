use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn metric_state_default_is_loading_without_fetch() {
    let state = MetricState::default();
    assert_eq!(state.phase, MetricPhase::Loading);
    assert!(!state.fetch_started);
}

// =============================================================
// begin_fetch
// =============================================================

#[test]
fn begin_fetch_claims_exactly_once() {
    let mut state = MetricState::default();
    let claims = (0..5).filter(|_| state.begin_fetch()).count();
    assert_eq!(claims, 1);
    assert!(state.fetch_started);
}

#[test]
fn separate_mounts_each_claim_their_own_fetch() {
    let mut first = MetricState::default();
    let mut second = MetricState::default();
    assert!(first.begin_fetch());
    assert!(second.begin_fetch());
}

#[test]
fn begin_fetch_leaves_phase_loading() {
    let mut state = MetricState::default();
    state.begin_fetch();
    assert_eq!(state.phase, MetricPhase::Loading);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_success_moves_to_ready() {
    let mut state = MetricState::default();
    state.resolve(Ok(42));
    assert_eq!(state.phase, MetricPhase::Ready { value: 42 });
}

#[test]
fn resolve_status_failure_moves_to_error() {
    let mut state = MetricState::default();
    state.resolve(Err(MetricError::Status(403)));
    assert_eq!(
        state.phase,
        MetricPhase::Error { message: "request failed: 403".to_owned() }
    );
}

#[test]
fn resolve_transport_failure_moves_to_error() {
    let mut state = MetricState::default();
    state.resolve(Err(MetricError::Transport("network down".to_owned())));
    assert!(matches!(state.phase, MetricPhase::Error { .. }));
}

#[test]
fn ready_is_terminal() {
    let mut state = MetricState::default();
    state.resolve(Ok(7));
    state.resolve(Err(MetricError::Status(500)));
    state.resolve(Ok(8));
    assert_eq!(state.phase, MetricPhase::Ready { value: 7 });
}

#[test]
fn error_is_terminal() {
    let mut state = MetricState::default();
    state.resolve(Err(MetricError::Unavailable));
    state.resolve(Ok(99));
    assert!(matches!(state.phase, MetricPhase::Error { .. }));
}
