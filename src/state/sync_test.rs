use super::*;

#[test]
fn default_is_not_syncing() {
    assert!(!SyncState::default().syncing);
}

#[test]
fn busy_flag_round_trips() {
    let mut state = SyncState::default();
    state.syncing = true;
    assert!(state.syncing);
    state.syncing = false;
    assert!(!state.syncing);
}
