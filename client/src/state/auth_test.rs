use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        image: None,
    }
}

#[test]
fn auth_state_default_no_user_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn pending_is_loading_and_logged_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn loaded_user_is_logged_in() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(state.is_logged_in());
}

#[test]
fn user_while_loading_is_not_logged_in_yet() {
    let state = AuthState { user: Some(user()), loading: true };
    assert!(!state.is_logged_in());
}

#[test]
fn signed_in_state_survives_hydration_handoff() {
    let state = AuthState { user: Some(user()), loading: false };
    let json = serde_json::to_string(&state).unwrap();
    let restored: AuthState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert!(restored.is_logged_in());
}
