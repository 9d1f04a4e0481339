use super::*;
use axum::http::Request;

use crate::state::test_helpers::test_user;

fn request_parts(user: Option<SessionUser>) -> Parts {
    let (mut parts, ()) = Request::new(()).into_parts();
    if let Some(user) = user {
        parts.extensions.insert(user);
    }
    parts
}

#[test]
fn signed_in_auth_state_carries_session_user() {
    let user = test_user("ada@example.com");
    let auth = signed_in_auth_state(&user);
    assert!(auth.is_logged_in());
    assert_eq!(
        auth.user,
        Some(User { id: user.id.to_string(), name: "ada".into(), email: "ada@example.com".into(), image: None })
    );
}

#[test]
fn session_context_seeds_auth_state_from_gated_request() {
    let user = test_user("ada@example.com");
    Owner::new().with(|| {
        provide_context(request_parts(Some(user.clone())));
        provide_session_context();
        let auth = use_context::<AuthState>().expect("auth state provided");
        assert!(auth.is_logged_in());
        assert_eq!(auth.user.map(|u| u.email), Some(user.email.clone()));
    });
}

#[test]
fn session_context_leaves_public_requests_pending() {
    Owner::new().with(|| {
        provide_context(request_parts(None));
        provide_session_context();
        assert_eq!(use_context::<AuthState>(), None);
    });
}

#[test]
fn session_context_without_request_parts_provides_nothing() {
    Owner::new().with(|| {
        provide_session_context();
        assert_eq!(use_context::<AuthState>(), None);
    });
}
