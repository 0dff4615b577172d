use super::*;
use leptos::prelude::Owner;

fn ann() -> User {
    User { id: 1, name: "Ann".to_owned(), avatar: None }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_has_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_with_user_is_authenticated() {
    let state = SessionState { user: Some(ann()) };
    assert!(state.is_authenticated());
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn context_starts_empty() {
    let owner = Owner::new();
    owner.with(|| {
        let session = SessionContext::provide();
        assert_eq!(session.user_untracked(), None);
        assert!(!session.is_authenticated());
    });
}

#[test]
fn expect_returns_the_provided_slot() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = SessionContext::provide();
        provided.set_user(Some(ann()));

        let looked_up = SessionContext::expect();
        assert_eq!(looked_up.user_untracked(), Some(ann()));

        looked_up.clear();
        assert_eq!(provided.user_untracked(), None);
    });
}

#[test]
fn separate_sessions_do_not_share_state() {
    let first = Owner::new();
    let second = Owner::new();
    let a = first.with(SessionContext::provide);
    let b = second.with(SessionContext::provide);

    a.set_user(Some(ann()));

    assert_eq!(a.user_untracked(), Some(ann()));
    assert_eq!(b.user_untracked(), None);
}

#[test]
fn update_returns_closure_result() {
    let owner = Owner::new();
    owner.with(|| {
        let session = SessionContext::provide();
        let was_authenticated = session.update(|s| {
            let before = s.is_authenticated();
            s.user = Some(ann());
            before
        });
        assert_eq!(was_authenticated, Some(false));
        assert!(session.user_untracked().is_some());
    });
}
