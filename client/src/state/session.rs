//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the route guard on every navigation and read by any page that
//! needs the signed-in identity. The root `App` provides exactly one
//! [`SessionContext`] per rendered session; components obtain it through
//! context injection rather than a global lookup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;

/// The current user, or absence of one. Starts empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Shared handle to the session slot. Copies refer to the same slot.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext(RwSignal<SessionState>);

impl SessionContext {
    /// Create an empty, unregistered slot.
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    /// Create the session slot and register it for all descendants.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    /// The slot registered by the nearest [`SessionContext::provide`].
    ///
    /// # Panics
    ///
    /// Panics when called outside a tree rooted at `App`.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Current user; tracked when called inside a reactive scope.
    pub fn user(&self) -> Option<User> {
        self.0.with(|s| s.user.clone())
    }

    pub fn user_untracked(&self) -> Option<User> {
        self.0.with_untracked(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.with(SessionState::is_authenticated)
    }

    pub fn set_user(&self, user: Option<User>) {
        self.0.update(|s| s.user = user);
    }

    /// Teardown: forget the current user.
    pub fn clear(&self) {
        self.set_user(None);
    }

    /// Run `f` against the slot, notifying readers afterwards.
    ///
    /// Returns `None` if the owning app has already been disposed.
    pub fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
