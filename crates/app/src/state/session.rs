use dioxus::prelude::*;
use shared_types::{User, UserRole};

/// The session proper: at most one authenticated user at a time, absence
/// represented explicitly. No validation of the user shape happens here —
/// the login flow is trusted to hand over what the server returned. Nothing
/// is persisted; a restart starts logged out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Replace the held user unconditionally. No merge semantics.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(User::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Reactive session handle provided through context.
///
/// Not a process-wide singleton: `App` provides one instance and tests can
/// build an isolated [`Session`] directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    inner: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(Session::default()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user().cloned()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.inner.read().role()
    }

    pub fn set_user(&mut self, user: User) {
        self.inner.write().set_user(user);
    }

    pub fn logout(&mut self) {
        self.inner.write().logout();
    }
}

/// Hook to access the session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
