use dioxus::prelude::*;
use shared_types::{can_see_admin_features, User};

/// Global authentication state.
///
/// Stands in for the auth collaborator: pages only read the user and call
/// `logout`; how a session is established is outside this crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: User) {
        tracing::info!(user = %user.name, role = %user.role, "signed in");
        self.current_user.set(Some(user));
    }

    /// End the session. Redirecting is left to the caller.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.read().as_ref() {
            tracing::info!(user = %user.name, "signed out");
        }
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook returning the signed-in user.
///
/// Only call below `AuthGuard`, which guarantees a user is present; outside
/// it an anonymous default user is returned.
pub fn use_current_user() -> User {
    let auth = use_auth();
    let user = auth.current_user.read().clone();
    user.unwrap_or_default()
}

/// Hook to check if the current user may see admin-only features.
pub fn use_can_see_admin_features() -> bool {
    let auth = use_auth();
    let binding = auth.current_user.read();
    let allowed = binding.as_ref().map(can_see_admin_features).unwrap_or(false);
    allowed
}
