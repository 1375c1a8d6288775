use payloads::UserIdentity;
use yewdux::prelude::*;

use crate::auth::Session;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// Startup, before the stored token has been checked.
    #[default]
    Unknown,
    SignedOut,
    SignedIn(UserIdentity),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_session_bootstrap and sign in/out) ===
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::SignedIn(_))
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match &self.auth_state {
            AuthState::SignedIn(user) => Some(user),
            AuthState::Unknown | AuthState::SignedOut => None,
        }
    }

    /// Read-only view handed to protected pages.
    pub fn session(&self) -> Session {
        match &self.auth_state {
            AuthState::Unknown => Session::loading(),
            AuthState::SignedOut => Session::signed_out(),
            AuthState::SignedIn(user) => Session::signed_in(user.clone()),
        }
    }

    pub fn sign_in(&mut self, user: UserIdentity) {
        self.auth_state = AuthState::SignedIn(user);
    }

    pub fn sign_out(&mut self) {
        self.auth_state = AuthState::SignedOut;
    }
}
