//! Session view and the access decision for protected pages.

use payloads::UserIdentity;

use crate::Route;
use crate::navigation::Navigate;

const ACCESS_TOKEN_KEY: &str = "booking.access_token";

/// What a protected page can know about authentication: the signed-in user
/// if any, and whether the session is still being resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub is_loading: bool,
}

impl Session {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn signed_in(user: UserIdentity) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }
}

/// Outcome of gating a protected view on the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not resolved yet: show a placeholder, do not navigate.
    Loading,
    /// Resolved and nobody is signed in.
    Redirect,
    Render,
}

impl From<&Session> for GateDecision {
    fn from(session: &Session) -> Self {
        if session.is_loading {
            Self::Loading
        } else if session.user.is_none() {
            Self::Redirect
        } else {
            Self::Render
        }
    }
}

impl GateDecision {
    /// Run the navigation side effect for this decision. Redirects replace
    /// the current history entry so "back" cannot return to the gated page.
    pub fn apply(&self, navigator: &impl Navigate) {
        if *self == Self::Redirect {
            tracing::debug!("no session, redirecting to sign in");
            navigator.replace(&Route::SignIn);
        }
    }
}

/// Remembers the last decision a gate acted on, so re-renders that reach
/// the same decision navigate nothing.
#[derive(Debug, Default)]
pub struct GateTransitions {
    last: Option<GateDecision>,
}

impl GateTransitions {
    /// Apply `decision` if it differs from the previous one. Returns whether
    /// it was applied.
    pub fn observe(
        &mut self,
        decision: GateDecision,
        navigator: &impl Navigate,
    ) -> bool {
        if self.last == Some(decision) {
            return false;
        }
        self.last = Some(decision);
        decision.apply(navigator);
        true
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Access token persisted by the last sign-in, if any.
pub fn stored_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn store_access_token(token: &str) {
    if let Some(storage) = local_storage()
        && storage.set_item(ACCESS_TOKEN_KEY, token).is_err()
    {
        tracing::warn!("could not persist access token");
    }
}

pub fn clear_access_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
