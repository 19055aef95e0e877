//! Signed-in user and authentication token.
//!
//! The session is created once at the app root with [`use_session_provider`].
//! Components receive the [`SessionContext`] handle and never touch storage.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::core::error::StorageError;
use crate::core::storage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            profile_picture: None,
        }
    }

    pub fn with_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    /// Upper-cased first letter of the user name, used when there is no picture.
    pub fn initial(&self) -> Option<char> {
        self.username
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// Session restored from storage. Unreadable entries count as absent.
    pub fn restore() -> Self {
        let user = storage::read_json::<User>(USER_STORAGE_KEY).unwrap_or_else(|err| {
            tracing::warn!(%err, "discarding stored user");
            None
        });
        let token = storage::read(TOKEN_STORAGE_KEY).unwrap_or_else(|err| {
            tracing::warn!(%err, "discarding stored token");
            None
        });
        Self { user, token }
    }

    /// Write both entries, even when the first fails; reports the first error.
    fn persist(&self) -> Result<(), StorageError> {
        let user = match &self.user {
            Some(user) => storage::write_json(USER_STORAGE_KEY, user),
            None => storage::remove(USER_STORAGE_KEY),
        };
        let token = match &self.token {
            Some(token) => storage::write(TOKEN_STORAGE_KEY, token),
            None => storage::remove(TOKEN_STORAGE_KEY),
        };
        user.and(token)
    }
}

/// Handle on the shared session signal.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    pub state: Signal<Session>,
}

impl SessionContext {
    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().user.is_some()
    }

    pub fn sign_in(&self, user: User, token: Option<String>) {
        tracing::info!(username = %user.username, "user signed in");
        self.replace(Session {
            user: Some(user),
            token,
        });
    }

    /// Clear the stored token and the stored user.
    pub fn logout(&self) {
        tracing::info!("user logged out");
        self.replace(Session::default());
    }

    fn replace(&self, session: Session) {
        if let Err(err) = session.persist() {
            tracing::warn!(%err, "could not persist session");
        }
        let mut state = self.state;
        state.set(session);
    }
}

/// Create the session context from storage. Call once at the root.
pub fn use_session_provider() -> SessionContext {
    let state = use_signal(Session::restore);
    use_context_provider(|| SessionContext { state })
}

/// Session context provided by an ancestor.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
