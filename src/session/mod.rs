//! Session state: who is logged in, persisted across reloads.

mod config;
mod file_store;
mod memory_store;
mod storage;
mod store;

pub use config::SessionConfig;
pub use file_store::FileStorage;
pub use memory_store::InMemoryStorage;
use serde::{Deserialize, Serialize};
pub use storage::KeyValueStorage;
pub use store::SessionStore;

use crate::role::Role;

/// Profile of the logged-in user, as persisted alongside the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    /// A profile is complete when every identifying field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Current authentication state of the client.
///
/// The store starts in `Loading` and leaves it exactly once, when
/// [`SessionStore::restore`] finishes. A profile is present if and only if
/// the state is `Authenticated`; there is no separate boolean to drift out
/// of sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Boot-time state, before the persisted session has been read back.
    Loading,
    Unauthenticated,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}

/// A navigation signal returned by [`SessionStore::login`] and
/// [`SessionStore::logout`]: the route the UI shell should move to next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: String,
}

impl Navigation {
    pub fn to(route: impl Into<String>) -> Self {
        Self { to: route.into() }
    }
}
