//! Client-side authentication core for the FYP management app.
//!
//! Two pieces cooperate here: a [`SessionStore`] that owns the bearer token
//! and user profile (with durable persistence across reloads), and a
//! [`RouteGuard`] that decides, per navigation, whether a protected view may
//! render. Everything else in the application (CRUD screens, charts, chat)
//! talks to the REST backend directly and is out of scope for this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use fyp_session::{InMemoryStorage, RouteGuard, SessionConfig, SessionStore};
//!
//! let store = SessionStore::new(InMemoryStorage::new(), SessionConfig::default());
//! store.restore().await;
//!
//! let guard = RouteGuard::from_config(store.config());
//! match guard.evaluate(&store.state(), &["ADMIN"], "/admin/users") {
//!     fyp_session::RouteDecision::Allow => { /* render */ }
//!     decision => { /* redirect */ }
//! }
//! ```

pub mod events;
pub mod guard;
pub mod role;
pub mod session;
pub mod token;

pub use guard::{RouteDecision, RouteGuard};
pub use role::Role;
pub use session::{
    FileStorage, InMemoryStorage, KeyValueStorage, Navigation, SessionConfig, SessionState,
    SessionStore, UserProfile,
};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The token or profile handed to `login` failed validation.
    InvalidCredentialPayload,
    /// A role string outside the closed role set.
    UnknownRole(String),
    /// The durable storage backend failed.
    StorageError(String),
    /// Invalid crate configuration (bad key names or paths).
    ConfigurationError(String),
}

impl std::error::Error for SessionError {}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidCredentialPayload => {
                write!(f, "Invalid credential payload")
            }
            SessionError::UnknownRole(role) => write!(f, "Unknown role: {role}"),
            SessionError::StorageError(msg) => write!(f, "Storage error: {msg}"),
            SessionError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}
