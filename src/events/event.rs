use chrono::{DateTime, Utc};

use crate::role::Role;

/// Session lifecycle events emitted by the session store.
///
/// Events are always fired. If no listeners are registered, they are
/// silently ignored (no-op). Register listeners via
/// [`register_event_listeners`](super::register_event_listeners).
#[derive(Debug, Clone)]
pub enum SessionEvent {
    LoginSucceeded {
        user_id: String,
        role: Role,
        at: DateTime<Utc>,
    },
    LoginRejected {
        reason: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },
    /// A persisted session was read back and re-validated at boot.
    SessionRestored {
        user_id: String,
        at: DateTime<Utc>,
    },
    /// A persisted session was found expired or unreadable and cleared.
    SessionExpired {
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Returns a dot-separated event name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSucceeded { .. } => "session.login.succeeded",
            Self::LoginRejected { .. } => "session.login.rejected",
            Self::LoggedOut { .. } => "session.logout",
            Self::SessionRestored { .. } => "session.restored",
            Self::SessionExpired { .. } => "session.expired",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::LoginSucceeded { at, .. }
            | Self::LoginRejected { at, .. }
            | Self::LoggedOut { at }
            | Self::SessionRestored { at, .. }
            | Self::SessionExpired { at } => *at,
        }
    }
}
