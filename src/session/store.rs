//! The session store: single source of truth for "who is logged in".

use std::sync::RwLock;

use chrono::Utc;

use crate::events::{dispatch, SessionEvent};
use crate::role::Role;
use crate::token;
use crate::SessionError;

use super::storage::KeyValueStorage;
use super::{Navigation, SessionConfig, SessionState, UserProfile};

/// Owns the current session (bearer token + user profile) and its durable
/// persistence. One instance per client; inject it wherever session state is
/// needed instead of reaching for a global.
///
/// The store starts in [`SessionState::Loading`]. Call [`restore`] once at
/// boot to read back any persisted session; no route decision should be
/// trusted before it completes.
///
/// [`restore`]: SessionStore::restore
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    config: SessionConfig,
    state: RwLock<SessionState>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Creates a store with the default configuration.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, SessionConfig::default())
    }

    /// Creates a store with a custom configuration.
    pub fn with_config(storage: S, config: SessionConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!(target: "fyp_session", "session config invalid: {e}");
        }
        Self {
            storage,
            config,
            state: RwLock::new(SessionState::Loading),
        }
    }

    /// Reads back a persisted session, if any. Runs once at process start.
    ///
    /// Missing credentials simply leave the store unauthenticated. Present
    /// but expired or unreadable credentials are cleared and likewise end
    /// unauthenticated: a stale session is indistinguishable from never
    /// having logged in, with no user-visible error.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "restore", skip_all))]
    pub async fn restore(&self) {
        let token = self.storage.get(&self.config.token_key).await;
        let profile = self.storage.get(&self.config.profile_key).await;

        match (token, profile) {
            (Ok(Some(token)), Ok(Some(raw))) => {
                if token::validate(&token) {
                    if let Ok(profile) = serde_json::from_str::<UserProfile>(&raw) {
                        log::debug!(
                            target: "fyp_session",
                            "restored session for user={}", profile.id
                        );
                        let user_id = profile.id.clone();
                        self.set_state(SessionState::Authenticated(profile));
                        dispatch(SessionEvent::SessionRestored {
                            user_id,
                            at: Utc::now(),
                        })
                        .await;
                        return;
                    }
                }

                // expired or corrupt: same outcome as an explicit logout
                log::debug!(target: "fyp_session", "persisted session invalid, clearing");
                self.clear_storage().await;
                self.set_state(SessionState::Unauthenticated);
                dispatch(SessionEvent::SessionExpired { at: Utc::now() }).await;
            }
            (Ok(None), Ok(None)) => {
                self.set_state(SessionState::Unauthenticated);
            }
            // half-written pair or a failing backend: clear what we can
            _ => {
                self.clear_storage().await;
                self.set_state(SessionState::Unauthenticated);
            }
        }
    }

    /// Establishes a new session from a freshly issued token and profile.
    ///
    /// Returns the navigation target for the role's landing area. On any
    /// validation failure nothing is persisted and the current state is
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidCredentialPayload`] - empty or expired
    ///   token, or an incomplete profile
    /// - [`SessionError::StorageError`] - the backend rejected the write;
    ///   any partial write is rolled back
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn login(
        &self,
        token: &str,
        profile: UserProfile,
    ) -> Result<Navigation, SessionError> {
        if token.is_empty() || !profile.is_complete() || !token::validate(token) {
            log::warn!(target: "fyp_session", "login rejected: invalid credential payload");
            dispatch(SessionEvent::LoginRejected {
                reason: "invalid credential payload".to_owned(),
                at: Utc::now(),
            })
            .await;
            return Err(SessionError::InvalidCredentialPayload);
        }

        let serialized = serde_json::to_string(&profile)
            .map_err(|_| SessionError::InvalidCredentialPayload)?;

        // Both keys or neither: profile first, token second, and a token
        // write failure rolls the profile back.
        self.storage
            .set(&self.config.profile_key, &serialized)
            .await?;
        if let Err(e) = self.storage.set(&self.config.token_key, token).await {
            let _ = self.storage.remove(&self.config.profile_key).await;
            return Err(e);
        }

        let landing = self.landing_route(profile.role);
        log::info!(
            target: "fyp_session",
            "login success user={} role={}", profile.id, profile.role
        );

        let user_id = profile.id.clone();
        let role = profile.role;
        self.set_state(SessionState::Authenticated(profile));
        dispatch(SessionEvent::LoginSucceeded {
            user_id,
            role,
            at: Utc::now(),
        })
        .await;

        Ok(Navigation::to(landing))
    }

    /// Ends the session and clears persisted credentials.
    ///
    /// Infallible and idempotent: logging out while logged out is a no-op
    /// with the same post-condition. Storage failures are logged and
    /// swallowed. Returns the navigation target for the public entry route.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "logout", skip_all))]
    pub async fn logout(&self) -> Navigation {
        self.clear_storage().await;
        self.set_state(SessionState::Unauthenticated);

        log::info!(target: "fyp_session", "logout");
        dispatch(SessionEvent::LoggedOut { at: Utc::now() }).await;

        Navigation::to(self.config.login_path.clone())
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.read_state().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().is_authenticated()
    }

    /// The logged-in user's profile, if any.
    pub fn profile(&self) -> Option<UserProfile> {
        self.read_state().profile().cloned()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn landing_route(&self, role: Role) -> String {
        match role {
            Role::User => self.config.default_landing_path.clone(),
            role => role.landing_route().to_owned(),
        }
    }

    async fn clear_storage(&self) {
        for key in [&self.config.token_key, &self.config.profile_key] {
            if let Err(e) = self.storage.remove(key).await {
                log::warn!(target: "fyp_session", "failed to clear key {key}: {e}");
            }
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn set_state(&self, next: SessionState) {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
    }
}
