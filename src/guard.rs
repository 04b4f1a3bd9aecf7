//! Role-gated navigation decisions for protected views.

use std::str::FromStr;

use crate::role::Role;
use crate::session::{SessionConfig, SessionState};

/// Outcome of evaluating a navigation to a protected path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The session store has not finished restoring; show a neutral
    /// placeholder, never a redirect.
    Loading,
    /// Not logged in: go to the public entry route, remembering where the
    /// user was headed so login can return there.
    RedirectToLogin { return_to: String },
    /// Logged in but lacking a required role.
    RedirectToUnauthorized,
    /// Render the protected subtree.
    Allow,
}

/// Gate for protected views: authentication check plus an optional role
/// allow-list, evaluated synchronously against already-resolved session
/// state. No storage or network access.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
    unauthorized_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>, unauthorized_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            unauthorized_path: unauthorized_path.into(),
        }
    }

    /// Builds a guard sharing the session store's configured paths.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.login_path.clone(), config.unauthorized_path.clone())
    }

    /// The public entry route unauthenticated users are sent to.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// The route shown on a role mismatch.
    pub fn unauthorized_path(&self) -> &str {
        &self.unauthorized_path
    }

    /// Decides whether the navigation to `target` may proceed.
    ///
    /// `required_roles` is the route's allow-list, matched
    /// case-insensitively; an empty list means any authenticated user.
    /// Allow-list entries outside the closed role set are a configuration
    /// mistake: they are logged and never match anyone.
    pub fn evaluate(
        &self,
        state: &SessionState,
        required_roles: &[&str],
        target: &str,
    ) -> RouteDecision {
        let profile = match state {
            SessionState::Loading => return RouteDecision::Loading,
            SessionState::Unauthenticated => {
                return RouteDecision::RedirectToLogin {
                    return_to: target.to_owned(),
                }
            }
            SessionState::Authenticated(profile) => profile,
        };

        if required_roles.is_empty() {
            return RouteDecision::Allow;
        }

        let mut allowed = required_roles.iter().filter_map(|raw| {
            Role::from_str(raw)
                .map_err(|e| {
                    log::warn!(
                        target: "fyp_session",
                        "route allow-list for {target} contains {e}"
                    );
                })
                .ok()
        });

        if allowed.any(|role| role == profile.role) {
            RouteDecision::Allow
        } else {
            log::debug!(
                target: "fyp_session",
                "role {} not permitted on {target}", profile.role
            );
            RouteDecision::RedirectToUnauthorized
        }
    }
}
