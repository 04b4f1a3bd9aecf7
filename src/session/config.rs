use crate::SessionError;

/// Configuration for the session store and its redirect targets.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Storage key holding the bearer token.
    pub token_key: String,
    /// Storage key holding the JSON-serialized profile.
    pub profile_key: String,
    /// Public entry route, used when unauthenticated.
    pub login_path: String,
    /// Route shown to authenticated users lacking a required role.
    pub unauthorized_path: String,
    /// Landing route for roles without a dedicated area.
    pub default_landing_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "fyp_token".to_owned(),
            profile_key: "fyp_profile".to_owned(),
            login_path: "/login".to_owned(),
            unauthorized_path: "/unauthorized".to_owned(),
            default_landing_path: "/dashboard".to_owned(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.token_key.is_empty() || self.profile_key.is_empty() {
            return Err(SessionError::ConfigurationError(
                "storage keys must not be empty".to_owned(),
            ));
        }
        if self.token_key == self.profile_key {
            return Err(SessionError::ConfigurationError(
                "token and profile keys must differ".to_owned(),
            ));
        }
        for path in [
            &self.login_path,
            &self.unauthorized_path,
            &self.default_landing_path,
        ] {
            if !path.starts_with('/') {
                return Err(SessionError::ConfigurationError(format!(
                    "path must start with '/': {path}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.unauthorized_path, "/unauthorized");
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let config = SessionConfig {
            profile_key: "fyp_token".to_owned(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_relative_paths() {
        let config = SessionConfig {
            login_path: "login".to_owned(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_keys() {
        let config = SessionConfig {
            token_key: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
