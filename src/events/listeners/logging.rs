use async_trait::async_trait;

use crate::events::{Listener, SessionEvent};

/// Logs all session events using the `log` crate.
///
/// # Example
///
/// ```rust,ignore
/// use fyp_session::events::register_event_listeners;
/// use fyp_session::events::listeners::LoggingListener;
///
/// register_event_listeners(|registry| {
///     registry.listen(LoggingListener::new());
/// });
/// ```
pub struct LoggingListener {
    level: log::Level,
}

impl LoggingListener {
    /// Creates a new logging listener at INFO level.
    pub fn new() -> Self {
        Self {
            level: log::Level::Info,
        }
    }

    /// Creates a new logging listener at the specified level.
    pub fn with_level(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Listener for LoggingListener {
    async fn handle(&self, event: &SessionEvent) {
        log::log!(
            target: "fyp_session::events",
            self.level,
            "event={} {:?}",
            event.name(),
            event
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(LoggingListener::new().level, log::Level::Info);
        assert_eq!(LoggingListener::default().level, log::Level::Info);
    }

    #[test]
    fn test_with_level() {
        let listener = LoggingListener::with_level(log::Level::Debug);
        assert_eq!(listener.level, log::Level::Debug);
    }

    #[tokio::test]
    async fn test_handle_does_not_panic() {
        let listener = LoggingListener::new();
        listener
            .handle(&SessionEvent::LoggedOut { at: Utc::now() })
            .await;
    }
}
