use std::sync::OnceLock;

use super::{Listener, SessionEvent};

static REGISTRY: OnceLock<EventRegistry> = OnceLock::new();

/// Registry holding all registered event listeners.
///
/// Use [`register_event_listeners`] to configure listeners at application
/// startup.
pub struct EventRegistry {
    listeners: Vec<Box<dyn Listener>>,
}

impl EventRegistry {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener to receive events.
    ///
    /// Listeners are called in the order they are registered.
    pub fn listen(&mut self, listener: impl Listener) -> &mut Self {
        self.listeners.push(Box::new(listener));
        self
    }

    async fn dispatch(&self, event: &SessionEvent) {
        for listener in &self.listeners {
            listener.handle(event).await;
        }
    }
}

/// Register event listeners at application startup.
///
/// Call this once during initialization. If not called, events are silently
/// ignored. Only the first call takes effect; later calls log a warning.
pub fn register_event_listeners<F>(f: F)
where
    F: FnOnce(&mut EventRegistry),
{
    let mut registry = EventRegistry::new();
    f(&mut registry);
    if REGISTRY.set(registry).is_err() {
        log::warn!(
            target: "fyp_session",
            "register_event_listeners called more than once, ignoring"
        );
    }
}

/// Dispatch an event to all registered listeners.
///
/// If no listeners are registered, this is a no-op.
pub async fn dispatch(event: SessionEvent) {
    if let Some(registry) = REGISTRY.get() {
        registry.dispatch(&event).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    struct CountingListener {
        count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Listener for CountingListener {
        async fn handle(&self, _event: &SessionEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_registry_dispatches_in_order() {
        // local registry, the global one is process-wide
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = EventRegistry::new();
        registry
            .listen(CountingListener {
                count: count.clone(),
            })
            .listen(CountingListener {
                count: count.clone(),
            });

        registry
            .dispatch(&SessionEvent::LoggedOut { at: Utc::now() })
            .await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_dispatch_without_registration_is_noop() {
        // must not panic even when nothing is registered
        dispatch(SessionEvent::LoggedOut { at: Utc::now() }).await;
    }
}
