//! Event system for session lifecycle changes.
//!
//! Events are fired from every session store operation. If no listeners are
//! registered, they are silently ignored (zero overhead).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fyp_session::events::register_event_listeners;
//! use fyp_session::events::listeners::LoggingListener;
//!
//! fn main() {
//!     // register listeners at startup
//!     register_event_listeners(|registry| {
//!         registry.listen(LoggingListener::new());
//!     });
//!
//!     // session events will now be logged
//! }
//! ```
//!
//! # Custom Listeners
//!
//! Implement the [`Listener`] trait to create custom event handlers:
//!
//! ```rust,ignore
//! use fyp_session::events::{Listener, SessionEvent};
//! use async_trait::async_trait;
//!
//! struct MetricsListener;
//!
//! #[async_trait]
//! impl Listener for MetricsListener {
//!     async fn handle(&self, event: &SessionEvent) {
//!         if let SessionEvent::LoginRejected { .. } = event {
//!             // increment rejected-login counter
//!         }
//!     }
//! }
//! ```

mod event;
mod listener;
mod registry;

pub mod listeners;

pub use event::SessionEvent;
pub use listener::Listener;
pub use registry::{dispatch, register_event_listeners, EventRegistry};
