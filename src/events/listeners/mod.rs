//! Built-in event listeners.
//!
//! Use them with [`register_event_listeners`](super::register_event_listeners).

mod logging;

pub use logging::LoggingListener;
