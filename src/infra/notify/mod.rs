//! Notifier backends.

pub mod memory;
pub mod tracing_log;

pub use memory::InMemoryNotifier;
pub use tracing_log::TracingNotifier;
