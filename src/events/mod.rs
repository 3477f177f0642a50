//! Event system for live observability
//!
//! Every observable action in the center emits a [`CenterEvent`] to the
//! [`EventBus`] (a tokio broadcast channel). Consumers subscribe: the console
//! logger renders the classic progress lines, and tests attach an
//! [`EventRecorder`] to capture the full trace for invariant checking.

mod bus;
mod logger;
mod types;

pub use bus::{DEFAULT_CHANNEL_CAPACITY, EventBus, EventRecorder, create_event_bus};
pub use logger::{render, run_console_logger, spawn_console_logger};
pub use types::{CenterEvent, StudentId, TutorId};
