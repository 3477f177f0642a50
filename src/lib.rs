//! MentorSim - priority-scheduled mentoring center simulator
//!
//! A pool of tutors serves students who arrive at a bounded waiting room, with
//! a single coordinator enforcing the service discipline: students are served
//! in ascending order of helps already received, ties broken first-come
//! first-served. Students retry when the room is full and leave for good once
//! they have received their help quota.
//!
//! # Core concepts
//!
//! - **Messages over shared state**: arrivals, completions, and tutor
//!   assignments travel on channels; only the room counters and the tutoring
//!   queue sit behind locks
//! - **Counted wakeups**: one semaphore permit per queued student, consumed by
//!   whichever tutor is free; closing the semaphore is the shutdown broadcast
//! - **Observable by events**: every step emits a [`CenterEvent`] on a
//!   broadcast bus, which the console logger and tests consume
//!
//! # Modules
//!
//! - [`center`] - the coordination core: waiting room, queue, workers
//! - [`events`] - event vocabulary, bus, and console logger
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod center;
pub mod cli;
pub mod config;
pub mod events;

// Re-export commonly used types
pub use center::{
    CenterError, CenterParams, CenterReport, Controller, Delay, NoDelay, RandomDelay, SeatOutcome,
    SessionQueue, WaitingRoom,
};
pub use config::{ChannelConfig, Config, DelayConfig};
pub use events::{CenterEvent, EventBus, EventRecorder, StudentId, TutorId, create_event_bus};
