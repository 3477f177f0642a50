//! The concurrent coordination core of the mentoring center
//!
//! Every student, every tutor, and the coordinator is a tokio task. Shared
//! state is confined to two locks: the waiting room serializes the chair and
//! session counters, and the tutoring queue holds students awaiting a tutor.
//! Everything else moves as messages:
//!
//! - students announce arrivals and completion on the coordinator's inbox,
//! - the coordinator answers each arrival with one permit on the tutor-ready
//!   semaphore,
//! - whichever tutor takes the permit claims the most urgent queued student
//!   and wakes it through its private inbox.
//!
//! Closing the semaphore is the termination broadcast: the coordinator does
//! it once every student has reported done.

mod controller;
mod coordinator;
mod delay;
mod error;
mod messages;
mod queue;
mod room;
mod student;
mod tutor;

pub use controller::{CenterParams, CenterReport, Controller};
pub use coordinator::Coordinator;
pub use delay::{Delay, NoDelay, RandomDelay};
pub use error::CenterError;
pub use messages::{CoordinatorMsg, StudentMsg};
pub use queue::{QueuedStudent, SessionQueue};
pub use room::{RoomStats, SeatOutcome, SessionTally, WaitingRoom};
pub use student::Student;
pub use tutor::Tutor;
