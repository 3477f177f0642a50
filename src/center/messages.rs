//! Message types exchanged between the center's workers

use crate::events::{StudentId, TutorId};

/// Messages sent to the coordinator's inbox
///
/// The inbox is a bounded FIFO channel with the coordinator as its only
/// consumer, so `StudentArrived` messages are processed in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorMsg {
    /// A student took a chair and is waiting to be queued
    ///
    /// `helps_received` is the student's help count at the moment it sat
    /// down; the student blocks until tutored, so the value is still current
    /// when the coordinator uses it as the priority.
    StudentArrived {
        student_id: StudentId,
        helps_received: u32,
    },

    /// A student received its full quota and exited
    StudentDone { student_id: StudentId },
}

/// Messages sent to a student's private inbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentMsg {
    /// A tutor claimed this student; the session is over and recorded
    TutorReady { tutor_id: TutorId },
}
