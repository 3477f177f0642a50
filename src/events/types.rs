//! Event types for mentoring-center activity streaming
//!
//! These events represent all observable activity in the center:
//! - Students arriving, sitting down, or being turned away
//! - The coordinator queuing students for tutoring
//! - Tutors starting and completing sessions

use serde::{Deserialize, Serialize};

/// Identifier of a student, assigned 1..=N at startup
pub type StudentId = u32;

/// Identifier of a tutor, assigned 1..=T at startup
pub type TutorId = u32;

/// Core event enum - the vocabulary of center activity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CenterEvent {
    /// A student found no empty chair and went back to programming
    NoChair { student_id: StudentId },

    /// A student took a chair in the waiting room
    TookSeat {
        student_id: StudentId,
        /// Chairs left after this student sat down
        free_chairs: u32,
    },

    /// The coordinator moved a student into the tutoring queue
    QueuedForTutoring {
        student_id: StudentId,
        /// The student's help count at admission; lower pops first
        priority: u32,
        waiting_students: u32,
        total_requests: u64,
    },

    /// A tutor claimed the student at the head of the tutoring queue
    SessionStarted {
        student_id: StudentId,
        tutor_id: TutorId,
    },

    /// A tutor finished a session
    TutoredSession {
        student_id: StudentId,
        tutor_id: TutorId,
        students_tutored_now: u32,
        sessions_tutored: u64,
    },

    /// A student was woken by its tutor and recorded the help
    ReceivedHelp {
        student_id: StudentId,
        tutor_id: TutorId,
    },
}

impl CenterEvent {
    /// Get the student this event is about
    pub fn student_id(&self) -> StudentId {
        match self {
            CenterEvent::NoChair { student_id }
            | CenterEvent::TookSeat { student_id, .. }
            | CenterEvent::QueuedForTutoring { student_id, .. }
            | CenterEvent::SessionStarted { student_id, .. }
            | CenterEvent::TutoredSession { student_id, .. }
            | CenterEvent::ReceivedHelp { student_id, .. } => *student_id,
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            CenterEvent::NoChair { .. } => "NoChair",
            CenterEvent::TookSeat { .. } => "TookSeat",
            CenterEvent::QueuedForTutoring { .. } => "QueuedForTutoring",
            CenterEvent::SessionStarted { .. } => "SessionStarted",
            CenterEvent::TutoredSession { .. } => "TutoredSession",
            CenterEvent::ReceivedHelp { .. } => "ReceivedHelp",
        }
    }
}
