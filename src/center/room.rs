//! Waiting room seating and the global counters it serializes

use tokio::sync::Mutex;
use tracing::debug;

/// Result of a student trying to take a chair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatOutcome {
    /// The student got a chair; `free_chairs` is the count after sitting
    Admitted { free_chairs: u32 },
    /// Every chair was taken
    Rejected,
}

/// Snapshot of the room counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomStats {
    pub free_chairs: u32,
    pub waiting_students: u32,
    pub total_requests: u64,
    pub students_done: u32,
    pub students_tutored_now: u32,
    pub sessions_tutored: u64,
}

/// Counter values recorded when a session completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTally {
    /// Concurrent sessions including the one just finished
    pub students_tutored_now: u32,
    /// Completed sessions including this one
    pub sessions_tutored: u64,
}

/// Internal state protected by the chair lock
#[derive(Debug)]
struct RoomInner {
    free_chairs: u32,
    waiting_students: u32,
    total_requests: u64,
    students_done: u32,
    students_tutored_now: u32,
    sessions_tutored: u64,
}

/// Bounded seating plus every counter the chair lock serializes
///
/// A chair is held from `try_sit` until a tutor *picks the student up*
/// (`leave_seat`), not until the session ends. Another student can therefore
/// sit down while a session is in progress.
pub struct WaitingRoom {
    inner: Mutex<RoomInner>,
}

impl WaitingRoom {
    /// Create a room with the given number of chairs
    pub fn new(chairs: u32) -> Self {
        Self {
            inner: Mutex::new(RoomInner {
                free_chairs: chairs,
                waiting_students: 0,
                total_requests: 0,
                students_done: 0,
                students_tutored_now: 0,
                sessions_tutored: 0,
            }),
        }
    }

    /// Try to take a chair
    pub async fn try_sit(&self) -> SeatOutcome {
        let mut inner = self.inner.lock().await;
        if inner.free_chairs == 0 {
            return SeatOutcome::Rejected;
        }
        inner.free_chairs -= 1;
        inner.waiting_students += 1;
        inner.total_requests += 1;
        debug!(
            free_chairs = inner.free_chairs,
            waiting = inner.waiting_students,
            "student admitted"
        );
        SeatOutcome::Admitted {
            free_chairs: inner.free_chairs,
        }
    }

    /// Release a chair; called by the tutor that claims its occupant
    pub async fn leave_seat(&self) {
        let mut inner = self.inner.lock().await;
        inner.free_chairs += 1;
        inner.waiting_students -= 1;
    }

    /// Record that a session began
    pub async fn session_started(&self) {
        let mut inner = self.inner.lock().await;
        inner.students_tutored_now += 1;
    }

    /// Record that a session completed
    ///
    /// The returned tally counts the finished session on both sides: it is
    /// read before `students_tutored_now` is decremented and after
    /// `sessions_tutored` is incremented, which is what the progress log
    /// reports.
    pub async fn session_finished(&self) -> SessionTally {
        let mut inner = self.inner.lock().await;
        inner.sessions_tutored += 1;
        let tally = SessionTally {
            students_tutored_now: inner.students_tutored_now,
            sessions_tutored: inner.sessions_tutored,
        };
        inner.students_tutored_now -= 1;
        tally
    }

    /// Record that a student received its full help quota
    pub async fn student_finished(&self) -> u32 {
        let mut inner = self.inner.lock().await;
        inner.students_done += 1;
        inner.students_done
    }

    /// Snapshot every counter
    pub async fn stats(&self) -> RoomStats {
        let inner = self.inner.lock().await;
        RoomStats {
            free_chairs: inner.free_chairs,
            waiting_students: inner.waiting_students,
            total_requests: inner.total_requests,
            students_done: inner.students_done,
            students_tutored_now: inner.students_tutored_now,
            sessions_tutored: inner.sessions_tutored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sit_until_full() {
        let room = WaitingRoom::new(2);

        assert_eq!(room.try_sit().await, SeatOutcome::Admitted { free_chairs: 1 });
        assert_eq!(room.try_sit().await, SeatOutcome::Admitted { free_chairs: 0 });
        assert_eq!(room.try_sit().await, SeatOutcome::Rejected);

        let stats = room.stats().await;
        assert_eq!(stats.free_chairs, 0);
        assert_eq!(stats.waiting_students, 2);
        assert_eq!(stats.total_requests, 2);
    }

    #[tokio::test]
    async fn test_rejection_counts_no_request() {
        let room = WaitingRoom::new(0);
        assert_eq!(room.try_sit().await, SeatOutcome::Rejected);
        assert_eq!(room.stats().await.total_requests, 0);
    }

    #[tokio::test]
    async fn test_leave_seat_reopens_chair() {
        let room = WaitingRoom::new(1);
        room.try_sit().await;
        assert_eq!(room.try_sit().await, SeatOutcome::Rejected);

        room.leave_seat().await;
        assert_eq!(room.try_sit().await, SeatOutcome::Admitted { free_chairs: 0 });

        // total_requests is lifetime-monotonic
        assert_eq!(room.stats().await.total_requests, 2);
    }

    #[tokio::test]
    async fn test_session_tally_counts_finishing_session() {
        let room = WaitingRoom::new(1);
        room.session_started().await;
        room.session_started().await;

        let tally = room.session_finished().await;
        assert_eq!(tally.students_tutored_now, 2);
        assert_eq!(tally.sessions_tutored, 1);

        let tally = room.session_finished().await;
        assert_eq!(tally.students_tutored_now, 1);
        assert_eq!(tally.sessions_tutored, 2);

        assert_eq!(room.stats().await.students_tutored_now, 0);
    }

    #[tokio::test]
    async fn test_student_finished_counter() {
        let room = WaitingRoom::new(1);
        assert_eq!(room.student_finished().await, 1);
        assert_eq!(room.student_finished().await, 2);
        assert_eq!(room.stats().await.students_done, 2);
    }
}
