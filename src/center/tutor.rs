//! Tutor workers: claim the most urgent queued student and run the session

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore, mpsc};
use tracing::{debug, info};

use crate::events::{CenterEvent, EventBus, StudentId, TutorId};

use super::delay::Delay;
use super::messages::StudentMsg;
use super::queue::SessionQueue;
use super::room::WaitingRoom;

/// One tutor in the pool
///
/// Tutors are symmetric consumers of the tutor-ready semaphore: whichever
/// tutor acquires a permit claims the head of the tutoring queue. The
/// coordinator releases exactly one permit per queued student, so a permit
/// always finds work; the under-lock pop re-checks anyway.
pub struct Tutor {
    id: TutorId,
    queue: Arc<Mutex<SessionQueue>>,
    room: Arc<WaitingRoom>,
    tutor_ready: Arc<Semaphore>,
    students: Arc<HashMap<StudentId, mpsc::Sender<StudentMsg>>>,
    events: Arc<EventBus>,
    delay: Arc<dyn Delay>,
}

impl Tutor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TutorId,
        queue: Arc<Mutex<SessionQueue>>,
        room: Arc<WaitingRoom>,
        tutor_ready: Arc<Semaphore>,
        students: Arc<HashMap<StudentId, mpsc::Sender<StudentMsg>>>,
        events: Arc<EventBus>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            id,
            queue,
            room,
            tutor_ready,
            students,
            events,
            delay,
        }
    }

    /// Serve students until the coordinator closes the semaphore
    pub async fn run(self) {
        info!(tutor_id = self.id, "tutor started");

        loop {
            match self.tutor_ready.acquire().await {
                Ok(permit) => permit.forget(),
                // Closed by the coordinator: every student is done and the
                // queue is empty.
                Err(_) => break,
            }

            let claimed = {
                let mut queue = self.queue.lock().await;
                let entry = queue.pop_min();
                if let Some(entry) = &entry {
                    // Emitted in the same critical section as the pop so the
                    // event trace reflects dispatch order exactly.
                    self.events.emit(CenterEvent::SessionStarted {
                        student_id: entry.student_id,
                        tutor_id: self.id,
                    });
                }
                entry
            };
            let Some(entry) = claimed else {
                // Spurious wake; the work was claimed elsewhere
                continue;
            };

            debug!(
                tutor_id = self.id,
                student_id = entry.student_id,
                priority = entry.priority,
                "session started"
            );

            // Picking the student up frees the chair for the next arrival
            self.room.leave_seat().await;
            self.room.session_started().await;

            self.delay.tutoring().await;

            let tally = self.room.session_finished().await;
            self.events.emit(CenterEvent::TutoredSession {
                student_id: entry.student_id,
                tutor_id: self.id,
                students_tutored_now: tally.students_tutored_now,
                sessions_tutored: tally.sessions_tutored,
            });

            if let Some(tx) = self.students.get(&entry.student_id) {
                let _ = tx.send(StudentMsg::TutorReady { tutor_id: self.id }).await;
            }
        }

        info!(tutor_id = self.id, "tutor stopped");
    }
}
