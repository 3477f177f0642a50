//! Student drivers: think, sit, wait for a tutor, record the help

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::events::{CenterEvent, EventBus, StudentId};

use super::delay::Delay;
use super::messages::{CoordinatorMsg, StudentMsg};
use super::room::{SeatOutcome, WaitingRoom};

/// One student seeking a fixed quota of helps
pub struct Student {
    id: StudentId,
    quota: u32,
    helps_received: u32,
    inbox: mpsc::Receiver<StudentMsg>,
    coordinator: mpsc::Sender<CoordinatorMsg>,
    room: Arc<WaitingRoom>,
    events: Arc<EventBus>,
    delay: Arc<dyn Delay>,
}

impl Student {
    pub fn new(
        id: StudentId,
        quota: u32,
        inbox: mpsc::Receiver<StudentMsg>,
        coordinator: mpsc::Sender<CoordinatorMsg>,
        room: Arc<WaitingRoom>,
        events: Arc<EventBus>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            id,
            quota,
            helps_received: 0,
            inbox,
            coordinator,
            room,
            events,
            delay,
        }
    }

    /// Loop until the help quota is met, then report done and exit
    pub async fn run(mut self) {
        while self.helps_received < self.quota {
            self.delay.thinking().await;

            match self.room.try_sit().await {
                SeatOutcome::Rejected => {
                    // The only transient failure in the center; go back to
                    // programming and try again later
                    self.events.emit(CenterEvent::NoChair {
                        student_id: self.id,
                    });
                    continue;
                }
                SeatOutcome::Admitted { free_chairs } => {
                    self.events.emit(CenterEvent::TookSeat {
                        student_id: self.id,
                        free_chairs,
                    });

                    let arrived = CoordinatorMsg::StudentArrived {
                        student_id: self.id,
                        helps_received: self.helps_received,
                    };
                    if self.coordinator.send(arrived).await.is_err() {
                        break;
                    }

                    // Suspended until a tutor claims this student
                    let Some(StudentMsg::TutorReady { tutor_id }) = self.inbox.recv().await else {
                        break;
                    };

                    self.delay.tutoring().await;
                    self.helps_received += 1;
                    debug!(
                        student_id = self.id,
                        tutor_id,
                        helps_received = self.helps_received,
                        "help received"
                    );
                    self.events.emit(CenterEvent::ReceivedHelp {
                        student_id: self.id,
                        tutor_id,
                    });
                }
            }
        }

        self.room.student_finished().await;
        let _ = self
            .coordinator
            .send(CoordinatorMsg::StudentDone {
                student_id: self.id,
            })
            .await;
        info!(student_id = self.id, helps = self.helps_received, "student done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::center::delay::NoDelay;
    use crate::events::create_event_bus;

    #[tokio::test]
    async fn test_zero_quota_reports_done_without_sitting() {
        let (_student_tx, student_rx) = mpsc::channel(1);
        let (coord_tx, mut coord_rx) = mpsc::channel(4);
        let room = Arc::new(WaitingRoom::new(1));
        let events = create_event_bus();

        let student = Student::new(
            1,
            0,
            student_rx,
            coord_tx,
            room.clone(),
            events,
            Arc::new(NoDelay),
        );
        student.run().await;

        assert_eq!(
            coord_rx.recv().await,
            Some(CoordinatorMsg::StudentDone { student_id: 1 })
        );
        let stats = room.stats().await;
        assert_eq!(stats.students_done, 1);
        assert_eq!(stats.total_requests, 0);
    }

    #[tokio::test]
    async fn test_student_sits_notifies_and_records_help() {
        let (student_tx, student_rx) = mpsc::channel(1);
        let (coord_tx, mut coord_rx) = mpsc::channel(4);
        let room = Arc::new(WaitingRoom::new(1));
        let events = create_event_bus();
        let mut event_rx = events.subscribe();

        let student = Student::new(
            3,
            1,
            student_rx,
            coord_tx,
            room.clone(),
            events.clone(),
            Arc::new(NoDelay),
        );
        let handle = tokio::spawn(student.run());

        assert_eq!(
            coord_rx.recv().await,
            Some(CoordinatorMsg::StudentArrived {
                student_id: 3,
                helps_received: 0,
            })
        );

        // Stand in for the tutor: free the chair and wake the student
        room.leave_seat().await;
        student_tx
            .send(StudentMsg::TutorReady { tutor_id: 2 })
            .await
            .unwrap();

        assert_eq!(
            coord_rx.recv().await,
            Some(CoordinatorMsg::StudentDone { student_id: 3 })
        );
        handle.await.unwrap();

        assert_eq!(
            event_rx.recv().await.unwrap(),
            CenterEvent::TookSeat {
                student_id: 3,
                free_chairs: 0,
            }
        );
        assert_eq!(
            event_rx.recv().await.unwrap(),
            CenterEvent::ReceivedHelp {
                student_id: 3,
                tutor_id: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_full_room_emits_no_chair_and_retries() {
        let (student_tx, student_rx) = mpsc::channel(1);
        let (coord_tx, mut coord_rx) = mpsc::channel(4);
        let room = Arc::new(WaitingRoom::new(1));
        let events = create_event_bus();
        let mut event_rx = events.subscribe();

        // Occupy the only chair so the first attempt is rejected
        room.try_sit().await;

        let student = Student::new(
            5,
            1,
            student_rx,
            coord_tx,
            room.clone(),
            events.clone(),
            Arc::new(NoDelay),
        );
        let handle = tokio::spawn(student.run());

        assert_eq!(
            event_rx.recv().await.unwrap(),
            CenterEvent::NoChair { student_id: 5 }
        );

        // Open the chair; the retry should seat the student
        room.leave_seat().await;
        assert!(matches!(
            coord_rx.recv().await,
            Some(CoordinatorMsg::StudentArrived { student_id: 5, .. })
        ));

        room.leave_seat().await;
        student_tx
            .send(StudentMsg::TutorReady { tutor_id: 1 })
            .await
            .unwrap();
        handle.await.unwrap();
    }
}
