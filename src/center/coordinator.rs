//! The coordinator task: drains arrivals into the tutoring queue

use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore, mpsc};
use tracing::{debug, info};

use crate::events::{CenterEvent, EventBus};

use super::messages::CoordinatorMsg;
use super::queue::SessionQueue;
use super::room::WaitingRoom;

/// Single consumer of the arrival inbox
///
/// Each arrival is assigned its priority snapshot, inserted into the
/// tutoring queue, and answered with one permit on the tutor-ready
/// semaphore. When every student has reported done, the coordinator closes
/// the semaphore, which is the termination broadcast to the tutor pool.
pub struct Coordinator {
    inbox: mpsc::Receiver<CoordinatorMsg>,
    queue: Arc<Mutex<SessionQueue>>,
    room: Arc<WaitingRoom>,
    tutor_ready: Arc<Semaphore>,
    events: Arc<EventBus>,
    num_students: u32,
}

impl Coordinator {
    pub fn new(
        inbox: mpsc::Receiver<CoordinatorMsg>,
        queue: Arc<Mutex<SessionQueue>>,
        room: Arc<WaitingRoom>,
        tutor_ready: Arc<Semaphore>,
        events: Arc<EventBus>,
        num_students: u32,
    ) -> Self {
        Self {
            inbox,
            queue,
            room,
            tutor_ready,
            events,
            num_students,
        }
    }

    /// Run until every student is done
    ///
    /// Never holds the chair or queue lock across an inbox receive.
    pub async fn run(mut self) {
        info!(students = self.num_students, "coordinator started");

        let mut done = 0;
        while done < self.num_students {
            // Senders live in the student registry for the whole run, so a
            // closed inbox means the controller tore the center down early.
            let Some(msg) = self.inbox.recv().await else {
                break;
            };

            match msg {
                CoordinatorMsg::StudentArrived {
                    student_id,
                    helps_received,
                } => {
                    let stats = self.room.stats().await;
                    {
                        // Emitting inside the critical section keeps the
                        // event trace in queue order.
                        let mut queue = self.queue.lock().await;
                        queue.insert(student_id, helps_received);
                        self.events.emit(CenterEvent::QueuedForTutoring {
                            student_id,
                            priority: helps_received,
                            waiting_students: stats.waiting_students,
                            total_requests: stats.total_requests,
                        });
                    }
                    debug!(student_id, priority = helps_received, "student queued");
                    self.tutor_ready.add_permits(1);
                }

                CoordinatorMsg::StudentDone { student_id } => {
                    done += 1;
                    debug!(student_id, done, "student done");
                }
            }
        }

        // No student is left waiting: anyone still queued would not have
        // reported done. Closing wakes every idle tutor so it can exit.
        self.tutor_ready.close();
        info!("coordinator stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::create_event_bus;

    struct Fixture {
        tx: mpsc::Sender<CoordinatorMsg>,
        queue: Arc<Mutex<SessionQueue>>,
        tutor_ready: Arc<Semaphore>,
        events: Arc<EventBus>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_coordinator(num_students: u32) -> Fixture {
        let (tx, rx) = mpsc::channel(16);
        let queue = Arc::new(Mutex::new(SessionQueue::new()));
        let room = Arc::new(WaitingRoom::new(4));
        let tutor_ready = Arc::new(Semaphore::new(0));
        let events = create_event_bus();

        let coordinator = Coordinator::new(
            rx,
            queue.clone(),
            room,
            tutor_ready.clone(),
            events.clone(),
            num_students,
        );
        let handle = tokio::spawn(coordinator.run());

        Fixture {
            tx,
            queue,
            tutor_ready,
            events,
            handle,
        }
    }

    #[tokio::test]
    async fn test_arrival_queues_and_signals() {
        let fx = spawn_coordinator(1);
        let mut rx = fx.events.subscribe();

        fx.tx
            .send(CoordinatorMsg::StudentArrived {
                student_id: 1,
                helps_received: 0,
            })
            .await
            .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "QueuedForTutoring");
        assert_eq!(event.student_id(), 1);

        // One permit per arrival
        let permit = fx.tutor_ready.acquire().await.unwrap();
        permit.forget();
        assert_eq!(fx.queue.lock().await.len(), 1);

        fx.tx
            .send(CoordinatorMsg::StudentDone { student_id: 1 })
            .await
            .unwrap();
        fx.handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_all_done_closes_semaphore() {
        let fx = spawn_coordinator(2);

        for student_id in [1, 2] {
            fx.tx
                .send(CoordinatorMsg::StudentDone { student_id })
                .await
                .unwrap();
        }

        fx.handle.await.unwrap();
        assert!(fx.tutor_ready.is_closed());
    }

    #[tokio::test]
    async fn test_zero_students_terminates_immediately() {
        let fx = spawn_coordinator(0);
        fx.handle.await.unwrap();
        assert!(fx.tutor_ready.is_closed());
    }
}
