//! Console logger - renders center events as the classic progress log
//!
//! Subscribes to the EventBus and writes one line per event to stdout, in the
//! format the simulator has always printed. `SessionStarted` is bookkeeping
//! for trace analysis and has no console line.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::bus::EventBus;
use super::types::CenterEvent;

/// Render an event as its console line, or `None` for events that do not
/// appear in the progress log.
pub fn render(event: &CenterEvent) -> Option<String> {
    match event {
        CenterEvent::NoChair { student_id } => Some(format!(
            "S: Student {} found no empty chair. Will try again later.",
            student_id
        )),
        CenterEvent::TookSeat {
            student_id,
            free_chairs,
        } => Some(format!(
            "S: Student {} takes a seat. Empty chairs = {}.",
            student_id, free_chairs
        )),
        CenterEvent::QueuedForTutoring {
            student_id,
            priority,
            waiting_students,
            total_requests,
        } => Some(format!(
            "C: Student {} with priority {} added to the queue. Waiting students now = {}. Total requests = {}.",
            student_id, priority, waiting_students, total_requests
        )),
        CenterEvent::SessionStarted { .. } => None,
        CenterEvent::TutoredSession {
            student_id,
            tutor_id,
            students_tutored_now,
            sessions_tutored,
        } => Some(format!(
            "T: Student {} tutored by Tutor {}. Students tutored now = {}. Total sessions tutored = {}.",
            student_id, tutor_id, students_tutored_now, sessions_tutored
        )),
        CenterEvent::ReceivedHelp {
            student_id,
            tutor_id,
        } => Some(format!(
            "S: Student {} received help from Tutor {}.",
            student_id, tutor_id
        )),
    }
}

/// Consume events from the bus and print them until the bus closes
///
/// Meant to be spawned as a background task.
pub async fn run_console_logger(bus: Arc<EventBus>) {
    let mut rx = bus.subscribe();
    drop(bus);

    loop {
        match rx.recv().await {
            Ok(event) => {
                if let Some(line) = render(&event) {
                    println!("{}", line);
                }
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                warn!(missed, "console logger lagged behind, missed events");
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!("console logger: bus closed, shutting down");
                break;
            }
        }
    }
}

/// Spawn the console logger as a background task
pub fn spawn_console_logger(bus: Arc<EventBus>) -> JoinHandle<()> {
    tokio::spawn(run_console_logger(bus))
}
