//! Wiring and lifecycle of the whole center

use std::collections::HashMap;
use std::sync::Arc;

use eyre::Result;
use futures::future::join_all;
use serde::Serialize;
use tokio::sync::{Mutex, Semaphore, mpsc};
use tracing::info;

use crate::config::ChannelConfig;
use crate::events::EventBus;

use super::coordinator::Coordinator;
use super::delay::Delay;
use super::error::CenterError;
use super::queue::SessionQueue;
use super::room::WaitingRoom;
use super::student::Student;
use super::tutor::Tutor;

/// The four run parameters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CenterParams {
    pub students: u32,
    pub tutors: u32,
    pub chairs: u32,
    pub helps: u32,
}

impl CenterParams {
    /// Reject parameter combinations the center cannot serve
    pub fn validate(&self) -> Result<(), CenterError> {
        if self.students > 0 {
            if self.tutors == 0 {
                return Err(CenterError::NoTutors);
            }
            if self.chairs == 0 {
                return Err(CenterError::NoChairs);
            }
        }
        Ok(())
    }
}

/// Final accounting of a completed run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CenterReport {
    pub students: u32,
    pub tutors: u32,
    pub chairs: u32,
    pub helps: u32,
    pub sessions_tutored: u64,
    pub total_requests: u64,
    pub students_done: u32,
}

/// Builds the shared state, spawns every worker, and joins them
pub struct Controller {
    params: CenterParams,
    channels: ChannelConfig,
    events: Arc<EventBus>,
    delay: Arc<dyn Delay>,
}

impl Controller {
    pub fn new(
        params: CenterParams,
        channels: ChannelConfig,
        events: Arc<EventBus>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            params,
            channels,
            events,
            delay,
        }
    }

    /// Run the center to completion and return the final counters
    pub async fn run(self) -> Result<CenterReport> {
        self.params.validate()?;
        info!(
            students = self.params.students,
            tutors = self.params.tutors,
            chairs = self.params.chairs,
            helps = self.params.helps,
            "center starting"
        );

        let room = Arc::new(WaitingRoom::new(self.params.chairs));
        let queue = Arc::new(Mutex::new(SessionQueue::new()));
        let tutor_ready = Arc::new(Semaphore::new(0));
        let (coord_tx, coord_rx) = mpsc::channel(self.channels.coordinator_inbox);

        // Private inboxes, with senders registered by id for tutor lookup
        let mut registry = HashMap::new();
        let mut student_inboxes = Vec::with_capacity(self.params.students as usize);
        for id in 1..=self.params.students {
            let (tx, rx) = mpsc::channel(self.channels.student_inbox);
            registry.insert(id, tx);
            student_inboxes.push((id, rx));
        }
        let registry = Arc::new(registry);

        let coordinator = Coordinator::new(
            coord_rx,
            queue.clone(),
            room.clone(),
            tutor_ready.clone(),
            self.events.clone(),
            self.params.students,
        );
        let coordinator_handle = tokio::spawn(coordinator.run());

        let tutor_handles: Vec<_> = (1..=self.params.tutors)
            .map(|id| {
                let tutor = Tutor::new(
                    id,
                    queue.clone(),
                    room.clone(),
                    tutor_ready.clone(),
                    registry.clone(),
                    self.events.clone(),
                    self.delay.clone(),
                );
                tokio::spawn(tutor.run())
            })
            .collect();

        let student_handles: Vec<_> = student_inboxes
            .into_iter()
            .map(|(id, inbox)| {
                let student = Student::new(
                    id,
                    self.params.helps,
                    inbox,
                    coord_tx.clone(),
                    room.clone(),
                    self.events.clone(),
                    self.delay.clone(),
                );
                tokio::spawn(student.run())
            })
            .collect();
        drop(coord_tx);

        // Students finish first, then the coordinator notices and releases
        // the tutors
        for result in join_all(student_handles).await {
            result?;
        }
        coordinator_handle.await?;
        for result in join_all(tutor_handles).await {
            result?;
        }

        let stats = room.stats().await;
        info!(
            sessions_tutored = stats.sessions_tutored,
            total_requests = stats.total_requests,
            "center finished"
        );

        Ok(CenterReport {
            students: self.params.students,
            tutors: self.params.tutors,
            chairs: self.params.chairs,
            helps: self.params.helps,
            sessions_tutored: stats.sessions_tutored,
            total_requests: stats.total_requests,
            students_done: stats.students_done,
        })
    }
}
