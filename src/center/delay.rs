//! Simulated think and tutoring time

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::config::DelayConfig;

/// Simulated time a worker spends off the shared state
///
/// The scheduling core never sleeps directly; it goes through this trait so
/// tests can substitute an implementation that returns immediately.
#[async_trait]
pub trait Delay: Send + Sync {
    /// A student programming before it decides to seek help
    async fn thinking(&self);

    /// One tutoring session, observed by both the tutor and the student
    async fn tutoring(&self);
}

/// Random think time, fixed session time
pub struct RandomDelay {
    think_max: Duration,
    session: Duration,
}

impl RandomDelay {
    pub fn new(think_max: Duration, session: Duration) -> Self {
        Self { think_max, session }
    }

    pub fn from_config(config: &DelayConfig) -> Self {
        Self::new(
            Duration::from_micros(config.think_max_us),
            Duration::from_micros(config.session_us),
        )
    }
}

#[async_trait]
impl Delay for RandomDelay {
    async fn thinking(&self) {
        let max = self.think_max.as_micros() as u64;
        if max == 0 {
            return;
        }
        let us = rand::rng().random_range(0..max);
        tokio::time::sleep(Duration::from_micros(us)).await;
    }

    async fn tutoring(&self) {
        if !self.session.is_zero() {
            tokio::time::sleep(self.session).await;
        }
    }
}

/// Zero delay everywhere; makes scenario tests deterministic and fast
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn thinking(&self) {}

    async fn tutoring(&self) {}
}
