//! Minimum-spacing gate shared by every outbound provider call.
//!
//! Alpha Vantage's free tier allows 5 calls per minute for the whole API key, so
//! the gate is a single serialization point rather than a per-endpoint limiter.
//! There is no burst allowance: each admission is at least `interval` after the
//! previous one, and callers are admitted in the order they arrived.

use std::time::Duration;

use log::debug;
use tokio::{
    sync::Mutex,
    time::{Instant, sleep_until},
};

pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1200);

#[derive(Debug)]
pub struct RateGate {
    interval: Duration,
    last_dispatch: Mutex<Option<Instant>>,
}

impl RateGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_dispatch: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until a dispatch is permitted and records it.
    ///
    /// The lock is held across the wait. `tokio::sync::Mutex` queues waiters
    /// fairly, which is what keeps admissions in arrival order.
    pub async fn admit(&self) {
        let mut last_dispatch = self.last_dispatch.lock().await;

        if let Some(previous) = *last_dispatch {
            let ready_at = previous + self.interval;
            let wait = ready_at.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                debug!("Rate gate: waiting {:?} before next dispatch", wait);
                sleep_until(ready_at).await;
            }
        }

        *last_dispatch = Some(Instant::now());
    }
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
