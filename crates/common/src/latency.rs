//! Artificial request latency for load testing.
//!
//! A single injector is shared by every handler of a process. While enabled,
//! each request sleeps for the same randomly chosen delay before it is served.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rand::Rng;
use tracing::info;

#[derive(Debug)]
pub struct LatencyInjector {
    delay_ms: AtomicU64,
    max_delay_ms: u64,
}

impl LatencyInjector {
    pub fn new(max_delay_ms: u64) -> Self {
        Self { delay_ms: AtomicU64::new(0), max_delay_ms }
    }

    /// Flip the toggle. Enabling picks a fresh delay below `max_delay_ms`.
    /// Returns the delay now in effect; zero means disabled.
    pub fn toggle(&self) -> Duration {
        let max = self.max_delay_ms;
        let previous = self
            .delay_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                if current == 0 {
                    Some(pick_delay(max))
                } else {
                    Some(0)
                }
            })
            .unwrap_or_default();
        let current = self.current();
        if previous == 0 {
            info!(delay_ms = current.as_millis() as u64, "extra latency enabled");
        } else {
            info!("extra latency disabled");
        }
        current
    }

    pub fn current(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::SeqCst))
    }

    pub fn is_enabled(&self) -> bool {
        self.delay_ms.load(Ordering::SeqCst) > 0
    }

    /// Sleep for the configured delay. Returns `true` when a delay was applied.
    pub async fn apply(&self) -> bool {
        let delay = self.current();
        if delay.is_zero() {
            return false;
        }
        tokio::time::sleep(delay).await;
        true
    }
}

impl Default for LatencyInjector {
    fn default() -> Self {
        Self::new(1750)
    }
}

// A zero pick would leave the toggle looking disabled, so the floor is 1ms.
fn pick_delay(max_delay_ms: u64) -> u64 {
    if max_delay_ms <= 1 {
        return 1;
    }
    rand::thread_rng().gen_range(1..max_delay_ms)
}
