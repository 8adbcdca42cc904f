use tokio::time::Instant;

use crate::usecases::contracts::Clock;

/// Wall clock anchored once at creation and advanced by the tokio timer, so paused
/// test runtimes move it together with their sleeps.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeClock {
    base_ms: i64,
    started: Instant,
}

impl RuntimeClock {
    pub fn new() -> Self {
        Self::starting_at(chrono::Utc::now().timestamp_millis())
    }

    pub fn starting_at(base_ms: i64) -> Self {
        Self {
            base_ms,
            started: Instant::now(),
        }
    }
}

impl Default for RuntimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RuntimeClock {
    fn now_ms(&self) -> i64 {
        let elapsed_ms = i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.base_ms.saturating_add(elapsed_ms)
    }
}
