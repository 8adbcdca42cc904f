use anyhow::Result;

use crate::domain::effects::{ActionIntent, Notification};

/// Receives intents that need the network layer (loads, refreshes).
pub trait ActionSink {
    fn request(&mut self, intent: &ActionIntent) -> Result<()>;
}

pub trait Notifier {
    fn notify(&mut self, notification: &Notification) -> Result<()>;
}

/// Wall-clock milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;
}
