use std::time::Duration;

use tokio::sync::mpsc;

use crate::{
    domain::update::Update,
    usecases::{
        contracts::{ActionSink, Clock, Notifier},
        store::Store,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopOptions {
    /// After the update channel closes, keep running until no scheduled task is left.
    pub settle: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopReport {
    pub updates_received: usize,
    pub updates_committed: usize,
    pub tasks_fired: usize,
    pub tasks_left: usize,
}

/// Feeds updates into the store in delivery order and fires scheduled tasks when their
/// deadline passes. Returns once the channel is closed (and, with `settle`, once the
/// scheduler is drained).
pub async fn run<A, N, C>(
    store: &mut Store<A, N>,
    mut updates: mpsc::Receiver<Update>,
    clock: &C,
    options: LoopOptions,
) -> LoopReport
where
    A: ActionSink,
    N: Notifier,
    C: Clock,
{
    let mut report = LoopReport::default();

    loop {
        let deadline = store.next_task_due();

        tokio::select! {
            received = updates.recv() => {
                let Some(update) = received else {
                    break;
                };
                report.updates_received += 1;
                if store.dispatch(update, clock.now_ms()) {
                    report.updates_committed += 1;
                }
                report.tasks_fired += store.run_due_tasks(clock.now_ms());
            }
            _ = sleep_until(deadline, clock), if deadline.is_some() => {
                report.tasks_fired += store.run_due_tasks(clock.now_ms());
            }
        }
    }

    if options.settle {
        while let Some(due_ms) = store.next_task_due() {
            sleep_until(Some(due_ms), clock).await;
            report.tasks_fired += store.run_due_tasks(clock.now_ms());
        }
    }

    report.tasks_left = store.pending_tasks();
    tracing::debug!(
        updates_received = report.updates_received,
        updates_committed = report.updates_committed,
        tasks_fired = report.tasks_fired,
        tasks_left = report.tasks_left,
        "update loop finished"
    );

    report
}

async fn sleep_until<C: Clock>(due_ms: Option<i64>, clock: &C) {
    let Some(due_ms) = due_ms else {
        return;
    };
    let wait_ms = u64::try_from(due_ms.saturating_sub(clock.now_ms())).unwrap_or(0);
    tokio::time::sleep(Duration::from_millis(wait_ms)).await;
}
