use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::debug;

/// Shortest accepted tick period.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Invokes a callback at a fixed period on the tokio runtime.
///
/// The first call happens immediately. Calls never overlap: a slow callback
/// delays the following ticks instead of bunching them up. Stopping, or
/// dropping the scheduler, cancels the task so no tick runs afterwards.
#[derive(Debug)]
pub struct PollScheduler {
    task: Option<JoinHandle<()>>,
    period: Duration,
}

impl PollScheduler {
    /// Start calling `on_tick` every `period`, at least [`MIN_PERIOD`].
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        debug!(?period, "Starting poll scheduler");

        let task = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                on_tick();
            }
        });

        Self {
            task: Some(task),
            period,
        }
    }

    /// Tick period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether ticks are still being delivered
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel all future ticks. Idempotent.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Stopping poll scheduler");
            task.abort();
        }
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
