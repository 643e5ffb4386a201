//! Tokio drive loop for the workout countdown
//!
//! Wraps the pure countdown state machine in a one-second interval task.
//! Join handles are tracked, cancellation is explicit, and dropping a
//! running timer cancels its task.

use std::sync::Arc;
use std::time::Duration;

use goalfuel_core::{Countdown, TimerTick};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::InfraError;

const JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Countdown timer driven by a spawned one-second tick task.
pub struct WorkoutTimer {
    countdown: Arc<Mutex<Countdown>>,
    tick_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
}

impl WorkoutTimer {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            countdown: Arc::new(Mutex::new(Countdown::new(duration_seconds))),
            tick_handle: None,
            cancellation: CancellationToken::new(),
        }
    }

    /// Start ticking. Each elapsed second is reported on the returned
    /// channel; the task ends on its own once the countdown finishes.
    pub fn start(&mut self) -> Result<mpsc::UnboundedReceiver<TimerTick>, InfraError> {
        if self.is_running() {
            return Err(InfraError::Timer("timer is already running".into()));
        }

        self.cancellation = CancellationToken::new();
        let cancel = self.cancellation.clone();
        let countdown = Arc::clone(&self.countdown);
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; swallow it so the first
            // reported second actually took a second.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("workout timer cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        let tick = countdown.lock().tick();
                        let finished = tick == TimerTick::Finished;
                        if tx.send(tick).is_err() {
                            debug!("workout timer receiver dropped");
                            break;
                        }
                        if finished {
                            info!("workout timer finished");
                            break;
                        }
                    }
                }
            }
        });

        self.tick_handle = Some(handle);
        info!(duration_seconds = self.countdown.lock().duration_seconds(), "workout timer started");
        Ok(rx)
    }

    /// Stop the timer and wait for the tick task to wind down.
    pub async fn stop(&mut self) -> Result<(), InfraError> {
        let Some(handle) = self.tick_handle.take() else {
            return Err(InfraError::Timer("timer is not running".into()));
        };

        self.cancellation.cancel();
        tokio::time::timeout(JOIN_TIMEOUT, handle)
            .await
            .map_err(|_| InfraError::Timer("timed out waiting for tick task".into()))?
            .map_err(|err| InfraError::Timer(format!("tick task panicked: {err}")))?;

        info!("workout timer stopped");
        Ok(())
    }

    pub fn toggle_pause(&self) {
        self.countdown.lock().toggle_pause();
    }

    pub fn is_paused(&self) -> bool {
        self.countdown.lock().is_paused()
    }

    pub fn is_running(&self) -> bool {
        self.tick_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.lock().remaining_seconds()
    }

    /// `h:mm:ss` when an hour or more remains, `mm:ss` otherwise.
    pub fn formatted_remaining(&self) -> String {
        self.countdown.lock().formatted_remaining()
    }
}

impl Drop for WorkoutTimer {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("workout timer dropped while running, cancelling tick task");
            self.cancellation.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_second_until_finished() {
        let mut timer = WorkoutTimer::new(3);
        let mut ticks = timer.start().expect("start");

        assert_eq!(ticks.recv().await, Some(TimerTick::Running { remaining_seconds: 2 }));
        assert_eq!(ticks.recv().await, Some(TimerTick::Running { remaining_seconds: 1 }));
        assert_eq!(ticks.recv().await, Some(TimerTick::Finished));
        assert_eq!(ticks.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn double_start_is_rejected() {
        let mut timer = WorkoutTimer::new(60);
        let _ticks = timer.start().expect("start");

        assert!(timer.start().is_err());
        timer.stop().await.expect("stop");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_without_start_is_an_error() {
        let mut timer = WorkoutTimer::new(60);
        assert!(timer.stop().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn paused_timer_holds_its_value() {
        let mut timer = WorkoutTimer::new(60);
        // Pause before starting so every tick the task emits sees the
        // paused state, regardless of how far it runs ahead of us.
        timer.toggle_pause();
        let mut ticks = timer.start().expect("start");

        assert_eq!(ticks.recv().await, Some(TimerTick::Running { remaining_seconds: 60 }));
        assert_eq!(ticks.recv().await, Some(TimerTick::Running { remaining_seconds: 60 }));
        assert!(timer.is_paused());
        assert_eq!(timer.remaining_seconds(), 60);

        timer.stop().await.expect("stop");
    }
}
