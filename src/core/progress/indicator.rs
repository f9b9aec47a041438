//! Timer-driven progress indicator.
//!
//! Each run spawns one animation task that owns the status item. The task
//! renders, then waits for either the next tick or the stop signal; the
//! stop signal makes it tear down and exit.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{sync::oneshot, task::JoinHandle};

use super::state::ProgressState;
use crate::core::host::StatusItem;

/// Delay between two frames.
pub const TICK_INTERVAL: Duration = Duration::from_millis(180);

type SharedState = Arc<Mutex<ProgressState>>;

struct Run {
    state: SharedState,
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

pub struct ProgressIndicator {
    template: ProgressState,
    interval: Duration,
    run: Option<Run>,
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new(ProgressState::default(), TICK_INTERVAL)
    }
}

impl ProgressIndicator {
    pub fn new(template: ProgressState, interval: Duration) -> Self {
        Self {
            template,
            interval,
            run: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// Start animating. `acquire` is only called when the indicator was
    /// inactive, so repeated starts never create a second status item.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, acquire: F)
    where
        F: FnOnce() -> Box<dyn StatusItem>,
    {
        if self.run.is_some() {
            return;
        }

        let mut state = self.template.clone();
        state.reset();
        let state = Arc::new(Mutex::new(state));
        let (stop, stopped) = oneshot::channel();
        let task = tokio::spawn(animate(
            Arc::clone(&state),
            acquire(),
            stopped,
            self.interval,
        ));

        tracing::debug!("progress indicator started");
        self.run = Some(Run { state, stop, task });
    }

    /// Stop animating and wait for the teardown to finish. No-op when
    /// inactive.
    pub async fn stop(&mut self) {
        let Some(run) = self.run.take() else {
            return;
        };

        // The task may already be gone if the runtime is shutting down.
        let _ = run.stop.send(());
        if let Err(err) = run.task.await {
            tracing::warn!("progress indicator task failed: {}", err);
        }
        tracing::debug!("progress indicator stopped");
    }

    /// Update the detail message. Picked up by the next frame.
    pub fn set_detail(&self, message: &str) {
        if let Some(run) = &self.run {
            lock(&run.state).set_detail(message);
        }
    }

    pub fn clear_detail(&self) {
        if let Some(run) = &self.run {
            lock(&run.state).clear_detail();
        }
    }

    /// Label the next frame will render, if running.
    pub fn current_label(&self) -> Option<String> {
        self.run.as_ref().map(|run| lock(&run.state).label())
    }
}

async fn animate(
    state: SharedState,
    mut item: Box<dyn StatusItem>,
    mut stopped: oneshot::Receiver<()>,
    interval: Duration,
) {
    loop {
        let label = lock(&state).tick();
        item.set_text(&label);

        tokio::select! {
            biased;
            // A dropped sender counts as a stop as well.
            _ = &mut stopped => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    item.dispose();
    lock(&state).reset();
}

fn lock(state: &SharedState) -> MutexGuard<'_, ProgressState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
