// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quiet-period debouncing on the tokio timer.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs only the last scheduled action, once no new one arrived for `quiet`.
///
/// Each `schedule` aborts the previous timer task, so a burst of N calls
/// produces one execution. Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Restart the quiet period; `action` runs when it elapses.
    ///
    /// Returns true if a pending action was replaced.
    pub fn schedule<F>(&mut self, action: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let replaced = self.cancel();
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            action.await;
        }));
        replaced
    }

    /// Drop the pending action, if any. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
