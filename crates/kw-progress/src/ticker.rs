//! Live countdown ticker.
//!
//! The progress card refreshes once per second, but only while the watched
//! date actually is the current date.  [`ProgressTicker`] owns that timer:
//! a worker thread emits a [`ProgressSnapshot`] per tick and stops on its
//! own once the wall clock rolls past the watched day.  Dropping the handle
//! cancels the worker, so no timer outlives its owner.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use kw_time::clock;
use kw_time::date::Date;

use crate::progress::{progress_snapshot, ProgressSnapshot};

/// Interval between ticks.
const TICK: Duration = Duration::from_secs(1);

/// Handle to the ticker worker thread.
///
/// Snapshots arrive on an internal channel; [`latest`](Self::latest) drains
/// it.  The worker is joined on drop.
pub struct ProgressTicker {
    snapshot_rx: Receiver<ProgressSnapshot>,
    stop_tx: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    /// Start a ticker for `selected`.
    ///
    /// When `selected` is today, a snapshot arrives immediately and then
    /// once per second until the date rolls over or the ticker is dropped.
    /// For any other date a single static snapshot — taken at that day's
    /// midnight — is emitted and the worker exits by itself.
    pub fn start(selected: Date) -> Self {
        let (snapshot_tx, snapshot_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel();
        let worker = thread::spawn(move || run(selected, &snapshot_tx, &stop_rx));
        ProgressTicker {
            snapshot_rx,
            stop_tx,
            worker: Some(worker),
        }
    }

    /// Drain pending snapshots and return the most recent one, if any
    /// arrived since the last call.
    pub fn latest(&self) -> Option<ProgressSnapshot> {
        let mut latest = None;
        while let Ok(snapshot) = self.snapshot_rx.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }

    /// Block until the next snapshot arrives, or `None` once the worker has
    /// finished and the channel drained.
    pub fn recv(&self) -> Option<ProgressSnapshot> {
        self.snapshot_rx.recv().ok()
    }

    /// Stop the worker and wait for it to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(worker) = self.worker.take() {
            // A send failure means the worker already exited on its own.
            let _ = self.stop_tx.send(());
            let _ = worker.join();
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(selected: Date, snapshot_tx: &Sender<ProgressSnapshot>, stop_rx: &Receiver<()>) {
    if selected != clock::today() {
        // Non-today selections get one static snapshot; nothing ticks.
        debug!(%selected, "emitting static progress snapshot");
        let _ = snapshot_tx.send(progress_snapshot(clock::Timestamp::start_of_day(selected)));
        return;
    }

    debug!(%selected, "progress ticker started");
    let _ = snapshot_tx.send(progress_snapshot(clock::now()));
    loop {
        match stop_rx.recv_timeout(TICK) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                debug!(%selected, "progress ticker cancelled");
                return;
            }
            Err(RecvTimeoutError::Timeout) => {
                let now = clock::now();
                let _ = snapshot_tx.send(progress_snapshot(now));
                if now.date() != selected {
                    debug!(%selected, "progress ticker stopped at day rollover");
                    return;
                }
            }
        }
    }
}
