// src/state/history.rs
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::warn;

use super::RequestState;
use crate::model::HistoryRecord;
use crate::net::{ApiClient, ApiError};

pub const HISTORY_FAILED_MESSAGE: &str = "Failed to load history. Ensure backend is running.";
pub const HISTORY_EMPTY_MESSAGE: &str = "No history found. Upload a file first!";

struct HistoryResponse {
    seq: u64,
    result: Result<Vec<HistoryRecord>, ApiError>,
}

/// Owns the history request lifecycle. `activate` fires exactly one fetch
/// per mount (it is a no-op unless the loader is idle, however often the
/// view re-renders); `reset` marks a fresh mount. A fetch that outlives its
/// mount is dropped by the sequence-token check.
pub struct HistoryController {
    pub lifecycle: RequestState<Vec<HistoryRecord>>,
    seq: u64,
    rx: Option<Receiver<HistoryResponse>>,
}

impl HistoryController {
    pub fn new() -> Self {
        Self {
            lifecycle: RequestState::Idle,
            seq: 0,
            rx: None,
        }
    }

    /// Discard any previous outcome so the next `activate` fetches again.
    pub fn reset(&mut self) {
        self.lifecycle = RequestState::Idle;
        self.rx = None;
        // seq keeps counting so in-flight responses from before the reset
        // stay stale.
        self.seq += 1;
    }

    pub fn activate(&mut self, client: &Arc<ApiClient>) {
        if !self.lifecycle.is_idle() {
            return;
        }

        self.seq += 1;
        let seq = self.seq;
        self.lifecycle = RequestState::Pending;

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        let client = Arc::clone(client);
        thread::spawn(move || {
            let result = client.fetch_history();
            let _ = tx.send(HistoryResponse { seq, result });
        });
    }

    pub fn poll(&mut self) {
        let Some(rx) = self.rx.take() else { return };
        match rx.try_recv() {
            Ok(response) => self.apply(response.seq, response.result),
            Err(TryRecvError::Empty) => self.rx = Some(rx),
            Err(TryRecvError::Disconnected) => {
                self.apply(self.seq, Err(ApiError::Transport("worker exited".to_string())));
            }
        }
    }

    fn apply(&mut self, seq: u64, result: Result<Vec<HistoryRecord>, ApiError>) {
        if seq != self.seq || !self.lifecycle.is_pending() {
            return;
        }
        match result {
            Ok(records) => self.lifecycle = RequestState::Succeeded(records),
            Err(err) => {
                warn!(error = %err, "history fetch failed");
                self.lifecycle = RequestState::Failed(HISTORY_FAILED_MESSAGE.to_string());
            }
        }
    }
}
