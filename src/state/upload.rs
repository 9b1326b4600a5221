// src/state/upload.rs
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::warn;

use super::RequestState;
use crate::model::AnalysisResult;
use crate::net::{ApiClient, ApiError};

pub const NO_FILE_MESSAGE: &str = "Please select a CSV file first.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please check the file and try again.";

struct UploadResponse {
    seq: u64,
    result: Result<AnalysisResult, ApiError>,
}

/// Owns the selected dataset file and the upload request lifecycle. The
/// request runs on a background thread; `poll` applies its single response
/// on the UI thread. Each submission is tagged with a sequence token and
/// only a response carrying the latest token is applied, so a superseded
/// request can never overwrite a newer result.
pub struct UploadController {
    pub selected_file: Option<PathBuf>,
    pub lifecycle: RequestState<AnalysisResult>,
    pub validation_error: Option<String>,
    seq: u64,
    rx: Option<Receiver<UploadResponse>>,
}

impl UploadController {
    pub fn new() -> Self {
        Self {
            selected_file: None,
            lifecycle: RequestState::Idle,
            validation_error: None,
            seq: 0,
            rx: None,
        }
    }

    /// Replace the held file. Clears any prior error message; the previous
    /// result (if any) stays visible until the next submission settles.
    pub fn select_file(&mut self, path: PathBuf) {
        self.selected_file = Some(path);
        self.validation_error = None;
        if self.lifecycle.failure().is_some() {
            self.lifecycle = RequestState::Idle;
        }
    }

    /// Start an upload. No-op while a request is already pending; with no
    /// file selected this sets a validation message and issues no request.
    pub fn submit(&mut self, client: &Arc<ApiClient>) {
        if self.lifecycle.is_pending() {
            return;
        }
        let Some(path) = self.selected_file.clone() else {
            self.validation_error = Some(NO_FILE_MESSAGE.to_string());
            return;
        };

        self.validation_error = None;
        self.seq += 1;
        let seq = self.seq;
        self.lifecycle = RequestState::Pending;

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        let client = Arc::clone(client);
        thread::spawn(move || {
            let result = client.upload_dataset(&path);
            // Receiver may be gone if a newer submission replaced it.
            let _ = tx.send(UploadResponse { seq, result });
        });
    }

    /// Drain the in-flight request's channel, if any. Called once per frame.
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

    fn apply(&mut self, seq: u64, result: Result<AnalysisResult, ApiError>) {
        if seq != self.seq || !self.lifecycle.is_pending() {
            return;
        }
        match result {
            Ok(analysis) => self.lifecycle = RequestState::Succeeded(analysis),
            Err(err) => {
                warn!(error = %err, "dataset upload failed");
                self.lifecycle = RequestState::Failed(UPLOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// The message to surface next to the upload form, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.validation_error.as_deref().or_else(|| self.lifecycle.failure())
    }
}
