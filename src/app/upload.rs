// WellScope - app/upload.rs
//
// Upload lifecycle management. Runs the multipart upload on a background
// thread; the UI disables the upload control while one is in flight, so at
// most one upload worker exists at a time and no generation tagging is
// needed here.

use crate::core::model::UploadEvent;
use crate::net::gateway::Gateway;
use crate::util::constants;
use crate::util::error::GatewayError;
use std::path::PathBuf;
use std::sync::mpsc;

/// Manages LAS uploads on a background thread.
pub struct UploadManager {
    tx: mpsc::Sender<UploadEvent>,
    rx: mpsc::Receiver<UploadEvent>,
}

impl UploadManager {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Start uploading `path`. The caller is responsible for the
    /// one-at-a-time guard (`AppState::upload_in_progress`).
    pub fn start_upload(&self, gateway: &Gateway, path: PathBuf) {
        let tx = self.tx.clone();
        let gateway = gateway.clone();

        std::thread::spawn(move || match gateway.upload_file(&path) {
            Ok(outcome) => {
                tracing::info!(file = %path.display(), ?outcome, "Upload completed");
                let _ = tx.send(UploadEvent::Completed { outcome });
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Upload failed");
                let _ = tx.send(UploadEvent::Failed {
                    message: upload_failure_message(&e),
                });
            }
        });
    }

    /// Poll for events without blocking, bounded per frame.
    pub fn poll(&self) -> Vec<UploadEvent> {
        let mut events = Vec::new();
        while events.len() < constants::MAX_EVENTS_PER_FRAME {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }
        events
    }
}

impl Default for UploadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline message for a failed upload: the backend's own reason when it gave
/// one, the local error for problems that never reached the wire, and a
/// generic fallback for everything else.
fn upload_failure_message(error: &GatewayError) -> String {
    if let Some(detail) = error.backend_detail() {
        return detail.to_string();
    }
    match error {
        GatewayError::Io { .. } | GatewayError::FileTooLarge { .. } => error.to_string(),
        _ => "Upload failed due to server error.".to_string(),
    }
}
