//! HTTP upload service: the submission capability wired into the drop zone.
//!
//! Each submission is queued in the panel under its correlation id and
//! posted in the background as a multipart form. Nothing is awaited by the
//! caller; the outcome only ever reaches the queue panel and the console.

use dropzone_core::{CorrelationId, FileRejection, Submission};
use gloo_net::http::Request;
use leptos::*;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, BrowserFile, UploadEntry, UploadStatus};
use crate::{MAX_QUEUE_ENTRIES, UPLOAD_FIELD, UPLOAD_PATH};

/// Error body returned by the backend on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Posts files to the backend and tracks them in the queue signal.
#[derive(Clone, Copy)]
pub struct UploadService {
    queue: WriteSignal<Vec<UploadEntry>>,
    backend_url: &'static str,
}

impl UploadService {
    pub fn new(queue: WriteSignal<Vec<UploadEntry>>, backend_url: &'static str) -> Self {
        Self { queue, backend_url }
    }

    /// Enqueue one file and start its upload in the background.
    pub fn submit(&self, submission: Submission<BrowserFile>) {
        self.push(UploadEntry::queued(&submission));

        let service = *self;
        let correlation = submission.correlation;
        let file = submission.file;

        wasm_bindgen_futures::spawn_local(async move {
            service.set_status(correlation, UploadStatus::Uploading);

            match upload_file(file.blob(), service.backend_url).await {
                Ok(()) => {
                    log::info!("✅ Uploaded {} ({})", file.blob().name(), correlation);
                    service.set_status(correlation, UploadStatus::Done);
                }
                Err(e) => {
                    log::error!("❌ Upload of {} failed: {}", file.blob().name(), e);
                    service.set_status(correlation, UploadStatus::Failed(e.to_string()));
                }
            }
        });
    }

    /// Show files the drop zone refused.
    pub fn record_rejections(&self, rejections: Vec<FileRejection>) {
        for rejection in &rejections {
            self.push(UploadEntry::rejected(rejection));
        }
    }

    fn push(&self, entry: UploadEntry) {
        self.queue.update(|entries| {
            entries.push(entry);
            // Keep max entries in memory
            if entries.len() > MAX_QUEUE_ENTRIES {
                entries.remove(0);
            }
        });
    }

    fn set_status(&self, correlation: CorrelationId, status: UploadStatus) {
        self.queue.update(|entries| {
            if let Some(entry) = entries.iter_mut().find(|e| e.correlation == Some(correlation)) {
                entry.status = status;
            }
        });
    }
}

/// Upload a single file to the backend.
pub async fn upload_file(file: &File, backend_url: &str) -> AppResult<()> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}{}", backend_url, UPLOAD_PATH);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Upload(format!(
            "Server error ({}): {}",
            response.status(),
            server_message(&body)
        )));
    }

    Ok(())
}

/// Extract a readable message from an error body, JSON or plain text.
fn server_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(msg), .. }) | Ok(ErrorBody { message: Some(msg), .. }) => msg,
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_json_error() {
        let body = r#"{"error": "bucket not found"}"#;
        assert_eq!(server_message(body), "bucket not found");
    }

    #[test]
    fn test_server_message_json_message() {
        let body = r#"{"message": "Access Denied.", "code": "AccessDenied"}"#;
        assert_eq!(server_message(body), "Access Denied.");
    }

    #[test]
    fn test_server_message_plain_text() {
        assert_eq!(server_message("  Request Entity Too Large\n"), "Request Entity Too Large");
    }

    #[test]
    fn test_server_message_json_without_known_fields() {
        assert_eq!(server_message(r#"{"status": 500}"#), r#"{"status": 500}"#);
    }
}
