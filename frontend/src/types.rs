//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - browser file handle
//! - **Upload Types** - per-file upload tracking for the queue panel
//! - **Error Types** - frontend error handling

use dropzone_core::{ConfigError, CorrelationId, FileHandle, FileRejection, Submission};
use serde::{Deserialize, Serialize};
use std::fmt;
use web_sys::File;

// =============================================================================
// File Types
// =============================================================================

/// A browser `File` captured from a drop or the file input.
///
/// Name, size and type are read once at capture.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    name: String,
    size: u64,
    mime_type: String,
    file: File,
}

impl BrowserFile {
    /// The underlying `Blob`, readable by the upload pipeline.
    pub fn blob(&self) -> &File {
        &self.file
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            mime_type: file.type_(),
            file,
        }
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// Upload status of a single file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    /// Handed to the pipeline
    Queued,
    /// Request in flight
    Uploading,
    /// Backend accepted the file
    Done,
    /// Request failed
    Failed(String),
    /// Left out by the drop zone policy, never sent
    Rejected(String),
}

impl UploadStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Queued => "upload-queued",
            UploadStatus::Uploading => "upload-uploading",
            UploadStatus::Done => "upload-done",
            UploadStatus::Failed(_) => "upload-failed",
            UploadStatus::Rejected(_) => "upload-rejected",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            UploadStatus::Queued => "🕓",
            UploadStatus::Uploading => "📤",
            UploadStatus::Done => "✅",
            UploadStatus::Failed(_) => "❌",
            UploadStatus::Rejected(_) => "🚫",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, UploadStatus::Done | UploadStatus::Failed(_) | UploadStatus::Rejected(_))
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Queued => write!(f, "queued"),
            UploadStatus::Uploading => write!(f, "uploading"),
            UploadStatus::Done => write!(f, "done"),
            UploadStatus::Failed(msg) => write!(f, "failed: {}", msg),
            UploadStatus::Rejected(msg) => write!(f, "rejected: {}", msg),
        }
    }
}

/// One row of the upload queue panel.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadEntry {
    /// Dispatch correlation, none for rejected files
    pub correlation: Option<CorrelationId>,
    pub name: String,
    pub size: u64,
    /// "3/5" style position inside the drop, when dispatched
    pub position: Option<(usize, usize)>,
    pub status: UploadStatus,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl UploadEntry {
    pub fn queued<F: FileHandle>(submission: &Submission<F>) -> Self {
        Self {
            correlation: Some(submission.correlation),
            name: submission.file.name().to_string(),
            size: submission.file.size(),
            position: Some((submission.position + 1, submission.batch_len)),
            status: UploadStatus::Queued,
            timestamp: now_timestamp(),
        }
    }

    pub fn rejected(rejection: &FileRejection) -> Self {
        let reasons = rejection
            .reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            correlation: None,
            name: rejection.name.clone(),
            size: rejection.size,
            position: None,
            status: UploadStatus::Rejected(reasons),
            timestamp: now_timestamp(),
        }
    }
}

/// Local wall-clock time, HH:MM:SS.
pub fn now_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Human-readable byte count.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// The backend refused the upload.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Drop zone configuration refused.
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use dropzone_core::{BatchId, MemoryFile, RejectionReason};

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(UploadStatus::Done.css_class(), "upload-done");
        assert_eq!(UploadStatus::Failed("x".into()).css_class(), "upload-failed");
        assert!(UploadStatus::Rejected("x".into()).is_finished());
        assert!(!UploadStatus::Uploading.is_finished());
    }

    #[test]
    fn test_rejected_entry() {
        let rejection = FileRejection {
            name: "huge.iso".into(),
            size: 10,
            reasons: vec![
                RejectionReason::TooLarge { size: 10, max: 5 },
                RejectionReason::TypeNotAccepted { mime: String::new() },
            ],
        };
        let entry = UploadEntry::rejected(&rejection);
        assert_eq!(entry.correlation, None);
        assert_eq!(entry.name, "huge.iso");
        match entry.status {
            UploadStatus::Rejected(msg) => {
                assert!(msg.contains("too large"));
                assert!(msg.contains("; "));
            }
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_queued_entry() {
        let correlation = CorrelationId::new();
        let submission = Submission {
            correlation,
            batch: BatchId(7),
            position: 2,
            batch_len: 5,
            file: MemoryFile::new("three.txt", "text/plain", vec![0; 12]),
        };

        let entry = UploadEntry::queued(&submission);
        assert_eq!(entry.correlation, Some(correlation));
        assert_eq!(entry.name, "three.txt");
        assert_eq!(entry.size, 12);
        assert_eq!(entry.position, Some((3, 5)));
        assert_eq!(entry.status, UploadStatus::Queued);
        assert_eq!(entry.timestamp.len(), 8);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Upload("Server error (500)".into());
        assert_eq!(err.to_string(), "Upload error: Server error (500)");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = ConfigError::InvalidAcceptPattern("pdf".into()).into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.to_string(), "Config error: Invalid accept pattern: \"pdf\"");
    }
}
