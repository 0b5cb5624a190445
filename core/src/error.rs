//! Error types for the drop ingestion widget.
//!
//! - [`ConfigError`] - invalid widget configuration
//! - [`RejectionReason`] - why a dropped or selected file was not ingested
//!
//! Rejections are not failures of the widget itself: they are reported back in
//! a [`crate::DropOutcome`] and never reach the submission capability.

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors raised while parsing or validating a [`crate::DropzoneConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An `accept` entry is neither an extension nor a MIME pattern.
    #[error("Invalid accept pattern: {0:?}")]
    InvalidAcceptPattern(String),

    /// `minSize` is greater than `maxSize`.
    #[error("Invalid size bounds: minSize {min} is greater than maxSize {max}")]
    SizeBounds { min: u64, max: u64 },

    /// Configuration JSON could not be parsed.
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// File Rejections
// =============================================================================

/// Why a file was left out of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// Neither the name nor the MIME type matches an accept pattern.
    #[error("File type not accepted: {mime:?}")]
    TypeNotAccepted { mime: String },

    /// File exceeds `maxSize`.
    #[error("File is too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    /// File is below `minSize`.
    #[error("File is too small: {size} bytes (min {min})")]
    TooSmall { size: u64, min: u64 },

    /// Several files were dropped on a single-file target.
    #[error("Too many files: {count} given, only one accepted")]
    TooManyFiles { count: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
