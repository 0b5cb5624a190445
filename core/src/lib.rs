//! # Dropzone core - drag classification, batch capture and dispatch
//!
//! Host-independent logic behind the drop ingestion widget. A host binding
//! feeds normalized drag/drop/picker events into an [`InteractionAdapter`],
//! renders from the [`DragInteractionState`] it publishes, and receives one
//! [`Submission`] per accepted file through the injected
//! [`SubmissionCapability`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────────┐     ┌────────────────┐     ┌────────────┐
//! │ Host events │────▶│ InteractionAdapter │────▶│ DispatchDriver │────▶│  submit()  │
//! │ (drag/drop) │     │  (state + policy)  │     │ (one per file) │     │ (external) │
//! └─────────────┘     └────────────────────┘     └────────────────┘     └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use dropzone_core::{DropzoneConfig, InteractionAdapter, MemoryFile, Submission};
//!
//! let mut adapter = InteractionAdapter::new(DropzoneConfig::default(), |s: Submission<MemoryFile>| {
//!     println!("uploading {:?} as {}", s.file.content().len(), s.correlation);
//! })
//! .unwrap();
//!
//! let outcome = adapter.drop_files(vec![MemoryFile::new("report.pdf", "application/pdf", vec![0; 2048])]);
//! assert_eq!(outcome.dispatched(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Configuration errors and rejection reasons
//! - [`types`] - Interaction state, drag payloads, file handles
//! - [`config`] - Widget configuration and accept policy
//! - [`state`] - Observable state and drag tracking
//! - [`style`] - State to inline style mapping
//! - [`batch`] - Pending file batches
//! - [`dispatch`] - Dispatch driver and submission capability
//! - [`adapter`] - Interaction adapter

// Core modules
pub mod error;
pub mod types;

// Configuration
pub mod config;

// Interaction
pub mod state;
pub mod style;

// Ingestion
pub mod batch;
pub mod dispatch;
pub mod adapter;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, ConfigResult, RejectionReason};

// =============================================================================
// Re-exports - Types
// =============================================================================

pub use types::{DragInteractionState, DragItem, DragItemKind, DragPayload, FileHandle, MemoryFile};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{AcceptPattern, AcceptPolicy, DropzoneConfig};

// =============================================================================
// Re-exports - Interaction
// =============================================================================

pub use state::{classify, DragTracker, StateWatch, SubscriptionId};
pub use style::DropzoneStyle;

// =============================================================================
// Re-exports - Ingestion
// =============================================================================

pub use batch::{BatchId, BatchSource, PendingFileBatch};
pub use dispatch::{CorrelationId, DispatchDriver, DispatchReceipt, Submission, SubmissionCapability};
pub use adapter::{ClickDisposition, DropOutcome, FileRejection, InteractionAdapter};
