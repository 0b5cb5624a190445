//! UI Components for the drop zone application.
//!
//! # Layout Components
//! - [`Hero`] - Title and hint, shown inside the drop target
//!
//! # Feature Components
//! - [`Dropzone`] - Drag & drop target with click-to-browse fallback
//! - [`UploadQueue`] - Per-file upload status, keyed by correlation id

mod dropzone;
mod hero;
mod upload_queue;

pub use dropzone::*;
pub use hero::*;
pub use upload_queue::*;
