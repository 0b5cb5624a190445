//! Common types shared by the adapter, the driver and the host bindings.
//!
//! # Categories
//!
//! - **Interaction Types** - drag classification and drag payloads
//! - **File Types** - the [`FileHandle`] abstraction and an in-memory file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;

// =============================================================================
// Interaction Types
// =============================================================================

/// Classification of the drag currently over the drop target.
///
/// `AcceptPending` and `RejectPending` refine `Active` once the payload has
/// been inspected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragInteractionState {
    /// No drag over the target.
    #[default]
    Idle,
    /// A drag is over the target, payload not inspectable.
    Active,
    /// A drag is over the target and every dragged file would be accepted.
    AcceptPending,
    /// A drag is over the target and its payload would be rejected.
    RejectPending,
}

impl DragInteractionState {
    /// True while any drag is over the target.
    pub fn is_active(&self) -> bool {
        !matches!(self, DragInteractionState::Idle)
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, DragInteractionState::AcceptPending)
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, DragInteractionState::RejectPending)
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            DragInteractionState::Idle => "dropzone",
            DragInteractionState::Active => "dropzone dropzone-active",
            DragInteractionState::AcceptPending => "dropzone dropzone-active dropzone-accept",
            DragInteractionState::RejectPending => "dropzone dropzone-active dropzone-reject",
        }
    }
}

impl fmt::Display for DragInteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DragInteractionState::Idle => "idle",
            DragInteractionState::Active => "active",
            DragInteractionState::AcceptPending => "accept-pending",
            DragInteractionState::RejectPending => "reject-pending",
        };
        f.write_str(name)
    }
}

/// Kind of a single dragged item, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragItemKind {
    File,
    String,
}

/// One item of an in-flight drag.
///
/// Names and sizes are not available until the drop, only kind and MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragItem {
    pub kind: DragItemKind,
    /// MIME type, empty when the host does not know it
    pub mime_type: String,
}

impl DragItem {
    pub fn file(mime_type: impl Into<String>) -> Self {
        Self { kind: DragItemKind::File, mime_type: mime_type.into() }
    }

    pub fn string(mime_type: impl Into<String>) -> Self {
        Self { kind: DragItemKind::String, mime_type: mime_type.into() }
    }

    pub fn is_file(&self) -> bool {
        self.kind == DragItemKind::File
    }
}

/// What the host exposes about a drag while it is over the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragPayload {
    /// The host hides the dragged items (e.g. protected drag data store).
    Opaque,
    /// Inspectable items.
    Items(Vec<DragItem>),
}

impl DragPayload {
    /// Number of file items, `None` for an opaque payload.
    pub fn file_count(&self) -> Option<usize> {
        match self {
            DragPayload::Opaque => None,
            DragPayload::Items(items) => Some(items.iter().filter(|i| i.is_file()).count()),
        }
    }
}

// =============================================================================
// File Types
// =============================================================================

/// A file captured from a drop or a picker selection.
///
/// The readable content is host specific: browser files are `Blob`s handed to
/// the upload pipeline as-is, [`MemoryFile`] exposes its bytes directly.
pub trait FileHandle {
    fn name(&self) -> &str;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// MIME type, empty when unknown.
    fn mime_type(&self) -> &str;
}

/// File held in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    mime_type: String,
    content: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Readable byte stream over the content.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(&self.content)
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.content.len() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_state_predicates() {
        assert!(!DragInteractionState::Idle.is_active());
        assert!(DragInteractionState::Active.is_active());
        assert!(DragInteractionState::AcceptPending.is_active());
        assert!(DragInteractionState::RejectPending.is_active());

        assert!(DragInteractionState::AcceptPending.is_accept());
        assert!(!DragInteractionState::Active.is_accept());
        assert!(DragInteractionState::RejectPending.is_reject());
        assert!(!DragInteractionState::AcceptPending.is_reject());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(DragInteractionState::Idle.css_class(), "dropzone");
        assert!(DragInteractionState::RejectPending.css_class().contains("dropzone-reject"));
        assert!(DragInteractionState::RejectPending.css_class().contains("dropzone-active"));
    }

    #[test]
    fn test_payload_file_count() {
        assert_eq!(DragPayload::Opaque.file_count(), None);

        let payload = DragPayload::Items(vec![
            DragItem::file("image/png"),
            DragItem::string("text/plain"),
            DragItem::file(""),
        ]);
        assert_eq!(payload.file_count(), Some(2));
    }

    #[test]
    fn test_memory_file_reader() {
        let file = MemoryFile::new("notes.txt", "text/plain", b"hello".to_vec());
        assert_eq!(file.size(), 5);

        let mut buf = String::new();
        file.reader().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
    }
}
