//! Batches of files finalized by a single drop or picker selection.

use std::fmt;

/// Identifier of a batch, monotonic per adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchId(pub u64);

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch-{}", self.0)
    }
}

/// Where a batch came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchSource {
    Drop,
    Picker,
}

/// Ordered, immutable set of files awaiting dispatch.
///
/// Consumed by value, so it can only be dispatched once.
#[derive(Debug)]
pub struct PendingFileBatch<F> {
    id: BatchId,
    source: BatchSource,
    files: Vec<F>,
}

impl<F> PendingFileBatch<F> {
    pub fn new(id: BatchId, source: BatchSource, files: Vec<F>) -> Self {
        Self { id, source, files }
    }

    pub fn id(&self) -> BatchId {
        self.id
    }

    pub fn source(&self) -> BatchSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<F> IntoIterator for PendingFileBatch<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let batch = PendingFileBatch::new(BatchId(3), BatchSource::Drop, vec!["a", "b", "c"]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.id().to_string(), "batch-3");
        assert_eq!(batch.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
