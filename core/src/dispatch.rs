//! Dispatch driver: forwards each file of a batch to the submission capability.
//!
//! Every file is submitted exactly once, in batch order, back to back. The
//! capability is fire-and-forget: nothing is awaited, filtered, retried or
//! observed here. Each submission carries a fresh [`CorrelationId`] so the
//! upload pipeline can key per-file progress and abort state on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::batch::{BatchId, PendingFileBatch};
use crate::types::FileHandle;

/// Per-file token minted at dispatch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A file handed to the upload pipeline.
#[derive(Debug)]
pub struct Submission<F> {
    pub correlation: CorrelationId,
    pub batch: BatchId,
    /// Zero-based position in the batch
    pub position: usize,
    /// Number of files in the batch
    pub batch_len: usize,
    pub file: F,
}

/// The external upload entry point.
///
/// Must not block. Anything that happens after the call belongs to the
/// implementor.
pub trait SubmissionCapability<F> {
    fn submit(&self, submission: Submission<F>);
}

impl<F, T> SubmissionCapability<F> for T
where
    T: Fn(Submission<F>),
{
    fn submit(&self, submission: Submission<F>) {
        self(submission)
    }
}

/// What a dispatch pass issued, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub batch: BatchId,
    pub correlations: Vec<CorrelationId>,
}

impl DispatchReceipt {
    pub fn dispatched(&self) -> usize {
        self.correlations.len()
    }
}

/// Drives batches into a [`SubmissionCapability`].
pub struct DispatchDriver<F, S> {
    capability: S,
    _file: PhantomData<fn(F)>,
}

impl<F, S> DispatchDriver<F, S>
where
    F: FileHandle,
    S: SubmissionCapability<F>,
{
    pub fn new(capability: S) -> Self {
        Self {
            capability,
            _file: PhantomData,
        }
    }

    pub fn dispatch(&self, batch: PendingFileBatch<F>) -> DispatchReceipt {
        let batch_id = batch.id();
        let batch_len = batch.len();
        let mut correlations = Vec::with_capacity(batch_len);

        log::info!("dispatching {} ({} file(s), {:?})", batch_id, batch_len, batch.source());

        for (position, file) in batch.into_iter().enumerate() {
            let correlation = CorrelationId::new();
            log::debug!(
                "submit {}/{} {:?} ({} bytes) as {}",
                position + 1,
                batch_len,
                file.name(),
                file.size(),
                correlation
            );
            self.capability.submit(Submission {
                correlation,
                batch: batch_id,
                position,
                batch_len,
                file,
            });
            correlations.push(correlation);
        }

        DispatchReceipt {
            batch: batch_id,
            correlations,
        }
    }
}
