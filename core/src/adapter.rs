//! Interaction adapter: turns normalized drag, drop, picker and click events
//! into interaction state and dispatch calls.
//!
//! The host binding (a browser component, a desktop window) owns one adapter,
//! translates its native events into the calls below, and re-renders from the
//! state it is notified of through [`InteractionAdapter::subscribe`].
//!
//! ```text
//!  dragenter / dragover ──▶ classify ──▶ DragTracker ──▶ subscribers
//!  dragleave / dragend  ──────────────▶ DragTracker ──▶ subscribers
//!  drop / picker change ──▶ AcceptPolicy ──▶ PendingFileBatch ──▶ DispatchDriver ──▶ submit()
//! ```

use crate::batch::{BatchId, BatchSource, PendingFileBatch};
use crate::config::{AcceptPolicy, DropzoneConfig};
use crate::dispatch::{DispatchDriver, DispatchReceipt, SubmissionCapability};
use crate::error::{ConfigResult, RejectionReason};
use crate::state::{classify, DragTracker, SubscriptionId};
use crate::types::{DragInteractionState, DragPayload, FileHandle};

/// A file left out of a batch and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRejection {
    pub name: String,
    pub size: u64,
    pub reasons: Vec<RejectionReason>,
}

/// Result of a drop or picker selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropOutcome {
    /// Present when at least one file was dispatched
    pub receipt: Option<DispatchReceipt>,
    pub rejected: Vec<FileRejection>,
}

impl DropOutcome {
    pub fn dispatched(&self) -> usize {
        self.receipt.as_ref().map_or(0, DispatchReceipt::dispatched)
    }
}

/// What the host should do with a click on the root container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickDisposition {
    /// Always set: nested drop zones must not see the click.
    pub stop_propagation: bool,
    /// Activate the hidden file input.
    pub open_picker: bool,
}

/// Drop target logic, generic over the host file type and the capability.
pub struct InteractionAdapter<F, S> {
    config: DropzoneConfig,
    policy: AcceptPolicy,
    tracker: DragTracker,
    driver: DispatchDriver<F, S>,
    next_batch: u64,
}

impl<F, S> InteractionAdapter<F, S>
where
    F: FileHandle,
    S: SubmissionCapability<F>,
{
    pub fn new(config: DropzoneConfig, capability: S) -> ConfigResult<Self> {
        let policy = config.policy()?;
        Ok(Self::with_policy(config, policy, capability))
    }

    /// Build from an already compiled policy.
    pub fn with_policy(config: DropzoneConfig, policy: AcceptPolicy, capability: S) -> Self {
        Self {
            config,
            policy,
            tracker: DragTracker::new(),
            driver: DispatchDriver::new(capability),
            next_batch: 0,
        }
    }

    pub fn config(&self) -> &DropzoneConfig {
        &self.config
    }

    pub fn state(&self) -> DragInteractionState {
        self.tracker.state()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&DragInteractionState) + 'static) -> SubscriptionId {
        self.tracker.watch_mut().subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.tracker.watch_mut().unsubscribe(id)
    }

    pub fn drag_enter(&mut self, payload: &DragPayload) {
        if self.config.disabled {
            return;
        }
        let classification = classify(payload, &self.policy, self.config.multiple);
        self.tracker.enter(classification);
    }

    pub fn drag_over(&mut self, payload: &DragPayload) {
        if self.config.disabled {
            return;
        }
        let classification = classify(payload, &self.policy, self.config.multiple);
        self.tracker.over(classification);
    }

    pub fn drag_leave(&mut self) {
        if self.config.disabled {
            return;
        }
        self.tracker.leave();
    }

    /// Drag ended or was cancelled without a drop on the target.
    pub fn drag_end(&mut self) {
        self.tracker.reset();
    }

    pub fn drop_files(&mut self, files: Vec<F>) -> DropOutcome {
        self.ingest(files, BatchSource::Drop)
    }

    /// Files chosen through the hidden file input.
    pub fn select_files(&mut self, files: Vec<F>) -> DropOutcome {
        self.ingest(files, BatchSource::Picker)
    }

    pub fn root_click(&self) -> ClickDisposition {
        ClickDisposition {
            stop_propagation: true,
            open_picker: self.config.click_to_browse && !self.config.disabled,
        }
    }

    fn ingest(&mut self, files: Vec<F>, source: BatchSource) -> DropOutcome {
        if self.config.disabled {
            self.tracker.reset();
            return DropOutcome::default();
        }

        let (accepted, rejected) = self.partition(files);
        for rejected_file in &rejected {
            for reason in &rejected_file.reasons {
                log::warn!("rejected {:?}: {}", rejected_file.name, reason);
            }
        }

        let receipt = if accepted.is_empty() {
            log::debug!("{:?} produced no batch", source);
            None
        } else {
            let batch = PendingFileBatch::new(BatchId(self.next_batch), source, accepted);
            self.next_batch += 1;
            Some(self.driver.dispatch(batch))
        };

        self.tracker.reset();
        DropOutcome { receipt, rejected }
    }

    fn partition(&self, files: Vec<F>) -> (Vec<F>, Vec<FileRejection>) {
        let count = files.len();
        if !self.config.multiple && count > 1 {
            let rejected = files
                .iter()
                .map(|file| rejection(file, vec![RejectionReason::TooManyFiles { count }]))
                .collect();
            return (Vec::new(), rejected);
        }

        let mut accepted = Vec::with_capacity(count);
        let mut rejected = Vec::new();
        for file in files {
            let reasons = self.policy.evaluate(&file);
            if reasons.is_empty() {
                accepted.push(file);
            } else {
                rejected.push(rejection(&file, reasons));
            }
        }
        (accepted, rejected)
    }
}

fn rejection<F: FileHandle>(file: &F, reasons: Vec<RejectionReason>) -> FileRejection {
    FileRejection {
        name: file.name().to_string(),
        size: file.size(),
        reasons,
    }
}
