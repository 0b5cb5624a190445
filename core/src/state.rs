//! Observable drag interaction state.
//!
//! [`StateWatch`] is an explicit observable value: the presentation layer
//! subscribes to it and re-renders from the values it is handed.
//! [`DragTracker`] drives one through enter/over/leave/reset.

use crate::config::AcceptPolicy;
use crate::types::{DragInteractionState, DragPayload};

/// Handle returned by [`StateWatch::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value plus the callbacks interested in its changes.
pub struct StateWatch<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T: Clone + PartialEq> StateWatch<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Store `value`, notifying subscribers only if it differs from the
    /// current one. Returns whether it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.value);
        }
        true
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + PartialEq + Default> Default for StateWatch<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Classify a drag payload against the accept policy.
pub fn classify(payload: &DragPayload, policy: &AcceptPolicy, multiple: bool) -> DragInteractionState {
    let items = match payload {
        DragPayload::Opaque => return DragInteractionState::Active,
        DragPayload::Items(items) => items,
    };

    let files: Vec<_> = items.iter().filter(|i| i.is_file()).collect();
    if files.is_empty() || (!multiple && files.len() > 1) {
        return DragInteractionState::RejectPending;
    }

    if files.iter().all(|item| policy.admits_drag_item(item)) {
        DragInteractionState::AcceptPending
    } else {
        DragInteractionState::RejectPending
    }
}

/// Tracks nested drag-enter/leave pairs over the drop target.
///
/// Hosts fire enter/leave for every child element crossed, so the drag only
/// leaves the target once the depth is back to zero.
#[derive(Default)]
pub struct DragTracker {
    watch: StateWatch<DragInteractionState>,
    depth: usize,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragInteractionState {
        self.watch.get()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn watch_mut(&mut self) -> &mut StateWatch<DragInteractionState> {
        &mut self.watch
    }

    pub fn enter(&mut self, classification: DragInteractionState) {
        self.depth += 1;
        self.transition(classification);
    }

    /// A drag-over without a prior enter counts as one.
    pub fn over(&mut self, classification: DragInteractionState) {
        if self.depth == 0 {
            self.enter(classification);
        } else {
            self.transition(classification);
        }
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.transition(DragInteractionState::Idle);
        }
    }

    /// Drop, drag end or cancel.
    pub fn reset(&mut self) {
        self.depth = 0;
        self.transition(DragInteractionState::Idle);
    }

    fn transition(&mut self, next: DragInteractionState) {
        let previous = self.watch.get();
        if self.watch.set(next) {
            log::debug!("drag state {} -> {} (depth {})", previous, next, self.depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DropzoneConfig;
    use crate::types::DragItem;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn files(mimes: &[&str]) -> DragPayload {
        DragPayload::Items(mimes.iter().map(|m| DragItem::file(*m)).collect())
    }

    #[test]
    fn test_watch_notifies_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut watch = StateWatch::new(0u8);

        let sink = seen.clone();
        watch.subscribe(move |v| sink.borrow_mut().push(*v));

        assert!(watch.set(1));
        assert!(!watch.set(1));
        assert!(watch.set(2));
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_watch_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut watch = StateWatch::new(false);

        let sink = count.clone();
        let id = watch.subscribe(move |_| *sink.borrow_mut() += 1);
        watch.set(true);

        assert!(watch.unsubscribe(id));
        assert!(!watch.unsubscribe(id));
        assert_eq!(watch.subscriber_count(), 0);

        watch.set(false);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_classify() {
        let all = AcceptPolicy::accept_all();
        assert_eq!(classify(&DragPayload::Opaque, &all, true), DragInteractionState::Active);
        assert_eq!(classify(&files(&["image/png"]), &all, true), DragInteractionState::AcceptPending);
        assert_eq!(
            classify(&DragPayload::Items(vec![DragItem::string("text/plain")]), &all, true),
            DragInteractionState::RejectPending
        );
        assert_eq!(classify(&DragPayload::Items(Vec::new()), &all, true), DragInteractionState::RejectPending);
    }

    #[test]
    fn test_classify_single_file_target() {
        let all = AcceptPolicy::accept_all();
        assert_eq!(classify(&files(&["a", "b"]), &all, false), DragInteractionState::RejectPending);
        assert_eq!(classify(&files(&["a"]), &all, false), DragInteractionState::AcceptPending);
    }

    #[test]
    fn test_classify_mixed_types() {
        let images = DropzoneConfig::default().with_accept(["image/*"]).policy().unwrap();
        assert_eq!(
            classify(&files(&["image/png", "application/pdf"]), &images, true),
            DragInteractionState::RejectPending
        );
        // non-file items riding along with files do not matter
        let payload = DragPayload::Items(vec![DragItem::file("image/png"), DragItem::string("text/uri-list")]);
        assert_eq!(classify(&payload, &images, true), DragInteractionState::AcceptPending);
    }

    #[test]
    fn test_tracker_nested_enter_leave() {
        let mut tracker = DragTracker::new();
        tracker.enter(DragInteractionState::AcceptPending);
        tracker.enter(DragInteractionState::AcceptPending);
        assert_eq!(tracker.depth(), 2);

        tracker.leave();
        assert_eq!(tracker.state(), DragInteractionState::AcceptPending);

        tracker.leave();
        assert_eq!(tracker.state(), DragInteractionState::Idle);

        tracker.leave();
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_tracker_over_without_enter() {
        let mut tracker = DragTracker::new();
        tracker.over(DragInteractionState::Active);
        assert_eq!(tracker.depth(), 1);
        assert_eq!(tracker.state(), DragInteractionState::Active);

        tracker.over(DragInteractionState::RejectPending);
        assert_eq!(tracker.depth(), 1);
        assert_eq!(tracker.state(), DragInteractionState::RejectPending);
    }

    #[test]
    fn test_tracker_reset() {
        let mut tracker = DragTracker::new();
        tracker.enter(DragInteractionState::Active);
        tracker.enter(DragInteractionState::Active);
        tracker.reset();
        assert_eq!(tracker.depth(), 0);
        assert_eq!(tracker.state(), DragInteractionState::Idle);
    }
}
