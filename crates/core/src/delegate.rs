// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application-side receiver of notification outcomes.

use serde::Serialize;

/// Receives the one-shot outcome signals of a notification.
///
/// Every shown notification produces exactly one of `displayed` or `failed`,
/// and at most one of `dismissed` or `clicked` afterwards. A notification
/// torn down locally after a failed dismiss signals nothing further.
///
/// Held by notifications as a `Weak` reference: the delegate is not kept
/// alive by the notifications it observes.
pub trait NotificationDelegate {
    fn notification_displayed(&self);
    fn notification_dismissed(&self);
    fn notification_clicked(&self);
    fn notification_failed(&self);
}

/// One delegate signal, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegateEvent {
    Displayed,
    Dismissed,
    Clicked,
    Failed,
}

crate::simple_display! {
    DelegateEvent {
        Displayed => "displayed",
        Dismissed => "dismissed",
        Clicked => "clicked",
        Failed => "failed",
    }
}

impl DelegateEvent {
    /// Deliver this signal to a delegate.
    pub fn deliver(self, delegate: &dyn NotificationDelegate) {
        match self {
            DelegateEvent::Displayed => delegate.notification_displayed(),
            DelegateEvent::Dismissed => delegate.notification_dismissed(),
            DelegateEvent::Clicked => delegate.notification_clicked(),
            DelegateEvent::Failed => delegate.notification_failed(),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{DelegateEvent, NotificationDelegate};
    use parking_lot::Mutex;

    /// Fake delegate for testing; records every signal in order
    #[derive(Default)]
    pub struct FakeDelegate {
        events: Mutex<Vec<DelegateEvent>>,
    }

    impl FakeDelegate {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded signals
        pub fn events(&self) -> Vec<DelegateEvent> {
            self.events.lock().clone()
        }

        /// How many times a given signal was recorded
        pub fn count(&self, event: DelegateEvent) -> usize {
            self.events.lock().iter().filter(|e| **e == event).count()
        }

        fn record(&self, event: DelegateEvent) {
            self.events.lock().push(event);
        }
    }

    impl NotificationDelegate for FakeDelegate {
        fn notification_displayed(&self) {
            self.record(DelegateEvent::Displayed);
        }

        fn notification_dismissed(&self) {
            self.record(DelegateEvent::Dismissed);
        }

        fn notification_clicked(&self) {
            self.record(DelegateEvent::Clicked);
        }

        fn notification_failed(&self) {
            self.record(DelegateEvent::Failed);
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDelegate;

#[cfg(test)]
#[path = "delegate_tests.rs"]
mod tests;
