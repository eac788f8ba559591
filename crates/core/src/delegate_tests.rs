// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    displayed = { DelegateEvent::Displayed },
    dismissed = { DelegateEvent::Dismissed },
    clicked   = { DelegateEvent::Clicked },
    failed    = { DelegateEvent::Failed },
)]
fn deliver_calls_matching_method(event: DelegateEvent) {
    let delegate = FakeDelegate::new();
    event.deliver(&delegate);
    assert_eq!(delegate.events(), vec![event]);
    assert_eq!(delegate.count(event), 1);
}

#[test]
fn fake_records_in_order() {
    let delegate = FakeDelegate::new();
    DelegateEvent::Displayed.deliver(&delegate);
    DelegateEvent::Clicked.deliver(&delegate);
    assert_eq!(delegate.events(), vec![DelegateEvent::Displayed, DelegateEvent::Clicked]);
    assert_eq!(delegate.count(DelegateEvent::Dismissed), 0);
}

#[test]
fn display_names() {
    assert_eq!(DelegateEvent::Displayed.to_string(), "displayed");
    assert_eq!(DelegateEvent::Failed.to_string(), "failed");
}
