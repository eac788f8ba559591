// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use std::cell::Cell;

#[test]
fn server_caps_counts_round_trips() {
    let service = FakeNotifyService::with_caps(&["actions", "body"]);
    assert!(service.server_caps().contains("actions"));
    assert!(service.server_caps().contains("body"));
    assert_eq!(service.caps_queries(), 2);
}

#[test]
fn handle_records_configuration() {
    let service = FakeNotifyService::new();
    let mut handle = service.new_notification("title", "body").unwrap();
    handle.set_expiry(Expiry::Default);
    handle.assign_identity(TagId::new(7));
    handle.set_hint_string("x-canonical-append", "true");
    handle.set_hint_bool("suppress-sound", true);
    handle.add_action("default", "View", Box::new(|_| {}));

    let record = service.notification(0).unwrap();
    assert_eq!(record.summary, "title");
    assert_eq!(record.expiry, Some(Expiry::Default));
    assert_eq!(record.identity, Some(TagId::new(7)));
    assert_eq!(record.hint("x-canonical-append"), Some(&HintValue::String("true".into())));
    assert_eq!(record.hint("suppress-sound"), Some(&HintValue::Bool(true)));
    assert_eq!(record.actions, vec![("default".to_string(), "View".to_string())]);
}

#[test]
fn emit_closed_runs_connected_callbacks() {
    let service = FakeNotifyService::new();
    let mut handle = service.new_notification("t", "b").unwrap();
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    handle.connect_closed(Box::new(move || counter.set(counter.get() + 1)));

    assert!(service.emit_closed(0));
    assert_eq!(fired.get(), 1);
}

#[test]
fn drop_disconnects_and_releases() {
    let service = FakeNotifyService::new();
    let mut handle = service.new_notification("t", "b").unwrap();
    handle.connect_closed(Box::new(|| panic!("closed after release")));
    handle.add_action("default", "View", Box::new(|_| panic!("action after release")));
    drop(handle);

    assert!(!service.emit_closed(0));
    assert!(!service.emit_action(0, "default"));
    let record = service.notification(0).unwrap();
    assert!(record.released);
    assert_eq!(record.closed_handlers, 0);
}

#[test]
fn injected_failures_surface_as_native_errors() {
    let service = FakeNotifyService::new();
    service.fail_show(NativeError::new("g-dbus-error-quark", 2, "no server"));
    service.fail_close(NativeError::new("g-dbus-error-quark", 3, "gone"));
    let mut handle = service.new_notification("t", "b").unwrap();

    assert_eq!(handle.show().unwrap_err().code, 2);
    assert_eq!(handle.close().unwrap_err().code, 3);
    let record = service.notification(0).unwrap();
    assert_eq!((record.show_calls, record.close_calls), (1, 1));
}

#[test]
fn emit_for_unknown_index_is_noop() {
    let service = FakeNotifyService::new();
    assert!(!service.emit_closed(3));
    assert!(!service.emit_action(3, "default"));
}

#[test]
fn presenter_skips_empty_bitmaps() {
    let presenter = FakePresenter::new();
    assert_eq!(presenter.native_image(&Bitmap::default()), None);
    let icon = Bitmap::solid(64, 64, [0, 0, 0, 255]).unwrap();
    assert_eq!(presenter.native_image(&icon), Some(FakeImage { width: 64, height: 64 }));
    assert_eq!(presenter.conversions(), 2);
    assert_eq!(FakePresenter::failing().native_image(&icon), None);
}

proptest! {
    #[test]
    fn same_tag_interns_to_same_identity(tag in ".{1,32}") {
        let service = FakeNotifyService::new();
        let first = service.intern_tag(&tag);
        let _ = service.intern_tag("unrelated");
        prop_assert_eq!(service.intern_tag(&tag), first);
    }

    #[test]
    fn different_tags_intern_to_different_identities(a in ".{1,32}", b in ".{1,32}") {
        prop_assume!(a != b);
        let service = FakeNotifyService::new();
        prop_assert_ne!(service.intern_tag(&a), service.intern_tag(&b));
    }
}
