// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::Parser;
use nudge_adapters::{FakeImage, FakeNotifyService, FakePresenter};
use nudge_core::NativeError;
use nudge_engine::Settings;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    args: SendArgs,
}

fn parse(argv: &[&str]) -> SendArgs {
    let mut full = vec!["nudge"];
    full.extend_from_slice(argv);
    TestCli::try_parse_from(full).unwrap().args
}

fn notifier(service: &FakeNotifyService) -> Notifier<FakeNotifyService> {
    Notifier::new(service.clone(), FakePresenter::new(), Settings::default())
}

fn quick() -> Pump {
    Pump {
        tick: Duration::from_millis(1),
        timeout: Duration::from_millis(20),
        grace: Duration::from_millis(20),
    }
}

#[yare::parameterized(
    plain      = { "2e7d32", [0x2e, 0x7d, 0x32, 0xff] },
    hashed     = { "#FFA000", [0xff, 0xa0, 0x00, 0xff] },
    black      = { "000000", [0, 0, 0, 0xff] },
)]
fn parses_colors(input: &str, expected: [u8; 4]) {
    assert_eq!(parse_color(input).unwrap(), expected);
}

#[yare::parameterized(
    short     = { "fff" },
    long      = { "ffffff00" },
    not_hex   = { "zzzzzz" },
    empty     = { "" },
    multibyte = { "ééé" },
)]
fn rejects_bad_colors(input: &str) {
    assert!(parse_color(input).is_err());
}

#[test]
fn defaults() {
    let args = parse(&["--title", "Build complete"]);
    assert_eq!(args.body, "");
    assert_eq!(args.tag, None);
    assert_eq!(args.icon_color, None);
    assert_eq!(args.icon_size, 64);
    assert!(!args.silent);
    assert_eq!(args.timeout, 10);
}

#[test]
fn content_from_args() {
    let args = parse(&[
        "--title",
        "Build complete",
        "--body",
        "3 tests failed",
        "--tag",
        "ci-status",
        "--icon-color",
        "2e7d32",
        "--icon-size",
        "32",
        "--silent",
    ]);

    let content = args.content().unwrap();

    assert_eq!(content.title, "Build complete");
    assert_eq!(content.body, "3 tests failed");
    assert_eq!(content.effective_tag(), Some("ci-status"));
    assert!(content.silent);
    let icon = content.icon.unwrap();
    assert_eq!((icon.width(), icon.height()), (32, 32));
    assert_eq!(&icon.pixels()[..4], &[0x2e, 0x7d, 0x32, 0xff]);
}

#[yare::parameterized(
    zero      = { "0" },
    too_large = { "4096" },
)]
fn icon_size_is_bounded(size: &str) {
    let argv = ["nudge", "--title", "t", "--icon-size", size];
    assert!(TestCli::try_parse_from(argv).is_err());
}

#[test]
fn content_without_icon_color_has_no_icon() {
    assert!(parse(&["--title", "t", "--icon-size", "16"]).content().unwrap().icon.is_none());
}

#[test]
fn print_delegate_records_in_order() {
    let delegate = PrintDelegate::default();
    delegate.notification_displayed();
    delegate.notification_clicked();
    assert_eq!(delegate.events(), vec![DelegateEvent::Displayed, DelegateEvent::Clicked]);
}

#[test]
fn wait_dismisses_after_timeout() {
    let service = FakeNotifyService::new();
    let notifier = notifier(&service);
    let delegate: Rc<dyn NotificationDelegate> = Rc::new(PrintDelegate::default());
    let notification = notifier.create(Rc::downgrade(&delegate));
    notification.show(&NotificationContent::new("t"));

    let state = quick().wait(&service, &notification);

    assert_eq!(state, NotificationState::Displayed);
    assert_eq!(service.notification(0).unwrap().close_calls, 1);
    assert!(service.dispatches() > 0);
}

#[test]
fn wait_returns_once_terminal() {
    let service = FakeNotifyService::with_caps(&["actions"]);
    let notifier = notifier(&service);
    let delegate: Rc<dyn NotificationDelegate> = Rc::new(PrintDelegate::default());
    let notification = notifier.create(Rc::downgrade(&delegate));
    notification.show(&NotificationContent::new("t"));
    service.emit_action(0, "default");

    let state = quick().wait(&service, &notification);

    assert_eq!(state, NotificationState::Clicked);
    assert_eq!(service.notification(0).unwrap().close_calls, 0);
    assert_eq!(service.dispatches(), 0);
}

#[test]
fn wait_reports_destroyed_when_close_fails() {
    let service = FakeNotifyService::new();
    service.fail_close(NativeError::new("libnotify", -1, ""));
    let notifier = notifier(&service);
    let delegate: Rc<dyn NotificationDelegate> = Rc::new(PrintDelegate::default());
    let notification = notifier.create(Rc::downgrade(&delegate));
    notification.show(&NotificationContent::new("t"));

    assert_eq!(quick().wait(&service, &notification), NotificationState::Destroyed);
}

#[test]
fn run_maps_show_failure_to_exit_code() {
    let service = FakeNotifyService::new();
    service.fail_show(NativeError::new("g-dbus-error-quark", 2, "no service"));

    let err = run(&notifier(&service), &parse(&["--title", "t"])).unwrap_err();

    let exit = err.downcast_ref::<ExitError>().unwrap();
    assert_eq!(exit.code, SHOW_FAILED);
}

#[test]
fn run_with_zero_timeout_returns_after_display() {
    let service = FakeNotifyService::new();

    run(&notifier(&service), &parse(&["--title", "t", "--timeout", "0"])).unwrap();

    assert_eq!(service.dispatches(), 0);
    assert_eq!(service.notification(0).unwrap().close_calls, 0);
}

#[test]
fn run_attaches_icon() {
    let service = FakeNotifyService::new();

    run(
        &notifier(&service),
        &parse(&["--title", "t", "--icon-color", "ffa000", "--timeout", "0"]),
    )
    .unwrap();

    assert_eq!(service.notification(0).unwrap().image, Some(FakeImage { width: 64, height: 64 }));
}
