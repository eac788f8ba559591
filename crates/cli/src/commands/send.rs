// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nudge send`: show one notification and report what happens to it

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use nudge_adapters::NotifyService;
use nudge_core::{Bitmap, DelegateEvent, NotificationContent, NotificationDelegate, NotificationState};
use nudge_engine::{Notification, Notifier};

use crate::exit_error::{ExitError, SHOW_FAILED};

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Notification title
    #[arg(long)]
    pub title: String,

    /// Notification body
    #[arg(long, default_value = "")]
    pub body: String,

    /// Grouping key; notifications sharing a tag replace or append to each other
    #[arg(long)]
    pub tag: Option<String>,

    /// Attach a solid square icon of this color
    #[arg(long, value_name = "RRGGBB", value_parser = parse_color)]
    pub icon_color: Option<[u8; 4]>,

    /// Icon edge length in pixels
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = 64,
        value_parser = clap::value_parser!(u32).range(1..=1024)
    )]
    pub icon_size: u32,

    /// Ask the service not to play a sound
    #[arg(long)]
    pub silent: bool,

    /// Seconds to wait for a click or dismissal before closing it (0 returns
    /// right after display)
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,
}

impl SendArgs {
    pub fn content(&self) -> Result<NotificationContent> {
        let mut content = NotificationContent::new(&self.title).body(&self.body).silent(self.silent);
        content.tag = self.tag.clone();
        if let Some(rgba) = self.icon_color {
            content = content.icon(Bitmap::solid(self.icon_size, self.icon_size, rgba)?);
        }
        Ok(content)
    }
}

/// Parse `RRGGBB` (optionally `#`-prefixed) into opaque RGBA.
pub fn parse_color(s: &str) -> Result<[u8; 4], String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected RRGGBB, got {s:?}"));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
    Ok([channel(0)?, channel(2)?, channel(4)?, 0xff])
}

/// Prints each signal on its own line as it arrives.
#[derive(Default)]
pub struct PrintDelegate {
    events: RefCell<Vec<DelegateEvent>>,
}

impl PrintDelegate {
    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    fn record(&self, event: DelegateEvent) {
        println!("{event}");
        self.events.borrow_mut().push(event);
    }
}

impl NotificationDelegate for PrintDelegate {
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

/// How long to drive the service's event loop.
#[derive(Debug, Clone, Copy)]
pub struct Pump {
    /// Sleep between idle iterations
    pub tick: Duration,
    /// Wait for the user before dismissing
    pub timeout: Duration,
    /// Wait for the closed callback after dismissing
    pub grace: Duration,
}

impl Pump {
    pub fn new(timeout: Duration) -> Self {
        Self { tick: Duration::from_millis(25), timeout, grace: Duration::from_secs(1) }
    }

    /// Dispatch until `notification` is terminal or `limit` passes.
    fn drive<S: NotifyService>(&self, service: &S, notification: &Notification<S>, limit: Duration) {
        let deadline = Instant::now() + limit;
        while !notification.state().is_terminal() && Instant::now() < deadline {
            if !service.dispatch_pending() {
                thread::sleep(self.tick);
            }
        }
    }

    /// Wait for a terminal state, dismissing once the timeout passes.
    pub fn wait<S: NotifyService>(&self, service: &S, notification: &Notification<S>) -> NotificationState {
        self.drive(service, notification, self.timeout);
        if notification.state() == NotificationState::Displayed {
            tracing::info!(timeout = ?self.timeout, "no response, dismissing");
            notification.dismiss();
            self.drive(service, notification, self.grace);
        }
        notification.state()
    }
}

/// Show one notification and follow it to completion.
pub fn run<S: NotifyService>(notifier: &Notifier<S>, args: &SendArgs) -> Result<()> {
    let content = args.content()?;
    let delegate = Rc::new(PrintDelegate::default());
    let as_dyn: Rc<dyn NotificationDelegate> = delegate.clone();
    let notification = notifier.create(Rc::downgrade(&as_dyn));

    notification.show(&content);
    if notification.state() == NotificationState::Failed {
        return Err(ExitError::new(SHOW_FAILED, "notification could not be shown").into());
    }
    if args.timeout == 0 {
        return Ok(());
    }

    let state = Pump::new(Duration::from_secs(args.timeout)).wait(notifier.service(), &notification);
    tracing::debug!(%state, events = ?delegate.events(), "finished");
    Ok(())
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
