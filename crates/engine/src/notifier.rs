// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Factory tying a bound service to its presenter and settings.

use std::rc::{Rc, Weak};

use nudge_adapters::libnotify::{Libnotify, LibnotifyBinder};
use nudge_adapters::{initialize, BindError, BitmapPresenter, ImageOf, NotifyService};
use nudge_core::NotificationDelegate;

use crate::capabilities::Capabilities;
use crate::env::Settings;
use crate::notification::Notification;

pub struct Notifier<S: NotifyService> {
    service: Rc<S>,
    presenter: Rc<dyn BitmapPresenter<Image = ImageOf<S>>>,
    settings: Rc<Settings>,
}

impl<S: NotifyService> Notifier<S> {
    pub fn new<P>(service: S, presenter: P, settings: Settings) -> Self
    where
        P: BitmapPresenter<Image = ImageOf<S>> + 'static,
    {
        Self { service: Rc::new(service), presenter: Rc::new(presenter), settings: Rc::new(settings) }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn capabilities(&self) -> Capabilities<'_, S> {
        Capabilities::new(&self.service, &self.settings)
    }

    /// A fresh notification in `Created`, reporting to `delegate`.
    pub fn create(&self, delegate: Weak<dyn NotificationDelegate>) -> Notification<S> {
        Notification::new(
            Rc::clone(&self.service),
            Rc::clone(&self.presenter),
            Rc::clone(&self.settings),
            delegate,
        )
    }
}

impl Notifier<Libnotify> {
    /// Bind libnotify from `settings.candidates` and initialize it as `app_name`.
    pub fn connect(app_name: &str, settings: Settings) -> Result<Self, BindError> {
        let service = initialize(&LibnotifyBinder, settings.candidates.as_slice(), app_name)?;
        let presenter = service.presenter();
        Ok(Self::new(service, presenter, settings))
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
