// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process stand-ins for the notification service, for tests.
//!
//! Single-threaded like the real service: state is shared through
//! `Rc<RefCell<_>>`, and callbacks are cloned out before being fired so a
//! callback may call back into the fake.
#![cfg_attr(coverage_nightly, coverage(off))]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use nudge_core::{Bitmap, CapabilitySet, Expiry, NativeError, TagId};

use crate::loader::Binder;
use crate::service::{BitmapPresenter, NativeNotification, NotifyService, ServerInfo};

/// Value of a recorded hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintValue {
    String(String),
    Bool(bool),
}

/// Image produced by [`FakePresenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeImage {
    pub width: u32,
    pub height: u32,
}

/// Everything done to one fake native notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeNotificationRecord {
    pub summary: String,
    pub body: String,
    /// `(action, label)` pairs in registration order
    pub actions: Vec<(String, String)>,
    pub image: Option<FakeImage>,
    pub expiry: Option<Expiry>,
    pub identity: Option<TagId>,
    pub hints: Vec<(String, HintValue)>,
    pub show_calls: usize,
    pub close_calls: usize,
    /// Closed callbacks currently connected
    pub closed_handlers: usize,
    pub released: bool,
}

impl FakeNotificationRecord {
    fn new(summary: &str, body: &str) -> Self {
        Self {
            summary: summary.to_string(),
            body: body.to_string(),
            actions: Vec::new(),
            image: None,
            expiry: None,
            identity: None,
            hints: Vec::new(),
            show_calls: 0,
            close_calls: 0,
            closed_handlers: 0,
            released: false,
        }
    }

    pub fn hint(&self, key: &str) -> Option<&HintValue> {
        self.hints.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

struct FakeEntry {
    record: FakeNotificationRecord,
    closed: Vec<Rc<dyn Fn()>>,
    actions: Vec<Rc<dyn Fn(&str)>>,
}

struct FakeState {
    caps: Vec<String>,
    caps_queries: usize,
    initted: bool,
    init_succeeds: bool,
    init_calls: Vec<String>,
    info: Option<ServerInfo>,
    new_error: Option<NativeError>,
    show_error: Option<NativeError>,
    close_error: Option<NativeError>,
    quarks: HashMap<String, TagId>,
    entries: Vec<FakeEntry>,
    dispatches: usize,
}

/// Fake notification service for testing
#[derive(Clone)]
pub struct FakeNotifyService {
    inner: Rc<RefCell<FakeState>>,
}

impl Default for FakeNotifyService {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FakeState {
                caps: Vec::new(),
                caps_queries: 0,
                initted: false,
                init_succeeds: true,
                init_calls: Vec::new(),
                info: None,
                new_error: None,
                show_error: None,
                close_error: None,
                quarks: HashMap::new(),
                entries: Vec::new(),
                dispatches: 0,
            })),
        }
    }
}

impl FakeNotifyService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service advertising `caps`
    pub fn with_caps(caps: &[&str]) -> Self {
        let service = Self::new();
        service.set_caps(caps);
        service
    }

    pub fn set_caps(&self, caps: &[&str]) {
        self.inner.borrow_mut().caps = caps.iter().map(|c| c.to_string()).collect();
    }

    pub fn set_initted(&self, initted: bool) {
        self.inner.borrow_mut().initted = initted;
    }

    /// Make every later `init` call fail
    pub fn fail_init(&self) {
        self.inner.borrow_mut().init_succeeds = false;
    }

    pub fn fail_new(&self, error: NativeError) {
        self.inner.borrow_mut().new_error = Some(error);
    }

    /// Make every later `show` call fail with `error`
    pub fn fail_show(&self, error: NativeError) {
        self.inner.borrow_mut().show_error = Some(error);
    }

    /// Make every later `close` call fail with `error`
    pub fn fail_close(&self, error: NativeError) {
        self.inner.borrow_mut().close_error = Some(error);
    }

    pub fn set_server_info(&self, info: ServerInfo) {
        self.inner.borrow_mut().info = Some(info);
    }

    /// Number of capability round-trips so far
    pub fn caps_queries(&self) -> usize {
        self.inner.borrow().caps_queries
    }

    /// App names passed to `init`
    pub fn init_calls(&self) -> Vec<String> {
        self.inner.borrow().init_calls.clone()
    }

    pub fn dispatches(&self) -> usize {
        self.inner.borrow().dispatches
    }

    /// Records for every notification created, in creation order
    pub fn notifications(&self) -> Vec<FakeNotificationRecord> {
        self.inner.borrow().entries.iter().map(|e| e.record.clone()).collect()
    }

    /// Record for the notification created `index`-th
    pub fn notification(&self, index: usize) -> Option<FakeNotificationRecord> {
        self.inner.borrow().entries.get(index).map(|e| e.record.clone())
    }

    /// Deliver the service's "closed" signal. Returns whether any callback ran.
    pub fn emit_closed(&self, index: usize) -> bool {
        let callbacks = match self.inner.borrow().entries.get(index) {
            Some(entry) => entry.closed.clone(),
            None => return false,
        };
        for callback in &callbacks {
            callback();
        }
        !callbacks.is_empty()
    }

    /// Deliver an action invocation. Returns whether any callback ran.
    pub fn emit_action(&self, index: usize, action: &str) -> bool {
        let callbacks = match self.inner.borrow().entries.get(index) {
            Some(entry) => entry.actions.clone(),
            None => return false,
        };
        for callback in &callbacks {
            callback(action);
        }
        !callbacks.is_empty()
    }
}

impl NotifyService for FakeNotifyService {
    type Handle = FakeNotification;

    fn is_initted(&self) -> bool {
        self.inner.borrow().initted
    }

    fn init(&self, app_name: &str) -> bool {
        let mut state = self.inner.borrow_mut();
        state.init_calls.push(app_name.to_string());
        if state.init_succeeds {
            state.initted = true;
        }
        state.init_succeeds
    }

    fn server_caps(&self) -> CapabilitySet {
        let mut state = self.inner.borrow_mut();
        state.caps_queries += 1;
        CapabilitySet::new(state.caps.clone())
    }

    fn server_info(&self) -> Option<ServerInfo> {
        self.inner.borrow().info.clone()
    }

    fn new_notification(&self, summary: &str, body: &str) -> Result<FakeNotification, NativeError> {
        let mut state = self.inner.borrow_mut();
        if let Some(error) = state.new_error.clone() {
            return Err(error);
        }
        state.entries.push(FakeEntry {
            record: FakeNotificationRecord::new(summary, body),
            closed: Vec::new(),
            actions: Vec::new(),
        });
        Ok(FakeNotification { inner: Rc::clone(&self.inner), index: state.entries.len() - 1 })
    }

    fn intern_tag(&self, tag: &str) -> TagId {
        let mut state = self.inner.borrow_mut();
        let next = TagId::new(state.quarks.len() as u32 + 1);
        *state.quarks.entry(tag.to_string()).or_insert(next)
    }

    fn dispatch_pending(&self) -> bool {
        self.inner.borrow_mut().dispatches += 1;
        false
    }
}

/// Native handle created by [`FakeNotifyService`]
pub struct FakeNotification {
    inner: Rc<RefCell<FakeState>>,
    index: usize,
}

impl FakeNotification {
    fn with_entry<R>(&self, f: impl FnOnce(&mut FakeEntry) -> R) -> R {
        let mut state = self.inner.borrow_mut();
        f(&mut state.entries[self.index])
    }

    fn with_record(&self, f: impl FnOnce(&mut FakeNotificationRecord)) {
        self.with_entry(|entry| f(&mut entry.record));
    }
}

impl NativeNotification for FakeNotification {
    type Image = FakeImage;

    fn connect_closed(&mut self, callback: Box<dyn Fn()>) {
        self.with_entry(|entry| {
            entry.closed.push(Rc::from(callback));
            entry.record.closed_handlers = entry.closed.len();
        });
    }

    fn add_action(&mut self, action: &str, label: &str, callback: Box<dyn Fn(&str)>) {
        self.with_entry(|entry| {
            entry.actions.push(Rc::from(callback));
            entry.record.actions.push((action.to_string(), label.to_string()));
        });
    }

    fn set_image(&mut self, image: &FakeImage) {
        self.with_record(|r| r.image = Some(*image));
    }

    fn set_expiry(&mut self, expiry: Expiry) {
        self.with_record(|r| r.expiry = Some(expiry));
    }

    fn assign_identity(&mut self, id: TagId) {
        self.with_record(|r| r.identity = Some(id));
    }

    fn set_hint_string(&mut self, key: &str, value: &str) {
        self.with_record(|r| r.hints.push((key.to_string(), HintValue::String(value.to_string()))));
    }

    fn set_hint_bool(&mut self, key: &str, value: bool) {
        self.with_record(|r| r.hints.push((key.to_string(), HintValue::Bool(value))));
    }

    fn show(&mut self) -> Result<(), NativeError> {
        self.with_record(|r| r.show_calls += 1);
        match self.inner.borrow().show_error.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> Result<(), NativeError> {
        self.with_record(|r| r.close_calls += 1);
        match self.inner.borrow().close_error.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Drop for FakeNotification {
    fn drop(&mut self) {
        // Release disconnects closed handlers; finalization drops the actions
        let (closed, actions) = self.with_entry(|entry| {
            entry.record.released = true;
            entry.record.closed_handlers = 0;
            (std::mem::take(&mut entry.closed), std::mem::take(&mut entry.actions))
        });
        drop((closed, actions));
    }
}

/// Fake binder; only libraries marked bindable load
pub struct FakeBinder {
    service: FakeNotifyService,
    bindable: Vec<String>,
    attempts: RefCell<Vec<String>>,
}

impl FakeBinder {
    pub fn new(service: FakeNotifyService) -> Self {
        Self { service, bindable: Vec::new(), attempts: RefCell::new(Vec::new()) }
    }

    /// Allow `library` to bind
    pub fn bindable(mut self, library: &str) -> Self {
        self.bindable.push(library.to_string());
        self
    }

    /// Library names `bind` was called with, in order
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }
}

impl Binder for FakeBinder {
    type Service = FakeNotifyService;

    fn bind(&self, library: &str) -> Result<FakeNotifyService, String> {
        self.attempts.borrow_mut().push(library.to_string());
        if self.bindable.iter().any(|l| l == library) {
            Ok(self.service.clone())
        } else {
            Err(format!("{library}: cannot open shared object file"))
        }
    }
}

/// Fake bitmap presenter
#[derive(Default)]
pub struct FakePresenter {
    conversions: Cell<usize>,
    fails: bool,
}

impl FakePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A presenter whose conversions always fail
    pub fn failing() -> Self {
        Self { conversions: Cell::new(0), fails: true }
    }

    pub fn conversions(&self) -> usize {
        self.conversions.get()
    }
}

impl BitmapPresenter for FakePresenter {
    type Image = FakeImage;

    fn native_image(&self, bitmap: &Bitmap) -> Option<FakeImage> {
        self.conversions.set(self.conversions.get() + 1);
        if self.fails || bitmap.is_empty() {
            return None;
        }
        Some(FakeImage { width: bitmap.width(), height: bitmap.height() })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
