// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        std::env::set_var(key, value);
        Self(key)
    }

    fn unset(key: &'static str) -> Self {
        std::env::remove_var(key);
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(self.0);
    }
}

#[test]
#[serial]
fn override_unset_by_default() {
    let _g = EnvGuard::unset(USE_UBUNTU_NOTIFIER);
    assert!(!use_ubuntu_notifier());
    assert!(!Settings::from_env().legacy_presentation);
}

#[test]
#[serial]
fn override_is_presence_not_value() {
    for value in ["1", "", "0"] {
        let _g = EnvGuard::set(USE_UBUNTU_NOTIFIER, value);
        assert!(use_ubuntu_notifier(), "value {value:?}");
        assert!(Settings::from_env().legacy_presentation, "value {value:?}");
    }
}

#[test]
#[serial]
fn candidates_default_without_env() {
    let _g = EnvGuard::unset(LIBNOTIFY);
    assert_eq!(library_candidates(), vec!["libnotify.so.4", "libnotify.so.1", "libnotify.so"]);
    assert_eq!(Settings::from_env().candidates, Settings::default().candidates);
}

#[test]
#[serial]
fn candidates_env_replaces_defaults() {
    let _g = EnvGuard::set(LIBNOTIFY, "/opt/notify/libnotify.so.4::libnotify.so.9");
    assert_eq!(library_candidates(), vec!["/opt/notify/libnotify.so.4", "libnotify.so.9"]);
}

#[test]
#[serial]
fn blank_candidates_env_falls_back() {
    let _g = EnvGuard::set(LIBNOTIFY, "::");
    assert_eq!(library_candidates().len(), 3);
}
