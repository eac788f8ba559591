// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability names advertised by the notification service.

use serde::Serialize;

/// The service supports interactive action buttons.
pub const ACTIONS: &str = "actions";

/// The service merges notifications that request append behaviour.
pub const APPEND: &str = "append";

/// Notify-OSD's vendor name for [`APPEND`].
pub const X_CANONICAL_APPEND: &str = "x-canonical-append";

/// The service can play sounds (and therefore honours `suppress-sound`).
pub const SOUND: &str = "sound";

/// Snapshot of the capabilities the service advertised for one query.
///
/// Not cached: every question asks the live service for a fresh set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CapabilitySet(Vec<String>);

impl CapabilitySet {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|cap| cap == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
