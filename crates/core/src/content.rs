// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What a notification shows.

use crate::bitmap::Bitmap;

/// Title, body and presentation options for one notification.
///
/// ```ignore
/// let content = NotificationContent::new("Build complete")
///     .body("3 tests failed")
///     .tag("ci-status");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    /// Grouping key; notifications sharing a tag replace or append to each other.
    pub tag: Option<String>,
    pub icon: Option<Bitmap>,
    pub silent: bool,
}

impl NotificationContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    crate::setters! {
        into { body: String }
        set { silent: bool }
        option { tag: String, icon: Bitmap }
    }

    /// The tag, unless missing or empty.
    pub fn effective_tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }

    /// The icon, unless missing or drawing nothing.
    pub fn effective_icon(&self) -> Option<&Bitmap> {
        self.icon.as_ref().filter(|icon| !icon.is_empty())
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
