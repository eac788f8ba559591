// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification lifecycle state machine.
//!
//! ```text
//! Created ──show ok──▶ Displayed ──closed──▶ Dismissed
//!    │                    ├──action──▶ Clicked
//!    └──show err──▶ Failed └──close err──▶ Destroyed
//! ```

use crate::delegate::DelegateEvent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationState {
    /// Constructed, nothing submitted yet
    #[default]
    Created,
    /// Submitted and accepted by the service
    Displayed,
    /// The service rejected the submission
    Failed,
    /// The service reported the notification closed
    Dismissed,
    /// The user invoked the notification's action
    Clicked,
    /// Torn down locally after the service refused to close it
    Destroyed,
}

crate::simple_display! {
    NotificationState {
        Created => "created",
        Displayed => "displayed",
        Failed => "failed",
        Dismissed => "dismissed",
        Clicked => "clicked",
        Destroyed => "destroyed",
    }
}

impl NotificationState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NotificationState::Failed
                | NotificationState::Dismissed
                | NotificationState::Clicked
                | NotificationState::Destroyed
        )
    }

    /// Whether `next` is a legal successor of this state.
    pub fn can_become(self, next: NotificationState) -> bool {
        use NotificationState::*;
        matches!(
            (self, next),
            (Created, Displayed)
                | (Created, Failed)
                | (Displayed, Dismissed)
                | (Displayed, Clicked)
                | (Displayed, Destroyed)
        )
    }

    /// The delegate signal emitted on entering this state, if any.
    pub fn signal(self) -> Option<DelegateEvent> {
        match self {
            NotificationState::Displayed => Some(DelegateEvent::Displayed),
            NotificationState::Failed => Some(DelegateEvent::Failed),
            NotificationState::Dismissed => Some(DelegateEvent::Dismissed),
            NotificationState::Clicked => Some(DelegateEvent::Clicked),
            NotificationState::Created | NotificationState::Destroyed => None,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
