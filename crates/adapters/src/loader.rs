// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binding Loader: find a notification library and bring the service up.

use crate::service::NotifyService;
use thiserror::Error;

/// Errors from binding the notification service. Either one leaves the
/// notification feature unavailable for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no notification library could be loaded (tried {})", .tried.join(", "))]
    NoLibrary { tried: Vec<String> },

    #[error("{library} failed to initialize as {app_name:?}")]
    InitFailed { library: String, app_name: String },
}

/// Binds one named library variant of the notification service.
pub trait Binder {
    type Service: NotifyService;

    fn bind(&self, library: &str) -> Result<Self::Service, String>;
}

/// Bind the first candidate that loads, in order, then initialize the
/// service under `app_name` unless it is already initialized.
///
/// Later candidates are never attempted once one binds.
pub fn initialize<B, C>(binder: &B, candidates: &[C], app_name: &str) -> Result<B::Service, BindError>
where
    B: Binder,
    C: AsRef<str>,
{
    let mut tried = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let library = candidate.as_ref();
        tried.push(library.to_string());
        let service = match binder.bind(library) {
            Ok(service) => service,
            Err(e) => {
                tracing::debug!(library, error = %e, "notification library not bound");
                continue;
            }
        };

        tracing::info!(library, "bound notification library");
        if !service.is_initted() && !service.init(app_name) {
            tracing::warn!(library, app_name, "notification service failed to initialize");
            return Err(BindError::InitFailed {
                library: library.to_string(),
                app_name: app_name.to_string(),
            });
        }
        return Ok(service);
    }

    tracing::warn!(tried = ?tried, "no notification library available");
    Err(BindError::NoLibrary { tried })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
