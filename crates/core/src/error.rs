// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured error reported by a failed native call.

use thiserror::Error;

/// Domain, code and message extracted from a native error object.
///
/// The native object itself is released at extraction time; this is a plain
/// owned copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{domain} error {code}: {message}")]
pub struct NativeError {
    pub domain: String,
    pub code: i32,
    pub message: String,
}

impl NativeError {
    pub fn new(domain: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        Self { domain: domain.into(), code, message: message.into() }
    }
}
