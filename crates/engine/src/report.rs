// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error Reporter: surfaces native failures to diagnostics.

use nudge_core::NativeError;

/// Log a failed native call. `context` names the call that failed.
///
/// Freeing the native error record happens where it is converted into a
/// [`NativeError`]; this only has to log.
pub fn report_native_error(context: &str, error: &NativeError) {
    tracing::error!(
        context,
        domain = %error.domain,
        code = error.code,
        message = %error.message,
        "native call failed"
    );
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
