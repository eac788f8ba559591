// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for driving the `nudge` binary.

#![allow(dead_code)]

use assert_cmd::Command;

/// A library path that never exists, so binding always fails.
pub const MISSING_LIBRARY: &str = "/nonexistent/nudge-specs/libnotify.so.4";

/// `nudge` with a scrubbed environment: no color, no override, and a
/// candidate list that cannot bind.
pub fn cli() -> Cli {
    let mut cmd = Command::cargo_bin("nudge").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("NUDGE_USE_UBUNTU_NOTIFIER")
        .env_remove("NUDGE_LOG")
        .env("NUDGE_LIBNOTIFY", MISSING_LIBRARY);
    Cli { cmd }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run, expecting exit code 0.
    pub fn passes(self) -> Output {
        self.exits_with(0)
    }

    /// Run, expecting a specific exit code.
    pub fn exits_with(mut self, code: i32) -> Output {
        let out = self.cmd.output().unwrap();
        let output = Output {
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        };
        assert_eq!(
            output.code,
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            output.stdout,
            output.stderr
        );
        output
    }
}

pub struct Output {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_is_empty(self) -> Self {
        assert!(self.stdout.is_empty(), "stdout not empty:\n{}", self.stdout);
        self
    }
}
