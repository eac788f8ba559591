// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    exact_actions    = { "actions", true },
    exact_vendor     = { "x-canonical-append", true },
    wrong_case       = { "Actions", false },
    prefix_only      = { "action", false },
    absent           = { "append", false },
    empty_name       = { "", false },
)]
fn contains_is_exact(name: &str, expected: bool) {
    let caps: CapabilitySet = ["actions", "body", "x-canonical-append"].into_iter().collect();
    assert_eq!(caps.contains(name), expected);
}

#[test]
fn empty_set_contains_nothing() {
    let caps = CapabilitySet::default();
    assert!(caps.is_empty());
    assert!(!caps.contains(ACTIONS));
    assert!(!caps.contains(""));
}

#[test]
fn iter_preserves_service_order() {
    let caps = CapabilitySet::new(vec!["body".into(), "actions".into()]);
    assert_eq!(caps.iter().collect::<Vec<_>>(), vec!["body", "actions"]);
    assert_eq!(caps.len(), 2);
}
