// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Flat field diffing for audit history.
//!
//! The surrounding application snapshots a record's fields before and
//! after a change and stores the resulting diff in its history log;
//! nothing is persisted here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An old/new value pair for a single field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Value before the change
    pub old: String,
    /// Value after the change
    pub new: String,
}

/// Diff two flat field maps.
///
/// Reports an old/new pair for every key present in both maps. Keys
/// appearing in only one map are skipped, and equal values are reported
/// too; callers diff snapshots they already know to differ.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use zonevet::diff::flat_diff;
///
/// let old = BTreeMap::from([("ttl".to_string(), "300".to_string())]);
/// let new = BTreeMap::from([("ttl".to_string(), "3600".to_string())]);
///
/// let diff = flat_diff(&old, &new);
/// assert_eq!(diff["ttl"].old, "300");
/// assert_eq!(diff["ttl"].new, "3600");
/// ```
#[must_use]
pub fn flat_diff(
    old: &BTreeMap<String, String>,
    new: &BTreeMap<String, String>,
) -> BTreeMap<String, FieldChange> {
    old.iter()
        .filter_map(|(key, old_value)| {
            new.get(key).map(|new_value| {
                (
                    key.clone(),
                    FieldChange {
                        old: old_value.clone(),
                        new: new_value.clone(),
                    },
                )
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod diff_tests;
