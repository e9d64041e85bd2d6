// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CNAME exclusivity checking.
//!
//! DNS forbids a name from carrying a CNAME alongside any other record
//! type. This module enforces that rule at validation time by scanning the
//! store for clashes: a new CNAME conflicts with any existing record at
//! the same name, and any new record conflicts with an existing CNAME.
//!
//! The scan and the eventual persistence are not atomic; a uniqueness
//! constraint in the store remains the backstop for concurrent writers.

use tracing::{debug, warn};

use crate::errors::ValidationError;
use crate::record::{Record, RecordType};

/// Read-only record lookup capability supplied by the persistence layer.
///
/// Implementations return all records whose owner name matches exactly,
/// optionally narrowed to one record type. Results must carry the store's
/// stable identifiers so conflicts can be reported and updates can exclude
/// their own row.
pub trait RecordLookup {
    /// Find records by exact owner name, optionally filtered by type.
    fn find_by_name(&self, name: &str, record_type: Option<RecordType>) -> Vec<Record>;
}

/// Ensure a record does not violate CNAME exclusivity.
///
/// For a CNAME record the scan covers every type at the same name; for any
/// other type it covers only CNAME records. A persisted record (`id` is
/// `Some`) is excluded from the scan by id, so updating an existing record
/// never conflicts with itself.
///
/// # Errors
///
/// Returns [`ValidationError::CnameConflict`] or
/// [`ValidationError::ConflictsWithCname`] carrying the identifiers of the
/// conflicting records.
pub fn check_conflicts<L: RecordLookup>(
    record: &Record,
    lookup: &L,
) -> Result<(), ValidationError> {
    let is_cname = record.record_type == RecordType::Cname;
    let scan_type = if is_cname {
        None
    } else {
        Some(RecordType::Cname)
    };

    debug!(
        name = %record.name,
        record_type = %record.record_type,
        "scanning for conflicting records"
    );

    let mut conflicting = lookup.find_by_name(&record.name, scan_type);
    if let Some(own_id) = record.id {
        conflicting.retain(|existing| existing.id != Some(own_id));
    }

    if conflicting.is_empty() {
        return Ok(());
    }

    let ids: Vec<_> = conflicting.iter().filter_map(|existing| existing.id).collect();
    warn!(
        name = %record.name,
        conflicting = ?ids,
        "record conflicts with existing records"
    );

    if is_cname {
        Err(ValidationError::CnameConflict {
            name: record.name.clone(),
            conflicting: ids,
        })
    } else {
        Err(ValidationError::ConflictsWithCname {
            name: record.name.clone(),
            conflicting: ids,
        })
    }
}

#[cfg(test)]
#[path = "conflicts_tests.rs"]
mod conflicts_tests;
