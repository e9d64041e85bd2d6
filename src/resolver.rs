// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Longest-suffix resolution of record names to containing zones.
//!
//! Given a candidate record name, the resolver asks the store for every
//! registered domain whose name is a suffix of it and picks the most
//! specific match. This is how PTR auto-creation locates the reverse zone
//! that should own a new pointer record.

use tracing::debug;

use crate::record::Domain;

/// Read-only domain lookup capability supplied by the persistence layer.
pub trait DomainLookup {
    /// Find domains whose name exactly matches one of the candidates.
    fn find_by_names(&self, names: &[String]) -> Vec<Domain>;
}

/// Find the most specific registered domain containing `name`.
///
/// Every suffix of the dotted name is considered, from the full name down
/// to the top-level label, and the longest-named match wins. `None` means
/// no registered zone contains the name, which is a valid outcome rather
/// than an error. When two matching domain names have equal length (the
/// store holds duplicates), the lexicographically smaller name wins so the
/// result does not depend on store ordering.
///
/// # Example
///
/// Given registered domains `10.in-addr.arpa` and `20.10.in-addr.arpa`,
/// resolving `30.20.10.in-addr.arpa` returns `20.10.in-addr.arpa`.
pub fn find_domain_for_name<L: DomainLookup>(name: &str, lookup: &L) -> Option<Domain> {
    let chunks: Vec<&str> = name.split('.').collect();
    let candidates: Vec<String> = (0..chunks.len()).map(|i| chunks[i..].join(".")).collect();

    let mut matching = lookup.find_by_names(&candidates);
    matching.sort_by(|a, b| {
        b.name
            .len()
            .cmp(&a.name.len())
            .then_with(|| a.name.cmp(&b.name))
    });

    debug!(
        name = %name,
        candidates = candidates.len(),
        matches = matching.len(),
        "resolved containing zones"
    );

    matching.into_iter().next()
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
