// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `resolver.rs`

use crate::record::Domain;
use crate::resolver::{find_domain_for_name, DomainLookup};

struct FixedZones {
    domains: Vec<Domain>,
}

impl FixedZones {
    fn new(names: &[&str]) -> Self {
        FixedZones {
            domains: names.iter().map(|name| Domain::new(name)).collect(),
        }
    }
}

impl DomainLookup for FixedZones {
    fn find_by_names(&self, names: &[String]) -> Vec<Domain> {
        self.domains
            .iter()
            .filter(|d| names.contains(&d.name))
            .cloned()
            .collect()
    }
}

#[test]
fn test_exact_name_match() {
    let zones = FixedZones::new(&["example.com"]);
    let found = find_domain_for_name("example.com", &zones).unwrap();
    assert_eq!(found.name, "example.com");
}

#[test]
fn test_longest_suffix_wins() {
    let zones = FixedZones::new(&["10.in-addr.arpa", "20.10.in-addr.arpa"]);
    let found = find_domain_for_name("30.20.10.in-addr.arpa", &zones).unwrap();
    assert_eq!(found.name, "20.10.in-addr.arpa");
}

#[test]
fn test_subdomain_resolves_to_containing_zone() {
    let zones = FixedZones::new(&["existing-domain.com"]);
    let found = find_domain_for_name("sub-domain.on.existing-domain.com", &zones).unwrap();
    assert_eq!(found.name, "existing-domain.com");
}

#[test]
fn test_no_containing_zone_is_none() {
    let zones = FixedZones::new(&["example.com"]);
    assert!(find_domain_for_name("example.org", &zones).is_none());
}

#[test]
fn test_sibling_zone_is_not_a_suffix_match() {
    // "ample.com" is a substring suffix of the string but not a label
    // suffix of the dotted name.
    let zones = FixedZones::new(&["ample.com"]);
    assert!(find_domain_for_name("www.example.com", &zones).is_none());
}

#[test]
fn test_duplicate_zones_resolve_deterministically() {
    // Equal-length matches only arise when the store holds duplicate
    // names; resolution still returns a single deterministic result.
    let mut zones = FixedZones::new(&["example.com"]);
    zones.domains.push({
        let mut dup = Domain::new("example.com");
        dup.id = Some(2);
        dup
    });
    zones.domains[0].id = Some(1);

    let found = find_domain_for_name("www.example.com", &zones).unwrap();
    assert_eq!(found.name, "example.com");
}

#[test]
fn test_more_specific_zone_beats_apex() {
    let zones = FixedZones::new(&["example.com", "internal.example.com"]);
    let found = find_domain_for_name("db.internal.example.com", &zones).unwrap();
    assert_eq!(found.name, "internal.example.com");
}
