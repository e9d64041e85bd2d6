// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common test utilities for integration tests

use zonevet::conflicts::RecordLookup;
use zonevet::record::{Domain, Record, RecordId, RecordType};
use zonevet::resolver::DomainLookup;

/// In-memory store standing in for the persistence layer.
///
/// Implements both lookup capabilities the validators consume and assigns
/// sequential ids on insert, like the real store would.
pub struct MemoryStore {
    records: Vec<Record>,
    domains: Vec<Domain>,
    next_id: RecordId,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            records: Vec::new(),
            domains: Vec::new(),
            next_id: 1,
        }
    }

    /// Persist a record, assigning it the next id.
    pub fn insert_record(&mut self, mut record: Record) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        record.id = Some(id);
        self.records.push(record);
        id
    }

    /// Register a zone.
    pub fn insert_domain(&mut self, domain: Domain) {
        self.domains.push(domain);
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == Some(id))
    }
}

impl RecordLookup for MemoryStore {
    fn find_by_name(&self, name: &str, record_type: Option<RecordType>) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.name == name)
            .filter(|r| record_type.map_or(true, |t| r.record_type == t))
            .cloned()
            .collect()
    }
}

impl DomainLookup for MemoryStore {
    fn find_by_names(&self, names: &[String]) -> Vec<Domain> {
        self.domains
            .iter()
            .filter(|d| names.contains(&d.name))
            .cloned()
            .collect()
    }
}
