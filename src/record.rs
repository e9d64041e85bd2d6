// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Core data types for zone records and domains.
//!
//! The types here are deliberately framework-free: the surrounding
//! application owns persistence and maps its rows into [`Record`] and
//! [`Domain`] values before calling into the validators.
//!
//! # Example
//!
//! ```rust
//! use zonevet::record::{Record, RecordType};
//!
//! let mut record = Record::new("WWW.Example.COM", RecordType::A, "192.0.2.1");
//! record.normalize();
//! assert_eq!(record.name, "www.example.com");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conflicts::{check_conflicts, RecordLookup};
use crate::constants::DOMAIN_NAME_RECORD_TYPES;
use crate::content::validate_content;
use crate::errors::ValidationError;

/// Stable identifier assigned to a record by the persistence layer.
pub type RecordId = i64;

/// Stable identifier assigned to a domain by the persistence layer.
pub type DomainId = i64;

/// The supported DNS record kinds.
///
/// Validation rules are dispatched on this enum; see
/// [`validate_content`](crate::content::validate_content). The canonical
/// wire names are upper-case (`"AAAA"`), and parsing accepts any case.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Naptr,
    Ns,
    Ptr,
    Soa,
    Srv,
    Txt,
}

impl RecordType {
    /// Canonical upper-case name of this record type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Naptr => "NAPTR",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
            RecordType::Soa => "SOA",
            RecordType::Srv => "SRV",
            RecordType::Txt => "TXT",
        }
    }

    /// Whether this type's content must itself be a valid domain name.
    ///
    /// True for CNAME, MX, NAPTR, NS and PTR records.
    #[must_use]
    pub fn is_domain_name_type(&self) -> bool {
        DOMAIN_NAME_RECORD_TYPES.contains(self)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    /// Parse a record type string, accepting any case.
    ///
    /// Upper-casing on input is what the original `clean` pipeline did
    /// with its stringly-typed column; the enum makes it a parse step.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "CNAME" => Ok(RecordType::Cname),
            "MX" => Ok(RecordType::Mx),
            "NAPTR" => Ok(RecordType::Naptr),
            "NS" => Ok(RecordType::Ns),
            "PTR" => Ok(RecordType::Ptr),
            "SOA" => Ok(RecordType::Soa),
            "SRV" => Ok(RecordType::Srv),
            "TXT" => Ok(RecordType::Txt),
            _ => Err(ValidationError::UnknownRecordType {
                value: s.to_string(),
            }),
        }
    }
}

/// A DNS zone record as seen by the validators.
///
/// `id` is `None` until the surrounding store has persisted the record;
/// the conflict checker uses it to exclude a record's own prior row when
/// validating an update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Persistence identifier, if already stored
    pub id: Option<RecordId>,
    /// Fully qualified owner name, e.g. `www.example.com`
    pub name: String,
    /// Record kind; selects the content validation rule
    pub record_type: RecordType,
    /// Type-dependent record data
    pub content: String,
    /// Time to live in seconds
    pub ttl: Option<u32>,
    /// Priority, meaningful for MX and SRV records
    pub prio: Option<u16>,
}

impl Record {
    /// Create an unpersisted record with no TTL or priority set.
    #[must_use]
    pub fn new(name: &str, record_type: RecordType, content: &str) -> Self {
        Record {
            id: None,
            name: name.to_string(),
            record_type,
            content: content.to_string(),
            ttl: None,
            prio: None,
        }
    }

    /// Force the owner name to lower case.
    ///
    /// The record type needs no equivalent step: its case is fixed by the
    /// enum, and [`RecordType::from_str`] upper-cases on input.
    pub fn normalize(&mut self) {
        self.name = self.name.to_lowercase();
    }

    /// Run the full validation sequence for a create or update.
    ///
    /// Normalizes case, validates the content against the type-specific
    /// rule, then checks for CNAME exclusivity conflicts against the
    /// records already in the store.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered; no partial
    /// validation state is retained.
    pub fn clean<L: RecordLookup>(&mut self, records: &L) -> Result<(), ValidationError> {
        self.normalize();
        validate_content(self.record_type, &self.name, &self.content)?;
        check_conflicts(self, records)?;
        Ok(())
    }
}

/// Replication mode of a zone, as PowerDNS models it.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DomainKind {
    Master,
    #[default]
    Native,
    Slave,
}

/// When PTR records should be created automatically for address records.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoPtrPolicy {
    /// Never create PTR records
    Never,
    /// Always create PTR records, creating the reverse zone if needed
    Always,
    /// Create PTR records only when a containing reverse zone exists
    #[default]
    OnlyIfDomain,
}

/// A zone known to the store.
///
/// Domains are read-only from this crate's perspective: the resolver
/// queries them for suffix matching and never creates or mutates one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Persistence identifier, if already stored
    pub id: Option<DomainId>,
    /// Zone apex name, e.g. `example.com` or `10.in-addr.arpa`
    pub name: String,
    /// Replication mode
    pub kind: DomainKind,
    /// Automatic PTR creation policy for records in this zone
    pub auto_ptr: AutoPtrPolicy,
}

impl Domain {
    /// Create an unpersisted `NATIVE` domain with the default PTR policy.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Domain {
            id: None,
            name: name.to_string(),
            kind: DomainKind::default(),
            auto_ptr: AutoPtrPolicy::default(),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
