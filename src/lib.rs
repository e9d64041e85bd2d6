// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # zonevet - DNS record validation for PowerDNS-compatible zone management
//!
//! zonevet decides whether a record or domain configuration is well-formed
//! and non-conflicting before the surrounding application persists it. It
//! owns the DNS-domain logic only; persistence, HTTP surfaces and the DNS
//! protocol itself belong to the caller.
//!
//! ## Overview
//!
//! This library provides:
//!
//! - Reverse-IP computation for PTR records (`in-addr.arpa` / `ip6.arpa`)
//! - Pattern-based grammar validators for domain names and SOA content
//! - Record-type-dependent content validation
//! - CNAME exclusivity conflict checking against an injected record store
//! - Longest-suffix resolution of record names to containing zones
//! - A recursive template formatter for nested configuration documents
//!
//! ## Modules
//!
//! - [`record`] - Record and domain data types and the `clean` pipeline
//! - [`validators`] - Precompiled grammar validators
//! - [`content`] - Type-dispatched content validation
//! - [`conflicts`] - CNAME exclusivity checking
//! - [`resolver`] - Longest-suffix zone resolution
//! - [`reverse`] - PTR reverse-IP mapping and auto-PTR planning
//! - [`template`] - Recursive template interpolation
//! - [`diff`] - Flat field diffing for audit history
//! - [`errors`] - Error types for every failure the crate can raise
//!
//! ## Example
//!
//! ```rust
//! use zonevet::conflicts::RecordLookup;
//! use zonevet::record::{Record, RecordType};
//!
//! // A store with no records: every lookup comes back empty.
//! struct EmptyStore;
//!
//! impl RecordLookup for EmptyStore {
//!     fn find_by_name(&self, _name: &str, _record_type: Option<RecordType>) -> Vec<Record> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut record = Record::new("WWW.Example.COM", RecordType::A, "192.0.2.1");
//! record.clean(&EmptyStore).expect("a well-formed A record");
//! assert_eq!(record.name, "www.example.com");
//! ```
//!
//! All operations are synchronous and side-effect-free apart from raising
//! errors and issuing read queries through the two lookup traits
//! ([`conflicts::RecordLookup`], [`resolver::DomainLookup`]). The conflict
//! check and eventual persistence are not atomic; a uniqueness constraint
//! in the store remains the backstop for concurrent writers.

pub mod conflicts;
pub mod constants;
pub mod content;
pub mod diff;
pub mod errors;
pub mod record;
pub mod resolver;
pub mod reverse;
pub mod template;
pub mod validators;

#[cfg(test)]
mod errors_tests;
