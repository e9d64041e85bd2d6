// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for record validation, reverse-IP mapping and templating.
//!
//! This module provides specialized error types for:
//! - Record and zone validation (grammar, content and conflict checks)
//! - PTR reverse-IP computation from address literals
//! - Recursive template interpolation
//!
//! Every error carries the offending value so the surrounding application
//! can present it as a field-level error without re-deriving context.

use std::net::AddrParseError;

use thiserror::Error;

use crate::record::RecordId;

/// Join record ids for conflict error messages.
fn join_ids(ids: &[RecordId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while validating a record or zone configuration.
///
/// These are input defects, not transient failures; none of them are
/// retried. They are raised synchronously at the point of detection and
/// carry everything needed for a user-facing field error.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    /// A value does not match the record domain-name grammar.
    ///
    /// The grammar accepts an optional leading `*.` wildcard followed by
    /// dot-separated labels, e.g. `example.com` or `*.example.com`.
    /// A trailing dot is rejected: PowerDNS considers the whole zone
    /// invalid if any record name ends with a period.
    #[error("Invalid domain name: '{value}'")]
    InvalidDomainName {
        /// The rejected value
        value: String,
    },

    /// A value does not match the relaxed dotted-name grammar used for
    /// SOA name and e-mail fields (letters, digits, dots and dashes).
    #[error("Invalid dotted name: '{value}'")]
    InvalidOptionallyDottedName {
        /// The rejected value
        value: String,
    },

    /// A value that must be a decimal time/serial field is not numeric.
    #[error("Invalid time field: '{value}'")]
    InvalidTimeField {
        /// The rejected value
        value: String,
    },

    /// An SOA content string does not split into exactly seven
    /// whitespace-separated fields (name, e-mail, serial, refresh, retry,
    /// expiry, negative-response TTL).
    #[error("Enter a valid SOA record: '{value}'")]
    MalformedSoa {
        /// The full SOA content string
        value: String,
    },

    /// An SOA name or e-mail field failed the dotted-name grammar.
    #[error("Incorrect {field} '{value}' in SOA record; expected a domain name")]
    SoaFieldNotDomainName {
        /// Which SOA field failed (e.g. `Domain name`, `e-mail`)
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// An SOA timing or serial field is not a decimal number.
    #[error("Incorrect {field} '{value}' in SOA record; expected a decimal number")]
    SoaFieldNotNumber {
        /// Which SOA field failed (e.g. `Serial`, `Refresh rate`)
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// Content of an `A` record is not a valid IPv4 address literal.
    #[error("Invalid IPv4 address '{value}': {source}")]
    InvalidIpv4Address {
        /// The rejected content
        value: String,
        /// The underlying parse failure
        source: AddrParseError,
    },

    /// Content of an `AAAA` record is not a valid IPv6 address literal.
    #[error("Invalid IPv6 address '{value}': {source}")]
    InvalidIpv6Address {
        /// The rejected content
        value: String,
        /// The underlying parse failure
        source: AddrParseError,
    },

    /// A record points at itself.
    ///
    /// In theory an NS record can carry the same name and content and work
    /// with a glue record configuration; it is not good practice, so the
    /// configuration is rejected outright.
    #[error("Cannot create record with the same name and content: '{name}'")]
    NameEqualsContent {
        /// The offending name (equal to the content)
        name: String,
    },

    /// A CNAME record cannot be created because other records already
    /// exist at the same name.
    #[error(
        "Cannot create CNAME record '{name}'; conflicting records exist: {}",
        join_ids(.conflicting)
    )]
    CnameConflict {
        /// The record name being created or updated
        name: String,
        /// Identifiers of the conflicting records
        conflicting: Vec<RecordId>,
    },

    /// A record cannot be created because a CNAME already exists at the
    /// same name.
    #[error(
        "Cannot create record '{name}'; conflicting CNAME record exists: {}",
        join_ids(.conflicting)
    )]
    ConflictsWithCname {
        /// The record name being created or updated
        name: String,
        /// Identifiers of the conflicting CNAME records
        conflicting: Vec<RecordId>,
    },

    /// A record type string is not one of the supported kinds.
    #[error("Unknown record type: '{value}'")]
    UnknownRecordType {
        /// The rejected type string
        value: String,
    },
}

/// Errors raised while computing the PTR representation of an IP address.
#[derive(Error, Debug, Clone)]
pub enum ReverseError {
    /// The input does not parse as an IPv4 or IPv6 address.
    #[error("Invalid IP address '{value}': {source}")]
    InvalidAddress {
        /// The rejected input
        value: String,
        /// The underlying parse failure
        source: AddrParseError,
    },
}

/// Errors raised during recursive template interpolation.
#[derive(Error, Debug, Clone)]
pub enum TemplateError {
    /// A `{key}` placeholder references an argument that was not provided.
    #[error("No value provided for placeholder '{{{key}}}'")]
    MissingKey {
        /// The missing argument name
        key: String,
    },

    /// A placeholder brace is unterminated or a stray `}` appears outside
    /// an `}}` escape.
    #[error("Unmatched brace in template: '{template}'")]
    UnmatchedBrace {
        /// The offending template string
        template: String,
    },
}
