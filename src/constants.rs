// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for zonevet.
//!
//! This module contains all numeric and string constants used throughout the
//! codebase. Constants are organized by category for easy maintenance.

use crate::record::RecordType;

// ============================================================================
// Record Type Groupings
// ============================================================================

/// Record types whose content must itself be a domain name.
///
/// For these types the content is checked against the domain-name grammar
/// and must not equal the record's own name.
pub const DOMAIN_NAME_RECORD_TYPES: [RecordType; 5] = [
    RecordType::Cname,
    RecordType::Mx,
    RecordType::Naptr,
    RecordType::Ns,
    RecordType::Ptr,
];

// ============================================================================
// Reverse Zone Constants
// ============================================================================

/// Suffix of IPv4 reverse zones
pub const IN_ADDR_ARPA_SUFFIX: &str = "in-addr.arpa";

/// Suffix of IPv6 reverse zones
pub const IP6_ARPA_SUFFIX: &str = "ip6.arpa";

/// Number of hex digits in a fully expanded IPv6 address
pub const IPV6_EXPANDED_DIGITS: usize = 32;

// ============================================================================
// SOA Constants
// ============================================================================

/// Number of whitespace-separated fields in SOA record content
pub const SOA_FIELD_COUNT: usize = 7;

/// Display name of the SOA primary-nameserver field
pub const SOA_FIELD_DOMAIN_NAME: &str = "Domain name";

/// Display name of the SOA responsible-party field
pub const SOA_FIELD_EMAIL: &str = "e-mail";

/// Display name of the SOA serial field
pub const SOA_FIELD_SERIAL: &str = "Serial";

/// Display name of the SOA refresh field
pub const SOA_FIELD_REFRESH: &str = "Refresh rate";

/// Display name of the SOA retry field
pub const SOA_FIELD_RETRY: &str = "Retry rate";

/// Display name of the SOA expiry field
pub const SOA_FIELD_EXPIRY: &str = "Expiry time";

/// Display name of the SOA negative-response TTL field
pub const SOA_FIELD_NEGATIVE_TTL: &str = "Negative resp. time";

// ============================================================================
// Record Defaults
// ============================================================================

/// Default TTL for records created by callers of this crate (1 hour)
pub const DEFAULT_RECORD_TTL_SECS: u32 = 3600;
