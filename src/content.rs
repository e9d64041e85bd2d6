// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Type-dependent validation of record content.
//!
//! Each record type selects one rule: address records must carry a literal
//! of the matching IP family, SOA content must satisfy the seven-field
//! grammar, and the domain-name record types (CNAME, MX, NAPTR, NS, PTR)
//! must carry a valid domain name that differs from the record's own name.
//! Types with free-form content (SRV, TXT) pass through unchecked.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::errors::ValidationError;
use crate::record::RecordType;
use crate::validators::{validate_domain_name, validate_name_not_equal_content, validate_soa};

/// Validate record content against the rule for its type.
///
/// Callers normally reach this through [`Record::clean`], which lower-cases
/// the name first; the validator assumes its inputs are already normalized.
///
/// [`Record::clean`]: crate::record::Record::clean
///
/// # Errors
///
/// Returns [`ValidationError::InvalidIpv4Address`] /
/// [`ValidationError::InvalidIpv6Address`] for bad address literals, the
/// SOA grammar errors for SOA content, and
/// [`ValidationError::InvalidDomainName`] or
/// [`ValidationError::NameEqualsContent`] for the domain-name record types.
///
/// # Example
///
/// ```rust
/// use zonevet::content::validate_content;
/// use zonevet::record::RecordType;
///
/// validate_content(RecordType::A, "www.example.com", "192.0.2.1").unwrap();
/// assert!(validate_content(RecordType::A, "www.example.com", "not-an-ip").is_err());
/// ```
pub fn validate_content(
    record_type: RecordType,
    name: &str,
    content: &str,
) -> Result<(), ValidationError> {
    match record_type {
        RecordType::A => {
            content
                .parse::<Ipv4Addr>()
                .map_err(|source| ValidationError::InvalidIpv4Address {
                    value: content.to_string(),
                    source,
                })?;
        }
        RecordType::Aaaa => {
            content
                .parse::<Ipv6Addr>()
                .map_err(|source| ValidationError::InvalidIpv6Address {
                    value: content.to_string(),
                    source,
                })?;
        }
        RecordType::Soa => {
            validate_soa(content)?;
        }
        t if t.is_domain_name_type() => {
            validate_domain_name(content)?;
            validate_name_not_equal_content(name, content)?;
        }
        // SRV, TXT: content is free-form from this crate's perspective
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
