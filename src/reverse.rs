// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reverse-IP computation for PTR records.
//!
//! [`reverse_ip`] converts an IP address literal into the pieces of its
//! PTR owner name under `in-addr.arpa` / `ip6.arpa`, and
//! [`plan_ptr_record`] combines that with zone resolution to decide where
//! an automatically created pointer record should live.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::constants::{IN_ADDR_ARPA_SUFFIX, IP6_ARPA_SUFFIX, IPV6_EXPANDED_DIGITS};
use crate::errors::ReverseError;
use crate::record::{AutoPtrPolicy, Domain, Record, RecordType};
use crate::resolver::{find_domain_for_name, DomainLookup};

/// Split an IP address into the last unit and reverse-zone suffix of its
/// PTR owner name.
///
/// For IPv4 the unit is the numerically last octet and the suffix is the
/// remaining octets in reverse order under `in-addr.arpa`. For IPv6 the
/// address is expanded to its full 32 hex digits, the unit is the last
/// digit and the suffix is the remaining digits in reverse order under
/// `ip6.arpa`.
///
/// # Errors
///
/// Returns [`ReverseError::InvalidAddress`] if the input does not parse as
/// an IPv4 or IPv6 address.
///
/// # Example
///
/// ```rust
/// use zonevet::reverse::reverse_ip;
///
/// let (unit, suffix) = reverse_ip("192.168.1.2").unwrap();
/// assert_eq!(unit, "2");
/// assert_eq!(suffix, "1.168.192.in-addr.arpa");
/// ```
pub fn reverse_ip(ip: &str) -> Result<(String, String), ReverseError> {
    let addr: IpAddr = ip.parse().map_err(|source| ReverseError::InvalidAddress {
        value: ip.to_string(),
        source,
    })?;

    let parts = match addr {
        IpAddr::V4(v4) => {
            let mut reversed: Vec<String> =
                v4.octets().iter().rev().map(ToString::to_string).collect();
            let last_octet = reversed.remove(0);
            reversed.push(IN_ADDR_ARPA_SUFFIX.to_string());
            (last_octet, reversed.join("."))
        }
        IpAddr::V6(v6) => {
            // Full expansion, no "::" compression and no separators.
            let expanded: String = v6.segments().iter().map(|s| format!("{s:04x}")).collect();
            debug_assert_eq!(expanded.len(), IPV6_EXPANDED_DIGITS);
            let mut reversed: Vec<String> = expanded.chars().rev().map(String::from).collect();
            let last_digit = reversed.remove(0);
            reversed.push(IP6_ARPA_SUFFIX.to_string());
            (last_digit, reversed.join("."))
        }
    };
    Ok(parts)
}

/// Compute the full PTR owner name for an IP address.
///
/// This is [`reverse_ip`]'s two parts joined with a dot.
///
/// # Errors
///
/// Returns [`ReverseError::InvalidAddress`] if the input does not parse as
/// an IPv4 or IPv6 address.
///
/// # Example
///
/// ```rust
/// use zonevet::reverse::reverse_pointer;
///
/// assert_eq!(
///     reverse_pointer("192.168.1.2").unwrap(),
///     "2.1.168.192.in-addr.arpa"
/// );
/// ```
pub fn reverse_pointer(ip: &str) -> Result<String, ReverseError> {
    let (last_unit, suffix) = reverse_ip(ip)?;
    Ok(format!("{last_unit}.{suffix}"))
}

/// A pointer record that should be created for an address record.
///
/// `zone` is the reverse zone that should hold the record; `None` under
/// [`AutoPtrPolicy::Always`] means no matching reverse zone is registered
/// yet and the caller is expected to create one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PtrPlan {
    /// PTR owner name, e.g. `2.1.168.192.in-addr.arpa`
    pub name: String,
    /// PTR target: the forward record's owner name
    pub content: String,
    /// The registered reverse zone containing the owner name, if any
    pub zone: Option<Domain>,
}

/// Decide whether and where a PTR record should be created for an address
/// record.
///
/// Only `A` and `AAAA` records produce pointers; everything else yields
/// `None`, as does [`AutoPtrPolicy::Never`]. Under
/// [`AutoPtrPolicy::OnlyIfDomain`] a plan is produced only when a
/// registered reverse zone contains the computed owner name.
///
/// # Errors
///
/// Returns [`ReverseError::InvalidAddress`] when the record content is not
/// a parseable address. Content validation normally catches this first;
/// the error remains for callers that plan pointers without a prior
/// [`Record::clean`](crate::record::Record::clean).
pub fn plan_ptr_record<L: DomainLookup>(
    record: &Record,
    policy: AutoPtrPolicy,
    domains: &L,
) -> Result<Option<PtrPlan>, ReverseError> {
    if policy == AutoPtrPolicy::Never {
        return Ok(None);
    }
    if !matches!(record.record_type, RecordType::A | RecordType::Aaaa) {
        return Ok(None);
    }

    let name = reverse_pointer(&record.content)?;
    let zone = find_domain_for_name(&name, domains);

    if policy == AutoPtrPolicy::OnlyIfDomain && zone.is_none() {
        return Ok(None);
    }

    Ok(Some(PtrPlan {
        name,
        content: record.name.clone(),
        zone,
    }))
}

#[cfg(test)]
#[path = "reverse_tests.rs"]
mod reverse_tests;
