// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Grammar validators for domain names, time fields and SOA content.
//!
//! All patterns are compiled once into process-wide statics. Each
//! validator succeeds silently or returns a [`ValidationError`] naming the
//! offending value; nothing here touches the store.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{
    SOA_FIELD_COUNT, SOA_FIELD_DOMAIN_NAME, SOA_FIELD_EMAIL, SOA_FIELD_EXPIRY,
    SOA_FIELD_NEGATIVE_TTL, SOA_FIELD_REFRESH, SOA_FIELD_RETRY, SOA_FIELD_SERIAL,
};
use crate::errors::ValidationError;

// PowerDNS considers the whole zone to be invalid if any of the records end
// with a period, so the domain-name pattern rejects a trailing dot.
//
// Valid: example.com
// Valid: *.example.com
// Invalid: example.com.
// Invalid: ex*mple.com
static DOMAIN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*\.)?([_A-Za-z0-9-]+\.)*([A-Za-z0-9])+$")
        .expect("domain name pattern must compile")
});

// Relaxed grammar for SOA name and e-mail fields: dots may appear anywhere
// and the empty string is permitted.
static OPTIONALLY_DOTTED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.-]*$").expect("dotted name pattern must compile")
});

static TIME_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("time field pattern must compile"));

/// Validate a record owner name against the RFC 1035 subset PowerDNS
/// accepts, with an optional leading `*.` wildcard.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDomainName`] if the value does not
/// match the grammar.
pub fn validate_domain_name(value: &str) -> Result<(), ValidationError> {
    if DOMAIN_NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDomainName {
            value: value.to_string(),
        })
    }
}

/// Validate the relaxed dotted-name grammar used for SOA name and e-mail
/// fields.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidOptionallyDottedName`] if the value
/// contains anything beyond letters, digits, dots and dashes.
pub fn validate_optionally_dotted_name(value: &str) -> Result<(), ValidationError> {
    if OPTIONALLY_DOTTED_NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOptionallyDottedName {
            value: value.to_string(),
        })
    }
}

/// Validate a decimal time/serial field (one or more digits).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimeField`] if the value is not
/// entirely decimal digits.
pub fn validate_time_field(value: &str) -> Result<(), ValidationError> {
    if TIME_FIELD_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTimeField {
            value: value.to_string(),
        })
    }
}

/// Validate that a record does not point at itself.
///
/// In theory an NS record can carry the same name and content and work with
/// a glue record configuration. It is not good practice, so such a
/// configuration is rejected.
///
/// # Errors
///
/// Returns [`ValidationError::NameEqualsContent`] when `name == content`.
pub fn validate_name_not_equal_content(name: &str, content: &str) -> Result<(), ValidationError> {
    if name == content {
        return Err(ValidationError::NameEqualsContent {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Validate SOA record content.
///
/// The content must split on whitespace into exactly seven fields:
/// primary nameserver, responsible e-mail, serial, refresh, retry, expiry
/// and negative-response TTL. The first two are checked against the
/// dotted-name grammar, the remaining five must be decimal numbers. The
/// first failing field aborts validation and is named in the error.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedSoa`] on wrong field count,
/// [`ValidationError::SoaFieldNotDomainName`] or
/// [`ValidationError::SoaFieldNotNumber`] when a field fails its grammar.
///
/// # Example
///
/// ```rust
/// use zonevet::validators::validate_soa;
///
/// validate_soa("ns1.example.com hostmaster.example.com 2024010101 3600 600 604800 86400")
///     .expect("well-formed SOA content");
/// assert!(validate_soa("ns1.example.com too few fields").is_err());
/// ```
pub fn validate_soa(value: &str) -> Result<(), ValidationError> {
    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() != SOA_FIELD_COUNT {
        return Err(ValidationError::MalformedSoa {
            value: value.to_string(),
        });
    }

    for (subvalue, field) in [
        (fields[0], SOA_FIELD_DOMAIN_NAME),
        (fields[1], SOA_FIELD_EMAIL),
    ] {
        if validate_optionally_dotted_name(subvalue).is_err() {
            return Err(ValidationError::SoaFieldNotDomainName {
                field,
                value: subvalue.to_string(),
            });
        }
    }

    for (subvalue, field) in [
        (fields[2], SOA_FIELD_SERIAL),
        (fields[3], SOA_FIELD_REFRESH),
        (fields[4], SOA_FIELD_RETRY),
        (fields[5], SOA_FIELD_EXPIRY),
        (fields[6], SOA_FIELD_NEGATIVE_TTL),
    ] {
        if validate_time_field(subvalue).is_err() {
            return Err(ValidationError::SoaFieldNotNumber {
                field,
                value: subvalue.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validators_tests.rs"]
mod validators_tests;
