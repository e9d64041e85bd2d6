// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `content.rs`

use crate::content::validate_content;
use crate::errors::ValidationError;
use crate::record::RecordType;

#[test]
fn test_a_record_requires_ipv4() {
    assert!(validate_content(RecordType::A, "www.example.com", "192.0.2.1").is_ok());

    for content in ["192.0.2", "192.0.2.256", "2001:db8::1", "host.example.com"] {
        let error = validate_content(RecordType::A, "www.example.com", content).unwrap_err();
        assert!(
            matches!(error, ValidationError::InvalidIpv4Address { .. }),
            "unexpected error for {content:?}: {error}"
        );
    }
}

#[test]
fn test_aaaa_record_requires_ipv6() {
    assert!(validate_content(RecordType::Aaaa, "www.example.com", "2001:db8::1").is_ok());
    assert!(
        validate_content(RecordType::Aaaa, "www.example.com", "2001:0db8:0:0::1428:57ab").is_ok()
    );

    for content in ["192.0.2.1", "2001:db8::g", "not-an-ip"] {
        let error = validate_content(RecordType::Aaaa, "www.example.com", content).unwrap_err();
        assert!(
            matches!(error, ValidationError::InvalidIpv6Address { .. }),
            "unexpected error for {content:?}: {error}"
        );
    }
}

#[test]
fn test_soa_record_uses_soa_grammar() {
    assert!(validate_content(
        RecordType::Soa,
        "example.com",
        "ns1.example.com hostmaster.example.com 2024010101 3600 600 604800 86400",
    )
    .is_ok());

    let error = validate_content(RecordType::Soa, "example.com", "not a soa").unwrap_err();
    assert!(matches!(error, ValidationError::MalformedSoa { .. }));
}

#[test]
fn test_domain_name_types_require_domain_name_content() {
    for record_type in [
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Naptr,
        RecordType::Ns,
        RecordType::Ptr,
    ] {
        assert!(
            validate_content(record_type, "alias.example.com", "target.example.com").is_ok(),
            "{record_type} rejected a valid target"
        );

        let error =
            validate_content(record_type, "alias.example.com", "target.example.com.").unwrap_err();
        assert!(
            matches!(error, ValidationError::InvalidDomainName { .. }),
            "{record_type} accepted a trailing dot"
        );
    }
}

#[test]
fn test_domain_name_types_reject_self_reference() {
    for record_type in [
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Naptr,
        RecordType::Ns,
        RecordType::Ptr,
    ] {
        let error =
            validate_content(record_type, "loop.example.com", "loop.example.com").unwrap_err();
        assert!(
            matches!(error, ValidationError::NameEqualsContent { .. }),
            "{record_type} accepted name == content"
        );
    }
}

#[test]
fn test_free_form_types_pass_through() {
    assert!(validate_content(RecordType::Txt, "example.com", "v=spf1 -all").is_ok());
    assert!(validate_content(RecordType::Txt, "example.com", "").is_ok());
    assert!(validate_content(RecordType::Srv, "_sip._tcp.example.com", "0 5 5060 sip.example.com")
        .is_ok());
}
