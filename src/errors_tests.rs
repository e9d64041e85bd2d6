// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for error types.

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_invalid_domain_name_error() {
        let error = ValidationError::InvalidDomainName {
            value: "example.com.".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid domain name: 'example.com.'");
    }

    #[test]
    fn test_malformed_soa_error() {
        let error = ValidationError::MalformedSoa {
            value: "too few".to_string(),
        };

        assert_eq!(error.to_string(), "Enter a valid SOA record: 'too few'");
    }

    #[test]
    fn test_soa_field_not_domain_name_error() {
        let error = ValidationError::SoaFieldNotDomainName {
            field: "e-mail",
            value: "admin@example".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Incorrect e-mail 'admin@example' in SOA record; expected a domain name"
        );
    }

    #[test]
    fn test_soa_field_not_number_error() {
        let error = ValidationError::SoaFieldNotNumber {
            field: "Serial",
            value: "abc".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Incorrect Serial 'abc' in SOA record; expected a decimal number"
        );
    }

    #[test]
    fn test_name_equals_content_error() {
        let error = ValidationError::NameEqualsContent {
            name: "ns1.example.com".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Cannot create record with the same name and content: 'ns1.example.com'"
        );
    }

    #[test]
    fn test_cname_conflict_error_joins_ids() {
        let error = ValidationError::CnameConflict {
            name: "www.example.com".to_string(),
            conflicting: vec![3, 17, 42],
        };

        assert_eq!(
            error.to_string(),
            "Cannot create CNAME record 'www.example.com'; conflicting records exist: 3, 17, 42"
        );
    }

    #[test]
    fn test_conflicts_with_cname_error() {
        let error = ValidationError::ConflictsWithCname {
            name: "www.example.com".to_string(),
            conflicting: vec![7],
        };

        assert_eq!(
            error.to_string(),
            "Cannot create record 'www.example.com'; conflicting CNAME record exists: 7"
        );
    }

    #[test]
    fn test_unknown_record_type_error() {
        let error = ValidationError::UnknownRecordType {
            value: "BOGUS".to_string(),
        };

        assert_eq!(error.to_string(), "Unknown record type: 'BOGUS'");
    }

    #[test]
    fn test_invalid_ipv4_error_names_value() {
        let source = "999.0.0.1".parse::<std::net::Ipv4Addr>().unwrap_err();
        let error = ValidationError::InvalidIpv4Address {
            value: "999.0.0.1".to_string(),
            source,
        };

        assert!(error.to_string().starts_with("Invalid IPv4 address '999.0.0.1'"));
    }

    #[test]
    fn test_reverse_error_names_value() {
        let source = "not-an-ip".parse::<std::net::IpAddr>().unwrap_err();
        let error = ReverseError::InvalidAddress {
            value: "not-an-ip".to_string(),
            source,
        };

        assert!(error.to_string().starts_with("Invalid IP address 'not-an-ip'"));
    }

    #[test]
    fn test_template_missing_key_error() {
        let error = TemplateError::MissingKey {
            key: "zone".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "No value provided for placeholder '{zone}'"
        );
    }

    #[test]
    fn test_template_unmatched_brace_error() {
        let error = TemplateError::UnmatchedBrace {
            template: "{open".to_string(),
        };

        assert_eq!(error.to_string(), "Unmatched brace in template: '{open'");
    }
}
