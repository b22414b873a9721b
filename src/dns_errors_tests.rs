// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for DNS error types.

#[cfg(test)]
mod tests {
    use crate::dns_errors::*;
    use std::path::PathBuf;

    #[test]
    fn test_nameserver_required_error() {
        let error = ConfigError::NameserverRequired {
            zone: "example.com.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "nameserver required for primary zone example.com."
        );
    }

    #[test]
    fn test_master_required_error() {
        let error = ConfigError::MasterRequired {
            zone: "example.org.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "master required for secondary zone example.org."
        );
    }

    #[test]
    fn test_invalid_ttl_error() {
        let error = ConfigError::InvalidTtl {
            zone: "example.com.".to_string(),
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "ttl must be positive for record www.example.com. A in zone example.com."
        );
    }

    #[test]
    fn test_empty_document_error_names_path() {
        let error = ConfigError::EmptyDocument {
            path: PathBuf::from("dnsdata.yaml"),
        };

        assert!(error.to_string().contains("dnsdata.yaml"));
    }

    #[test]
    fn test_api_error_status() {
        let http = ApiError::Http {
            url: "u".into(),
            status: 500,
            message: "boom".into(),
        };
        let unexpected = ApiError::UnexpectedStatus {
            url: "u".into(),
            expected: 201,
            status: 204,
        };
        let timeout = ApiError::Timeout {
            url: "u".into(),
            timeout_ms: 10,
        };

        assert_eq!(http.status(), Some(500));
        assert_eq!(unexpected.status(), Some(204));
        assert_eq!(timeout.status(), None);
    }

    #[test]
    fn test_zone_creation_failed_error() {
        let error = ZoneError::CreationFailed {
            zone: "example.com.".to_string(),
            reason: "HTTP 500".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "failed to create zone 'example.com.': HTTP 500"
        );
    }

    #[test]
    fn test_record_upsert_failed_error() {
        let error = RecordError::UpsertFailed {
            zone: "example.com.".to_string(),
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
            reason: "HTTP 422".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "failed to create/update record www.example.com. A in zone 'example.com.': HTTP 422"
        );
    }

    #[test]
    fn test_dns_error_reason_codes() {
        let zone: DnsError = ZoneError::DeletionFailed {
            zone: "z.".into(),
            reason: "r".into(),
        }
        .into();
        let record: DnsError = RecordError::DeletionFailed {
            zone: "z.".into(),
            name: "n.z.".into(),
            record_type: "MX".into(),
            reason: "r".into(),
        }
        .into();

        assert_eq!(zone.reason_code(), "ZoneDeletionFailed");
        assert!(zone.is_zone_level());
        assert_eq!(record.reason_code(), "RecordDeletionFailed");
        assert!(!record.is_zone_level());
    }

    #[test]
    fn test_dns_error_display_is_transparent() {
        let inner = ZoneError::CreationFailed {
            zone: "a.example.".into(),
            reason: "nope".into(),
        };
        let outer = DnsError::from(inner.clone());

        assert_eq!(outer.to_string(), inner.to_string());
    }
}
