// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for PowerDNS request payloads.

#[cfg(test)]
mod tests {
    use crate::config::{RecordSpec, ZoneKind, ZoneSpec};
    use crate::pdns::types::{CreateZoneRequest, ProbeOutcome, RrsetPatch};
    use serde_json::json;

    fn zone(kind: ZoneKind) -> ZoneSpec {
        ZoneSpec {
            name: "example.com.".to_string(),
            kind,
            nameservers: vec!["ns1.example.com.".to_string()],
            masters: vec!["192.0.2.1".to_string()],
            records: vec![],
        }
    }

    fn a_record(content: &[&str], disabled: bool) -> RecordSpec {
        RecordSpec {
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: 300,
            disabled,
            content: content.iter().map(ToString::to_string).collect(),
        }
    }

    // =====================================================
    // Zone creation payload
    // =====================================================

    #[test]
    fn test_primary_zone_sends_nameservers_and_empty_masters() {
        let body = serde_json::to_value(CreateZoneRequest::from_spec(&zone(ZoneKind::Primary)))
            .unwrap();

        assert_eq!(
            body,
            json!({
                "name": "example.com.",
                "kind": "MASTER",
                "masters": [],
                "nameservers": ["ns1.example.com."]
            })
        );
    }

    #[test]
    fn test_native_zone_sends_nameservers_and_empty_masters() {
        let body =
            serde_json::to_value(CreateZoneRequest::from_spec(&zone(ZoneKind::Native))).unwrap();

        assert_eq!(body["kind"], json!("NATIVE"));
        assert_eq!(body["masters"], json!([]));
        assert_eq!(body["nameservers"], json!(["ns1.example.com."]));
    }

    #[test]
    fn test_secondary_zone_sends_masters_and_empty_nameservers() {
        let body = serde_json::to_value(CreateZoneRequest::from_spec(&zone(ZoneKind::Secondary)))
            .unwrap();

        assert_eq!(
            body,
            json!({
                "name": "example.com.",
                "kind": "SLAVE",
                "masters": ["192.0.2.1"],
                "nameservers": []
            })
        );
    }

    // =====================================================
    // Rrset payloads
    // =====================================================

    #[test]
    fn test_replace_patch_bundles_every_content_entry_in_order() {
        let patch = RrsetPatch::replace(&a_record(&["1.2.3.4", "5.6.7.8"], true));
        let body = serde_json::to_value(&patch).unwrap();

        assert_eq!(
            body,
            json!({
                "rrsets": [{
                    "name": "www.example.com.",
                    "type": "A",
                    "ttl": 300,
                    "changetype": "REPLACE",
                    "records": [
                        {"content": "1.2.3.4", "disabled": true},
                        {"content": "5.6.7.8", "disabled": true}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_replace_patch_with_no_content_sends_empty_records() {
        let body = serde_json::to_value(RrsetPatch::replace(&a_record(&[], false))).unwrap();

        assert_eq!(body["rrsets"][0]["records"], json!([]));
    }

    #[test]
    fn test_delete_patch_omits_ttl_and_records() {
        let body = serde_json::to_value(RrsetPatch::delete(&a_record(&["1.2.3.4"], false))).unwrap();

        assert_eq!(
            body,
            json!({
                "rrsets": [{
                    "name": "www.example.com.",
                    "type": "A",
                    "changetype": "DELETE"
                }]
            })
        );
    }

    // =====================================================
    // Probe outcome
    // =====================================================

    #[test]
    fn test_only_present_exists() {
        assert!(ProbeOutcome::Present.exists());
        assert!(!ProbeOutcome::Absent.exists());
        assert!(!ProbeOutcome::Indeterminate {
            reason: "HTTP 500".into()
        }
        .exists());
    }
}
