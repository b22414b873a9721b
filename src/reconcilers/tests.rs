// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared test helpers for the reconcilers: an in-memory PowerDNS stand-in
//! that records every call in order.

use crate::config::{RecordSpec, ZoneKind, ZoneSpec};
use crate::context::ExecutionContext;
use crate::dns_errors::ApiError;
use crate::pdns::{ChangeType, CreateZoneRequest, DnsApi, ProbeOutcome, RrsetPatch};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// One call received by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Probe(String),
    CreateZone(CreateZoneRequest),
    Patch(String, RrsetPatch),
    DeleteZone(String),
}

/// In-memory API. Zones created through it become present; zones deleted
/// through it become absent.
#[derive(Default)]
pub(crate) struct FakeApi {
    zones: Mutex<HashSet<String>>,
    indeterminate: HashMap<String, String>,
    failing_creates: HashSet<String>,
    failing_patches: HashSet<String>,
    failing_zone_deletes: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_zone(self, zone: &str) -> Self {
        self.zones.lock().unwrap().insert(zone.to_string());
        self
    }

    pub(crate) fn indeterminate_probe(mut self, zone: &str) -> Self {
        self.indeterminate
            .insert(zone.to_string(), "HTTP 503 from fake".to_string());
        self
    }

    pub(crate) fn failing_create(mut self, zone: &str) -> Self {
        self.failing_creates.insert(zone.to_string());
        self
    }

    /// Any patch touching an rrset with this owner name fails.
    pub(crate) fn failing_patch(mut self, record_name: &str) -> Self {
        self.failing_patches.insert(record_name.to_string());
        self
    }

    pub(crate) fn failing_zone_delete(mut self, zone: &str) -> Self {
        self.failing_zone_deletes.insert(zone.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn creates(&self) -> usize {
        self.count(|c| matches!(c, Call::CreateZone(_)))
    }

    pub(crate) fn patches(&self) -> Vec<(String, RrsetPatch)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Patch(zone, patch) => Some((zone, patch)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn has_zone(&self, zone: &str) -> bool {
        self.zones.lock().unwrap().contains(zone)
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn server_error(url: &str) -> ApiError {
        ApiError::Http {
            url: url.to_string(),
            status: 500,
            message: "fake failure".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl DnsApi for FakeApi {
    async fn probe_zone(&self, zone_name: &str) -> ProbeOutcome {
        self.push(Call::Probe(zone_name.to_string()));
        if let Some(reason) = self.indeterminate.get(zone_name) {
            return ProbeOutcome::Indeterminate {
                reason: reason.clone(),
            };
        }
        if self.has_zone(zone_name) {
            ProbeOutcome::Present
        } else {
            ProbeOutcome::Absent
        }
    }

    async fn create_zone(&self, request: &CreateZoneRequest) -> Result<(), ApiError> {
        self.push(Call::CreateZone(request.clone()));
        if self.failing_creates.contains(&request.name) {
            return Err(Self::server_error(&request.name));
        }
        self.zones.lock().unwrap().insert(request.name.clone());
        Ok(())
    }

    async fn patch_rrsets(&self, zone_name: &str, patch: &RrsetPatch) -> Result<(), ApiError> {
        self.push(Call::Patch(zone_name.to_string(), patch.clone()));
        if patch
            .rrsets
            .iter()
            .any(|rrset| self.failing_patches.contains(&rrset.name))
        {
            return Err(Self::server_error(zone_name));
        }
        Ok(())
    }

    async fn delete_zone(&self, zone_name: &str) -> Result<(), ApiError> {
        self.push(Call::DeleteZone(zone_name.to_string()));
        if self.failing_zone_deletes.contains(zone_name) {
            return Err(Self::server_error(zone_name));
        }
        self.zones.lock().unwrap().remove(zone_name);
        Ok(())
    }
}

/// Context over a shared fake, returning both so tests can inspect calls.
pub(crate) fn context(api: FakeApi) -> (ExecutionContext, Arc<FakeApi>) {
    let api = Arc::new(api);
    (ExecutionContext::new(api.clone()), api)
}

pub(crate) fn native_zone(name: &str, records: Vec<RecordSpec>) -> ZoneSpec {
    ZoneSpec {
        name: name.to_string(),
        kind: ZoneKind::Native,
        nameservers: vec![],
        masters: vec![],
        records,
    }
}

pub(crate) fn a_record(name: &str, content: &[&str]) -> RecordSpec {
    RecordSpec {
        name: name.to_string(),
        record_type: "A".to_string(),
        ttl: 300,
        disabled: false,
        content: content.iter().map(ToString::to_string).collect(),
    }
}

pub(crate) fn changetype(patch: &RrsetPatch) -> ChangeType {
    patch.rrsets[0].changetype
}
