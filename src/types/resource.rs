// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::GroupVersion;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ApiResource;
use kube::ResourceExt;

/// Identifies a class of cluster objects by group, version and plural resource name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub group_version: GroupVersion,
    pub resource: String,
}

impl ResourceId {
    pub fn new(group: &str, version: &str, resource: &str) -> Self {
        Self {
            group_version: GroupVersion::new(group, version),
            resource: resource.to_string(),
        }
    }

    /// Type information for dynamic access. Listing only needs the plural,
    /// so the kind stays empty.
    pub fn api_resource(&self) -> ApiResource {
        ApiResource {
            group: self.group_version.group.clone(),
            version: self.group_version.version.clone(),
            api_version: self.group_version.to_string(),
            kind: String::new(),
            plural: self.resource.clone(),
        }
    }
}

/// The pod fields the listers print
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PodRow {
    pub namespace: String,
    pub phase: String,
    pub name: String,
}

impl From<&Pod> for PodRow {
    fn from(pod: &Pod) -> Self {
        Self {
            namespace: pod.namespace().unwrap_or_default(),
            phase: pod
                .status
                .as_ref()
                .and_then(|s| s.phase.clone())
                .unwrap_or_default(),
            name: pod.name_any(),
        }
    }
}
