// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server groups and resources discovery

use crate::constants::DISCOVERY_SEPARATOR;
use crate::error::Result;
use crate::types::GroupVersion;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::Client;
use std::io::Write;
use tracing::{debug, info, instrument};

/// An API group as announced by the server. The core group has an empty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerGroup {
    pub name: String,
    /// Group-version strings, e.g. `apps/v1`
    pub versions: Vec<String>,
    pub preferred_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVersionResources {
    pub group_version: String,
    pub parsed: GroupVersion,
    /// Resource names in server order, subresources included
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub groups: Vec<ServerGroup>,
    pub resources: Vec<GroupVersionResources>,
}

impl DiscoveryReport {
    /// All `(group, resource)` pairs across every group-version
    pub fn resource_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resources.iter().flat_map(|gvr| {
            gvr.resources
                .iter()
                .map(move |r| (gvr.parsed.group.as_str(), r.as_str()))
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "APIGroup:")?;
        writeln!(out)?;
        for group in &self.groups {
            writeln!(
                out,
                " name=[{}] versions={:?} preferred={}",
                group.name,
                group.versions,
                group.preferred_version.as_deref().unwrap_or_default()
            )?;
        }
        writeln!(out)?;

        for gvr in &self.resources {
            writeln!(out, "{}", DISCOVERY_SEPARATOR)?;
            writeln!(out, "GV string [{}]", gvr.group_version)?;
            writeln!(out, "GV struct [{:?}]", gvr.parsed)?;
            writeln!(out, "resources:")?;
            writeln!(out)?;
            for resource in &gvr.resources {
                writeln!(out, "{}", resource)?;
            }
        }
        Ok(())
    }
}

/// Ask the server for every group, every version of each group, and the
/// resources served under each group-version. The core group comes first.
#[instrument(skip(client))]
pub async fn discover(client: &Client) -> Result<DiscoveryReport> {
    let mut report = DiscoveryReport::default();

    let core = client.list_core_api_versions().await?;
    report.groups.push(ServerGroup {
        name: String::new(),
        versions: core.versions.clone(),
        preferred_version: core.versions.first().cloned(),
    });

    let api_groups = client.list_api_groups().await?;
    for group in &api_groups.groups {
        report.groups.push(ServerGroup {
            name: group.name.clone(),
            versions: group.versions.iter().map(|v| v.group_version.clone()).collect(),
            preferred_version: group
                .preferred_version
                .as_ref()
                .map(|v| v.group_version.clone()),
        });
    }
    info!("Server announced {} groups", report.groups.len());

    for version in &core.versions {
        let list = client.list_core_api_resources(version).await?;
        report.resources.push(collect_resources(list)?);
    }

    for group in &api_groups.groups {
        for version in &group.versions {
            debug!("Listing resources of {}", version.group_version);
            let list = client
                .list_api_group_resources(&version.group_version)
                .await?;
            report.resources.push(collect_resources(list)?);
        }
    }

    Ok(report)
}

fn collect_resources(list: APIResourceList) -> Result<GroupVersionResources> {
    let parsed: GroupVersion = list.group_version.parse()?;
    Ok(GroupVersionResources {
        group_version: list.group_version,
        parsed,
        resources: list.resources.into_iter().map(|r| r.name).collect(),
    })
}
