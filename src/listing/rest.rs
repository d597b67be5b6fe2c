// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod listing across all namespaces with the core/v1 REST client

use super::PodTable;
use crate::constants::listing::{POD_RESOURCE, REST_LIMIT};
use crate::error::Result;
use crate::kubernetes::RestClient;
use crate::types::{GroupVersion, PodRow};
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::{Api, ListParams};
use kube::{Client, ResourceExt};
use std::io::Write;
use tracing::{debug, info, instrument};

pub struct RestPodLister {
    namespaces: Api<Namespace>,
    rest: RestClient,
    limit: u32,
}

impl RestPodLister {
    pub fn new(client: Client, limit: u32) -> Self {
        Self {
            namespaces: Api::all(client.clone()),
            rest: RestClient::for_group_version(client, GroupVersion::new("", "v1")),
            limit,
        }
    }

    pub fn with_defaults(client: Client) -> Self {
        Self::new(client, REST_LIMIT)
    }

    /// Every namespace name, unpaginated
    pub async fn namespace_names(&self) -> Result<Vec<String>> {
        let list = self.namespaces.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(|ns| ns.name_any()).collect())
    }

    pub async fn list_namespace(&self, namespace: &str) -> Result<Vec<PodRow>> {
        let pods = self
            .rest
            .list::<Pod>(
                Some(namespace),
                POD_RESOURCE,
                &ListParams::default().limit(self.limit),
            )
            .await?;
        debug!("{} pods in {}", pods.items.len(), namespace);
        Ok(pods.items.iter().map(PodRow::from).collect())
    }

    /// Print the pod table namespace by namespace, flushing after each one.
    /// Nothing is printed when the namespace list fails. A later failure
    /// stops the walk and leaves the rows already written in `out`.
    #[instrument(skip(self, out))]
    pub async fn write_table<W: Write>(&self, table: PodTable, out: &mut W) -> Result<()> {
        let namespaces = self.namespace_names().await?;
        info!("Listing pods in {} namespaces", namespaces.len());

        table.write_header(out)?;
        for namespace in &namespaces {
            let rows = self.list_namespace(namespace).await?;
            table.write_rows(out, &rows)?;
            out.flush()?;
        }
        Ok(())
    }
}
