// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod listing through the untyped dynamic API

use crate::constants::listing::{DYNAMIC_LIMIT, DYNAMIC_NAMESPACE, POD_RESOURCE};
use crate::error::{DemoError, Result};
use crate::types::{PodRow, ResourceId};
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, DynamicObject, ListParams};
use kube::{Client, ResourceExt};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

/// Lists objects of any resource kind without compiled-in schema, then
/// converts them into pods for printing
pub struct DynamicPodLister {
    client: Client,
    resource: ResourceId,
    namespace: String,
    limit: u32,
}

impl DynamicPodLister {
    pub fn new(client: Client, resource: ResourceId, namespace: &str, limit: u32) -> Self {
        Self {
            client,
            resource,
            namespace: namespace.to_string(),
            limit,
        }
    }

    /// `v1/pods` in `kube-system`, at most 100 items
    pub fn with_defaults(client: Client) -> Self {
        Self::new(
            client,
            ResourceId::new("", "v1", POD_RESOURCE),
            DYNAMIC_NAMESPACE,
            DYNAMIC_LIMIT,
        )
    }

    #[instrument(skip(self), fields(resource = %self.resource.resource, namespace = %self.namespace))]
    pub async fn list(&self) -> Result<Vec<PodRow>> {
        let ar = self.resource.api_resource();
        let api: Api<DynamicObject> = Api::namespaced_with(self.client.clone(), &self.namespace, &ar);

        let list = api.list(&ListParams::default().limit(self.limit)).await?;
        info!("Fetched {} objects", list.items.len());

        list.items
            .into_iter()
            .map(|obj| {
                let pod: Pod = convert(obj)?;
                Ok(PodRow::from(&pod))
            })
            .collect()
    }
}

/// Re-read an untyped object as `K` through its JSON form
pub fn convert<K: DeserializeOwned>(obj: DynamicObject) -> Result<K> {
    let name = format!("{}/{}", obj.namespace().unwrap_or_default(), obj.name_any());
    debug!("Converting {}", name);

    let value = serde_json::to_value(&obj)
        .map_err(|e| DemoError::ConversionError(format!("{}: {}", name, e)))?;
    serde_json::from_value(value).map_err(|e| DemoError::ConversionError(format!("{}: {}", name, e)))
}
