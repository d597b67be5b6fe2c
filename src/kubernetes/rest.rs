// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! REST client scoped to a single API group/version

use crate::error::Result;
use crate::types::GroupVersion;
use kube::api::{ListParams, ObjectList};
use kube::core::Request;
use kube::Client;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Issues raw requests against `/{api|apis}/{group_version}/...` and decodes
/// the responses straight into typed lists
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    group_version: GroupVersion,
}

impl RestClient {
    pub fn for_group_version(client: Client, group_version: GroupVersion) -> Self {
        Self {
            client,
            group_version,
        }
    }

    /// URL path of a resource collection, namespaced when `namespace` is set
    pub fn collection_path(&self, namespace: Option<&str>, resource: &str) -> String {
        let mut path = format!(
            "/{}/{}",
            self.group_version.api_prefix(),
            self.group_version
        );
        if let Some(ns) = namespace {
            path.push_str("/namespaces/");
            path.push_str(ns);
        }
        path.push('/');
        path.push_str(resource);
        path
    }

    /// GET a collection and decode it into `ObjectList<T>`
    #[instrument(skip(self, lp), fields(gv = %self.group_version))]
    pub async fn list<T>(
        &self,
        namespace: Option<&str>,
        resource: &str,
        lp: &ListParams,
    ) -> Result<ObjectList<T>>
    where
        T: Clone + DeserializeOwned + Debug,
    {
        let request: http::Request<Vec<u8>> =
            Request::new(self.collection_path(namespace, resource)).list(lp)?;
        debug!("GET {}", request.uri());

        Ok(self.client.request::<ObjectList<T>>(request).await?)
    }
}
