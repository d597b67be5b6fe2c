// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creates or removes a namespace, a deployment and a service as one group.
//!
//! Creation runs namespace, deployment, service; removal runs the reverse.
//! Each step is a single API call and the first failure stops the sequence.
//! Nothing done before the failure is undone.

pub mod resources;

use crate::config::ProvisionConfig;
use crate::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, Service};
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, ResourceExt,
};
use std::fmt;
use std::io::Write;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Clean,
}

impl Operation {
    /// `clean` selects removal; every other value means create
    pub fn from_flag(value: &str) -> Self {
        if value == "clean" {
            Operation::Clean
        } else {
            Operation::Create
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Clean => write!(f, "clean"),
        }
    }
}

pub struct Provisioner {
    client: Client,
    config: ProvisionConfig,
}

impl Provisioner {
    pub fn new(client: Client, config: ProvisionConfig) -> Self {
        Self { client, config }
    }

    pub async fn run<W: Write>(&self, operation: Operation, out: &mut W) -> Result<()> {
        info!("Running {} for namespace {}", operation, self.config.namespace);
        match operation {
            Operation::Create => self.create(out).await,
            Operation::Clean => self.clean(out).await,
        }
    }

    #[instrument(skip(self, out), fields(namespace = %self.config.namespace))]
    pub async fn create<W: Write>(&self, out: &mut W) -> Result<()> {
        let pp = PostParams::default();

        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let ns = namespaces
            .create(&pp, &resources::namespace(&self.config))
            .await?;
        info!("Namespace {} created", ns.name_any());
        writeln!(out, "Create namespace {}", ns.name_any())?;

        let deployments: Api<Deployment> =
            Api::namespaced(self.client.clone(), &self.config.namespace);
        let deploy = deployments
            .create(&pp, &resources::deployment(&self.config))
            .await?;
        info!("Deployment {} created", deploy.name_any());
        writeln!(out, "Create deployment {}", deploy.name_any())?;

        let services: Api<Service> = Api::namespaced(self.client.clone(), &self.config.namespace);
        let svc = services
            .create(&pp, &resources::service(&self.config))
            .await?;
        info!("Service {} created", svc.name_any());
        writeln!(out, "Create service {}", svc.name_any())?;

        Ok(())
    }

    /// Issue the three deletes without waiting for any of them to finish
    #[instrument(skip(self, out), fields(namespace = %self.config.namespace))]
    pub async fn clean<W: Write>(&self, out: &mut W) -> Result<()> {
        let dp = DeleteParams::default();
        let ns = &self.config.namespace;

        let services: Api<Service> = Api::namespaced(self.client.clone(), ns);
        services.delete(&self.config.service_name, &dp).await?;
        info!("Service {} deleted", self.config.service_name);
        writeln!(out, "Delete service {}", self.config.service_name)?;

        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), ns);
        deployments
            .delete(&self.config.deployment_name, &dp)
            .await?;
        info!("Deployment {} deleted", self.config.deployment_name);
        writeln!(out, "Delete deployment {}", self.config.deployment_name)?;

        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        namespaces.delete(ns, &dp).await?;
        info!("Namespace {} deleted", ns);
        writeln!(out, "Delete namespace {}", ns)?;

        Ok(())
    }
}
