// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Object builders for the provisioned namespace, deployment and service

use crate::config::ProvisionConfig;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, Namespace, PodSpec, PodTemplateSpec, Service, ServicePort,
    ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;

pub fn namespace(config: &ProvisionConfig) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(config.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The selector and the pod template carry the same labels as the service selector
pub fn deployment(config: &ProvisionConfig) -> Deployment {
    let container = &config.container;

    Deployment {
        metadata: ObjectMeta {
            name: Some(config.deployment_name.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: config.replicas,
            selector: LabelSelector {
                match_labels: Some(config.labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(config.labels.clone()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: container.name.clone(),
                        image: Some(container.image.clone()),
                        image_pull_policy: Some(container.image_pull_policy.clone()),
                        ports: Some(vec![ContainerPort {
                            name: Some(container.port_name.clone()),
                            protocol: Some(container.protocol.clone()),
                            container_port: container.container_port,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn service(config: &ProvisionConfig) -> Service {
    let svc = &config.service;

    Service {
        metadata: ObjectMeta {
            name: Some(config.service_name.clone()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                name: Some(svc.port_name.clone()),
                port: svc.port,
                node_port: Some(svc.node_port),
                ..Default::default()
            }]),
            selector: Some(config.labels.clone()),
            type_: Some(svc.service_type.clone()),
            ..Default::default()
        }),
        ..Default::default()
    }
}
