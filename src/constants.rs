// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Pod listing defaults shared by the lister programs
pub mod listing {
    /// Namespace listed by the dynamic lister
    pub const DYNAMIC_NAMESPACE: &str = "kube-system";
    /// Item limit for the dynamic list call
    pub const DYNAMIC_LIMIT: u32 = 100;
    /// Item limit for each per-namespace REST list call
    pub const REST_LIMIT: u32 = 500;
    /// Resource kind both listers enumerate
    pub const POD_RESOURCE: &str = "pods";
}

/// Provisioned object defaults, see `ProvisionConfig`
pub mod provision {
    pub const NAMESPACE: &str = "test-clientset";
    pub const DEPLOYMENT_NAME: &str = "client-test-deployment";
    pub const SERVICE_NAME: &str = "client-test-service";
    pub const APP_LABEL_KEY: &str = "app";
    pub const APP_LABEL_VALUE: &str = "tomcat";
    pub const REPLICAS: i32 = 2;
    pub const CONTAINER_NAME: &str = "tomcat";
    pub const IMAGE: &str = "tomcat:8.0.18-jre8";
    pub const IMAGE_PULL_POLICY: &str = "IfNotPresent";
    pub const PORT_NAME: &str = "http";
    pub const CONTAINER_PORT: i32 = 8080;
    pub const CONTAINER_PROTOCOL: &str = "TCP";
    pub const SERVICE_TYPE: &str = "NodePort";
    pub const SERVICE_PORT: i32 = 8080;
    pub const NODE_PORT: i32 = 30080;
}

/// Separator printed between group-versions by the discovery program
pub const DISCOVERY_SEPARATOR: &str =
    "************************************************************";
