// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line flags and provisioning policy

use crate::constants::provision as defaults;
use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Kubeconfig location flag shared by every program
#[derive(Args, Debug, Clone, Default)]
pub struct KubeconfigArgs {
    /// (optional) absolute path to the kubeconfig file [default: ~/.kube/config]
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,
}

impl KubeconfigArgs {
    /// The explicit flag value, or the home-directory default.
    /// Empty when neither is available.
    pub fn path(&self) -> PathBuf {
        self.kubeconfig
            .clone()
            .unwrap_or_else(default_kubeconfig_path)
    }
}

/// `~/.kube/config`, or an empty path when there is no home directory
pub fn default_kubeconfig_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".kube").join("config"))
        .unwrap_or_default()
}

/// Rewrite single-dash long flags (`-kubeconfig x`, `-operate=clean`) into
/// the double-dash form clap parses. Single-letter flags and everything
/// after `--` are left untouched.
pub fn normalize_flags<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            let name = s.split('=').next().unwrap_or_default();
            let is_long_single_dash = name.len() > 2
                && name.starts_with('-')
                && !name.starts_with("--")
                && name[1..].chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
            if is_long_single_dash {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}

/// What the provisioner creates. Every field has a default so a policy file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisionConfig {
    pub namespace: String,
    pub deployment_name: String,
    pub service_name: String,
    /// Used for the deployment selector, pod template labels and service selector
    pub labels: BTreeMap<String, String>,
    /// `None` leaves replicas unset so the server default applies
    pub replicas: Option<i32>,
    pub container: ContainerConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerConfig {
    pub name: String,
    pub image: String,
    pub image_pull_policy: String,
    pub port_name: String,
    pub container_port: i32,
    pub protocol: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    #[serde(rename = "type")]
    pub service_type: String,
    pub port_name: String,
    pub port: i32,
    pub node_port: i32,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            namespace: defaults::NAMESPACE.to_string(),
            deployment_name: defaults::DEPLOYMENT_NAME.to_string(),
            service_name: defaults::SERVICE_NAME.to_string(),
            labels: BTreeMap::from([(
                defaults::APP_LABEL_KEY.to_string(),
                defaults::APP_LABEL_VALUE.to_string(),
            )]),
            replicas: Some(defaults::REPLICAS),
            container: ContainerConfig::default(),
            service: ServiceConfig::default(),
        }
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            name: defaults::CONTAINER_NAME.to_string(),
            image: defaults::IMAGE.to_string(),
            image_pull_policy: defaults::IMAGE_PULL_POLICY.to_string(),
            port_name: defaults::PORT_NAME.to_string(),
            container_port: defaults::CONTAINER_PORT,
            protocol: defaults::CONTAINER_PROTOCOL.to_string(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_type: defaults::SERVICE_TYPE.to_string(),
            port_name: defaults::PORT_NAME.to_string(),
            port: defaults::SERVICE_PORT,
            node_port: defaults::NODE_PORT,
        }
    }
}

impl ProvisionConfig {
    /// Load a policy from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read provision config {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("Failed to parse provision config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let config: ProvisionConfig = serde_yaml::from_str(raw)?;
        if config.labels.is_empty() {
            anyhow::bail!("labels must not be empty, the service would select every pod");
        }
        Ok(config)
    }
}
