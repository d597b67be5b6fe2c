// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from a kubeconfig file

use crate::error::{DemoError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Build a client from the kubeconfig at `path`
pub async fn connect(path: &Path) -> Result<Client> {
    let client_config = load_config(path).await?;

    info!("Connecting to {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Read connection settings from the kubeconfig at `path`.
/// An empty path falls back to in-cluster or environment configuration.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_config(path: &Path) -> Result<KConfig> {
    if path.as_os_str().is_empty() {
        warn!("No kubeconfig path given, inferring configuration");
        return KConfig::infer()
            .await
            .map_err(|e| DemoError::KubeconfigError(format!("Failed to infer config: {}", e)));
    }

    let raw = fs::read_to_string(path).map_err(|e| {
        DemoError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    config_from_kubeconfig(&raw).await
}

/// Turn kubeconfig YAML into a client configuration using its current context
async fn config_from_kubeconfig(kubeconfig: &str) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    debug!(
        "Using context {:?}",
        kubeconfig_parsed.current_context.as_deref().unwrap_or_default()
    );

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
        .await
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to create config: {}", e)))
}
