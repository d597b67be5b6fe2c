// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid configuration: {0:#}")]
    ConfigError(#[from] anyhow::Error),

    #[error("Failed to build request: {0}")]
    RequestError(String),

    #[error("Failed to convert object: {0}")]
    ConversionError(String),

    #[error("unexpected GroupVersion string: {0}")]
    InvalidGroupVersion(String),

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

impl DemoError {
    /// Setup errors happen before the first cluster call is issued
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            DemoError::KubeconfigError(_) | DemoError::ConfigError(_)
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_setup() {
            2
        } else {
            1
        }
    }
}

impl From<kube::core::request::Error> for DemoError {
    fn from(e: kube::core::request::Error) -> Self {
        DemoError::RequestError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
