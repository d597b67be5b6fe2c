// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{DemoError, Result};
use std::fmt;
use std::str::FromStr;

/// An API group and version, e.g. `apps/v1`. The core group is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupVersion {
    pub group: String,
    pub version: String,
}

impl GroupVersion {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }

    pub fn is_core(&self) -> bool {
        self.group.is_empty()
    }

    /// Root of the URL tree the group is served under
    pub fn api_prefix(&self) -> &'static str {
        if self.is_core() {
            "api"
        } else {
            "apis"
        }
    }
}

impl FromStr for GroupVersion {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        match s.split_once('/') {
            None => Ok(Self::new("", s)),
            Some((group, version)) if !version.contains('/') => Ok(Self::new(group, version)),
            Some(_) => Err(DemoError::InvalidGroupVersion(s.to_string())),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_core() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}
