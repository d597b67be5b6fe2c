// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Argument structs and the top-level error handler shared by the binaries

use crate::config::{normalize_flags, KubeconfigArgs};
use crate::error::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Flags of the lister and discovery programs
#[derive(Debug, Parser)]
#[command(version)]
pub struct ClientCli {
    #[command(flatten)]
    pub kube: KubeconfigArgs,
}

/// Flags of the provisioner
#[derive(Debug, Parser)]
#[command(version, about = "Create or clean a namespace, deployment and service")]
pub struct ProvisionCli {
    #[command(flatten)]
    pub kube: KubeconfigArgs,

    /// operate type: create or clean
    #[arg(long, default_value = "create")]
    pub operate: String,

    /// YAML file overriding the provisioned object definitions
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Parse process arguments, accepting `-flag` as well as `--flag`
pub fn parse<T: Parser>() -> T {
    parse_from(std::env::args_os())
}

pub fn parse_from<T, I, S>(args: I) -> T
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    T::parse_from(normalize_flags(args))
}

/// Map the outcome of a program run to its exit status, printing the error
pub fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(setup = e.is_setup(), "{:?}", e);
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
