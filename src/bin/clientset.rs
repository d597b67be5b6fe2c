// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::io::{self, Write};
use std::process::ExitCode;

use clientdemo::cli::{self, ProvisionCli};
use clientdemo::config::ProvisionConfig;
use clientdemo::error::Result;
use clientdemo::kubernetes::connect;
use clientdemo::provision::{Operation, Provisioner};
use clientdemo::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    let args: ProvisionCli = cli::parse();
    cli::finish(run(args).await)
}

async fn run(args: ProvisionCli) -> Result<()> {
    let config = match &args.config {
        Some(path) => ProvisionConfig::from_file(path)?,
        None => ProvisionConfig::default(),
    };
    info!(
        "Provisioning namespace={} deployment={} service={}",
        config.namespace, config.deployment_name, config.service_name
    );

    let client = connect(&args.kube.path()).await?;

    let mut out = io::stdout().lock();
    writeln!(out, "operate is {}", args.operate)?;

    let operation = Operation::from_flag(&args.operate);
    Provisioner::new(client, config)
        .run(operation, &mut out)
        .await?;
    out.flush()?;
    Ok(())
}
