// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::io::{self, Write};
use std::process::ExitCode;

use clientdemo::cli::{self, ClientCli};
use clientdemo::error::Result;
use clientdemo::kubernetes::connect;
use clientdemo::listing::{DynamicPodLister, PodTable};
use clientdemo::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    let args: ClientCli = cli::parse();
    cli::finish(run(args).await)
}

async fn run(args: ClientCli) -> Result<()> {
    let client = connect(&args.kube.path()).await?;

    let rows = DynamicPodLister::with_defaults(client).list().await?;

    let mut out = io::stdout().lock();
    PodTable::DYNAMIC.write_header(&mut out)?;
    PodTable::DYNAMIC.write_rows(&mut out, &rows)?;
    out.flush()?;
    Ok(())
}
