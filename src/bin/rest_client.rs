// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::io;
use std::process::ExitCode;

use clientdemo::cli::{self, ClientCli};
use clientdemo::error::Result;
use clientdemo::kubernetes::connect;
use clientdemo::listing::{PodTable, RestPodLister};
use clientdemo::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    let args: ClientCli = cli::parse();
    cli::finish(run(args).await)
}

async fn run(args: ClientCli) -> Result<()> {
    let client = connect(&args.kube.path()).await?;

    let mut out = io::stdout().lock();
    RestPodLister::with_defaults(client)
        .write_table(PodTable::REST, &mut out)
        .await
}
