// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Daytime server binary.
//!
//! Binds the given port and serves daytime records to each connecting
//! peer until the process is terminated. A bind failure is reported on
//! stderr with a failure exit status.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use daytime_server::session::DaytimeServer;

/// Serve the time of day to connecting peers.
#[derive(Parser)]
#[command(name = "daytimed")]
struct Args {
    /// Port to listen on.
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let server = match DaytimeServer::builder()
        .port(args.port)
        .program_name("daytimed")
        .build()
    {
        Ok(server) => server,
        Err(e) => {
            eprintln!("daytimed: {e}");
            std::process::exit(1);
        }
    };

    match server.local_addr() {
        Ok(addr) => info!(%addr, "daytime server listening"),
        Err(_) => info!(port = args.port, "daytime server listening"),
    }

    server.run().await;
}
