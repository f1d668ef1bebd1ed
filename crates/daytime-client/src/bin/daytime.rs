// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Daytime client binary.
//!
//! Connects to the given server, prints each received time record to
//! stdout, and exits once the server closes the connection. Fatal errors
//! (resolution failure, connect exhaustion) are reported on stderr with a
//! failure exit status.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use daytime_client::session::DaytimeClient;

/// Fetch the time of day from a daytime server.
#[derive(Parser)]
#[command(name = "daytime")]
struct Args {
    /// Server host name or address.
    host: String,
    /// Server port.
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let client = DaytimeClient::builder()
        .host(&args.host)
        .port(args.port)
        .program_name("daytime")
        .build();
    let program = client.program().to_string();

    if let Err(e) = client.run().await {
        eprintln!("{program}: {e}");
        std::process::exit(1);
    }
}
