// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Server name resolution into ordered address candidates.
//!
//! Resolution produces every socket address the system resolver knows for
//! the name, across address families, preserving the resolver's ordering.
//! The candidate sequence is consumed once by connection establishment;
//! an empty result is a resolution failure, never a valid success.

use std::net::SocketAddr;

use tokio::net::lookup_host;
use tracing::debug;

use crate::error::ResolveError;

/// Resolve a server name and port into an ordered list of candidates.
///
/// Covers all address families available for the name. Fails with
/// [`ResolveError`] carrying the resolver's diagnostic when the name
/// cannot be resolved at all or resolves to no addresses.
pub async fn resolve_server(host: &str, port: u16) -> Result<Vec<SocketAddr>, ResolveError> {
    let candidates: Vec<SocketAddr> = match lookup_host((host, port)).await {
        Ok(addrs) => addrs.collect(),
        Err(e) => {
            return Err(ResolveError {
                host: host.to_string(),
                port,
                detail: e.to_string(),
            });
        }
    };

    if candidates.is_empty() {
        return Err(ResolveError {
            host: host.to_string(),
            port,
            detail: "resolved to no socket addresses".to_string(),
        });
    }

    debug!(host, port, count = candidates.len(), "resolved server address");
    Ok(candidates)
}
