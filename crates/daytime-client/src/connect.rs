// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Multi-homed connection establishment.
//!
//! Consumes the candidate sequence from resolution in order and returns
//! the first connection that establishes. A failure on one candidate is
//! never fatal to the loop; only exhausting the whole sequence is.

use std::net::SocketAddr;

use tokio::net::TcpStream;
use tracing::debug;

use crate::error::ConnectError;

/// Attempt each candidate in order, returning the first live connection.
///
/// Per-candidate socket or connect failures are logged and skipped. When
/// the sequence is exhausted without a connection, fails with
/// [`ConnectError`] — fatal for the client, since no further action is
/// possible.
pub async fn connect_any(
    candidates: &[SocketAddr],
    host: &str,
    port: u16,
) -> Result<TcpStream, ConnectError> {
    for addr in candidates {
        match TcpStream::connect(addr).await {
            Ok(stream) => {
                debug!(%addr, "connected");
                return Ok(stream);
            }
            Err(e) => {
                debug!(%addr, error = %e, "connect attempt failed, trying next candidate");
            }
        }
    }
    Err(ConnectError {
        host: host.to_string(),
        port,
    })
}
