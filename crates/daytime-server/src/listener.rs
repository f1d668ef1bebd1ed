// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Listener establishment and accept.
//!
//! The listener is bound by iterating the passive wildcard candidates for
//! a port — one per address family, IPv6 first — and keeping the first
//! candidate that binds. Accept failures never terminate the listener;
//! they yield nothing and the caller retries.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tracing::{debug, error};

use daytime_proto::protocol::PeerIdentity;

use crate::error::{BindError, DaytimeServerError};

/// Pending-connection backlog used when none is configured.
pub const DEFAULT_BACKLOG: u32 = 42;

/// The passive wildcard bind candidates for a port, in bind order.
pub(crate) fn bind_candidates(port: u16) -> Vec<SocketAddr> {
    vec![
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, port)),
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
    ]
}

/// A listening daytime endpoint.
///
/// Stays open for the life of the server; only the per-connection
/// streams returned by [`accept`](Self::accept) are ever closed.
#[derive(Debug)]
pub struct DaytimeListener {
    listener: TcpListener,
}

impl DaytimeListener {
    /// Bind the first workable wildcard candidate for `port` and begin
    /// listening with the given backlog.
    ///
    /// Per-candidate socket-creation and bind failures are logged and the
    /// next candidate is tried. If no candidate binds, fails with
    /// [`BindError`] — fatal to the caller, since no listening endpoint
    /// exists.
    pub fn bind(port: u16, backlog: u32) -> Result<Self, DaytimeServerError> {
        for addr in bind_candidates(port) {
            let socket = match addr {
                SocketAddr::V6(_) => TcpSocket::new_v6(),
                SocketAddr::V4(_) => TcpSocket::new_v4(),
            };
            let socket = match socket {
                Ok(socket) => socket,
                Err(e) => {
                    debug!(%addr, error = %e, "socket creation failed, trying next candidate");
                    continue;
                }
            };

            // Address reuse keeps restarts from tripping over TIME_WAIT.
            if let Err(e) = socket.set_reuseaddr(true) {
                debug!(%addr, error = %e, "set_reuseaddr failed");
            }

            if let Err(e) = socket.bind(addr) {
                debug!(%addr, error = %e, "bind attempt failed, trying next candidate");
                continue;
            }

            let listener = socket.listen(backlog).map_err(DaytimeServerError::Io)?;
            debug!(%addr, backlog, "listening");
            return Ok(DaytimeListener { listener });
        }

        Err(DaytimeServerError::Bind(BindError { port }))
    }

    /// The local address the listener is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Block until a peer connects.
    ///
    /// Returns the connection and the peer's identity. A transport-level
    /// accept failure is logged and yields `None`; the caller retries by
    /// calling `accept()` again.
    pub async fn accept(&self) -> Option<(TcpStream, PeerIdentity)> {
        match self.listener.accept().await {
            Ok((stream, addr)) => {
                let peer = PeerIdentity::from(addr);
                debug!("connection from {peer}");
                Some((stream, peer))
            }
            Err(e) => {
                error!(error = %e, "accept failed");
                None
            }
        }
    }
}
