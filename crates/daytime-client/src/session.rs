// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! The daytime client session.
//!
//! Drives the full connection lifecycle: resolve the server name, connect
//! to the first live candidate, enable stream-tagged receive, then read
//! records until the peer closes, printing each according to its stream.
//! The connection is released unconditionally, on error paths included.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> std::io::Result<()> {
//! use daytime_client::session::DaytimeClient;
//!
//! let client = DaytimeClient::builder()
//!     .host("time.example.net")
//!     .port(13)
//!     .build();
//!
//! client.run().await
//! # }
//! ```

use std::io;

use tracing::warn;

use daytime_proto::protocol::{PeerIdentity, StreamId};

use crate::connect::connect_any;
use crate::connection::{DaytimeConnection, Received};
use crate::error::DaytimeError;
use crate::resolve::resolve_server;

/// Builder for configuring and creating a [`DaytimeClient`].
pub struct DaytimeClientBuilder {
    host: String,
    port: u16,
    program: String,
}

impl DaytimeClientBuilder {
    fn new() -> Self {
        DaytimeClientBuilder {
            host: "localhost".to_string(),
            port: daytime_proto::protocol::PORT,
            program: "daytime".to_string(),
        }
    }

    /// Set the server host name or address literal.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port (default: the well-known daytime port, 13).
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the program name used in diagnostics (default: `daytime`).
    pub fn program_name(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> DaytimeClient {
        DaytimeClient {
            host: self.host,
            port: self.port,
            program: self.program,
        }
    }
}

/// A daytime client that receives and prints time-of-day records.
///
/// Created via [`DaytimeClient::builder()`]. Call [`run()`](Self::run) to
/// perform one complete exchange.
pub struct DaytimeClient {
    host: String,
    port: u16,
    program: String,
}

impl DaytimeClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> DaytimeClientBuilder {
        DaytimeClientBuilder::new()
    }

    /// The program name used in diagnostics.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run one complete daytime exchange.
    ///
    /// Resolution and connect failures are fatal and surface as errors.
    /// A stream-events configuration failure is logged and the session
    /// proceeds in degraded mode. The loop ends when the peer closes the
    /// connection or a receive error occurs; either way the connection is
    /// closed before returning.
    pub async fn run(self) -> io::Result<()> {
        let candidates = resolve_server(&self.host, self.port)
            .await
            .map_err(DaytimeError::from)?;

        let stream = connect_any(&candidates, &self.host, self.port)
            .await
            .map_err(DaytimeError::from)?;

        let mut conn = DaytimeConnection::new(stream)?;
        if let Err(e) = conn.enable_stream_events() {
            warn!(error = %e, "failed to enable stream events, stream ids may default to 0");
        }

        let outcome = Self::receive_loop(&mut conn).await;
        if let Err(e) = conn.close().await {
            // Teardown failure after the exchange is not worth surfacing.
            warn!(error = %e, "close failed");
        }
        outcome
    }

    /// Receive records until the peer closes or an I/O error occurs.
    async fn receive_loop(conn: &mut DaytimeConnection) -> io::Result<()> {
        loop {
            match conn.recv().await? {
                Received::Closed => return Ok(()),
                Received::Record { stream, text, .. } => {
                    if let Some(line) = render_record(conn.peer(), stream, &text) {
                        println!("{line}");
                    }
                }
            }
        }
    }
}

/// Format one received record for display.
///
/// Returns `None` for records on unassigned streams; these are logged and
/// discarded rather than printed.
fn render_record(peer: &PeerIdentity, stream: StreamId, text: &str) -> Option<String> {
    match stream {
        StreamId::Local => Some(format!("{peer}\t {text} (local time)")),
        StreamId::Gmt => Some(format!("{peer}\t {text} (gmt time)")),
        StreamId::Unknown(n) => {
            warn!("ignoring message from unknown stream {n}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn peer() -> PeerIdentity {
        PeerIdentity::from("127.0.0.1:9999".parse::<SocketAddr>().unwrap())
    }

    #[test]
    fn test_render_local_record() {
        let line = render_record(&peer(), StreamId::Local, "2026-08-05 12:00:00").unwrap();
        assert_eq!(line, "127.0.0.1:9999\t 2026-08-05 12:00:00 (local time)");
    }

    #[test]
    fn test_render_gmt_record() {
        let line = render_record(&peer(), StreamId::Gmt, "2026-08-05 16:00:00").unwrap();
        assert_eq!(line, "127.0.0.1:9999\t 2026-08-05 16:00:00 (gmt time)");
    }

    #[test]
    fn test_unknown_stream_renders_nothing() {
        assert_eq!(render_record(&peer(), StreamId::Unknown(7), "x"), None);
    }

    #[test]
    fn test_builder_defaults() {
        let client = DaytimeClient::builder().build();
        assert_eq!(client.host, "localhost");
        assert_eq!(client.port, daytime_proto::protocol::PORT);
        assert_eq!(client.program(), "daytime");
    }

    #[test]
    fn test_builder_chaining() {
        let client = DaytimeClient::builder()
            .host("time.example.net")
            .port(9999)
            .program_name("daytime-test")
            .build();
        assert_eq!(client.host, "time.example.net");
        assert_eq!(client.port, 9999);
        assert_eq!(client.program(), "daytime-test");
    }
}
