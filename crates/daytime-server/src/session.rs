// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! The per-connection server session and the outer serve loop.
//!
//! Each accepted connection receives exactly two records — the current
//! local time on stream 0, then the current GMT time on stream 1 — and is
//! closed. Send failures are logged and never abort the session; a
//! failed time conversion sends an empty payload. Connections are served
//! strictly one at a time.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> std::io::Result<()> {
//! use daytime_server::session::DaytimeServer;
//!
//! let server = DaytimeServer::builder()
//!     .port(13)
//!     .build()?;
//!
//! println!("listening on {}", server.local_addr()?);
//! server.run().await;
//! # Ok(())
//! # }
//! ```

use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use daytime_proto::protocol::{StreamId, encode_record};
use daytime_proto::timetext;

use crate::error::DaytimeServerError;
use crate::listener::{DEFAULT_BACKLOG, DaytimeListener};

/// Builder for configuring and creating a [`DaytimeServer`].
pub struct DaytimeServerBuilder {
    port: u16,
    backlog: u32,
    program: String,
}

impl DaytimeServerBuilder {
    fn new() -> Self {
        DaytimeServerBuilder {
            port: daytime_proto::protocol::PORT,
            backlog: DEFAULT_BACKLOG,
            program: "daytimed".to_string(),
        }
    }

    /// Set the port to listen on (default: the well-known daytime
    /// port, 13).
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the pending-connection backlog (default: 42).
    pub fn backlog(mut self, backlog: u32) -> Self {
        self.backlog = backlog;
        self
    }

    /// Set the program name used in diagnostics (default: `daytimed`).
    pub fn program_name(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Build the server. Binds and begins listening on the configured
    /// port.
    pub fn build(self) -> Result<DaytimeServer, DaytimeServerError> {
        let listener = DaytimeListener::bind(self.port, self.backlog)?;
        Ok(DaytimeServer {
            listener,
            program: self.program,
        })
    }
}

/// A daytime server that serves one peer connection at a time.
///
/// Created via [`DaytimeServer::builder()`]. Call [`run()`](Self::run) to
/// serve forever.
#[derive(Debug)]
pub struct DaytimeServer {
    listener: DaytimeListener,
    program: String,
}

impl DaytimeServer {
    /// Create a builder for configuring the server.
    pub fn builder() -> DaytimeServerBuilder {
        DaytimeServerBuilder::new()
    }

    /// The program name used in diagnostics.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The local address the server is listening on.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve connections until the process is terminated.
    ///
    /// Each iteration accepts one peer, sends the two time records, and
    /// closes the connection; a failed accept produces nothing and the
    /// loop simply retries. The listening endpoint itself is never
    /// closed.
    pub async fn run(self) {
        loop {
            self.serve_one().await;
        }
    }

    /// Serve a single accepted connection, if any.
    pub async fn serve_one(&self) {
        let Some((mut stream, peer)) = self.listener.accept().await else {
            return;
        };

        let text = daytime_or_empty(StreamId::Local);
        if let Err(e) = send_record(&mut stream, StreamId::Local, &text).await {
            error!(peer = %peer, error = %e, "send failed (local time stream)");
        }

        let text = daytime_or_empty(StreamId::Gmt);
        if let Err(e) = send_record(&mut stream, StreamId::Gmt, &text).await {
            error!(peer = %peer, error = %e, "send failed (gmt time stream)");
        }

        if let Err(e) = stream.shutdown().await {
            debug!(peer = %peer, error = %e, "close failed");
        }
    }
}

/// The time text for a stream, or an empty payload when the conversion
/// fails.
fn daytime_or_empty(stream: StreamId) -> String {
    let text = match stream {
        StreamId::Gmt => timetext::gmt_daytime(),
        _ => timetext::local_daytime(),
    };
    match text {
        Some(text) => text,
        None => {
            error!("localtime or gmtime conversion failed");
            String::new()
        }
    }
}

/// Frame `text` on `stream` and write the whole record.
///
/// The record is either delivered in full or the call fails; a failure is
/// non-fatal to the session, which logs it and proceeds.
pub async fn send_record<W>(writer: &mut W, stream: StreamId, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let frame = encode_record(stream, text).map_err(io::Error::from)?;
    writer.write_all(&frame).await?;
    writer.flush().await?;
    Ok(())
}
