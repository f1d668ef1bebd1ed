// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! The client side of a daytime connection.
//!
//! Wraps an established transport connection and exposes stream-tagged
//! receive. Stream tagging must be enabled once after connecting; without
//! it the connection operates in degraded mode and every record reports
//! stream 0, matching the transport's fallback behavior.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use daytime_proto::protocol::{
    ConstPackedSizeBytes, FromBytes, MAX_PAYLOAD, PeerIdentity, RecordHeader, StreamId,
};
use daytime_proto::timetext::strip_line_end;

/// One receive operation's outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Received {
    /// A framed record arrived.
    Record {
        /// The stream the record was tagged with.
        stream: StreamId,
        /// Payload text with the trailing line-end marker stripped.
        text: String,
        /// Number of payload bytes read (after truncation to the bound).
        len: usize,
    },
    /// The peer ended the connection.
    Closed,
}

/// An established client connection to a daytime server.
///
/// Owned exclusively by the session that created it; [`close`](Self::close)
/// consumes the connection, so no receive can follow teardown.
#[derive(Debug)]
pub struct DaytimeConnection {
    stream: TcpStream,
    peer: PeerIdentity,
    events_enabled: bool,
}

impl DaytimeConnection {
    /// Wrap an established transport connection.
    pub fn new(stream: TcpStream) -> io::Result<Self> {
        let peer = PeerIdentity::from(stream.peer_addr()?);
        Ok(DaytimeConnection {
            stream,
            peer,
            events_enabled: false,
        })
    }

    /// The remote end's numeric host and port, for display and logging.
    pub fn peer(&self) -> &PeerIdentity {
        &self.peer
    }

    /// Enable stream-tagged receive on this connection.
    ///
    /// Must be called once before the receive loop. On failure the
    /// connection stays usable in degraded mode: received records report
    /// stream 0.
    pub fn enable_stream_events(&mut self) -> io::Result<()> {
        self.stream.set_nodelay(true)?;
        self.events_enabled = true;
        Ok(())
    }

    /// Whether stream-tagged receive is enabled.
    pub fn stream_events_enabled(&self) -> bool {
        self.events_enabled
    }

    /// Block until one framed record arrives on any stream.
    ///
    /// Returns [`Received::Closed`] when the peer has ended the
    /// connection. A record longer than [`MAX_PAYLOAD`] is truncated to
    /// the bound; the excess is never surfaced and is not reassembled
    /// across calls.
    pub async fn recv(&mut self) -> io::Result<Received> {
        read_record(&mut self.stream, self.events_enabled).await
    }

    /// Release the connection.
    pub async fn close(mut self) -> io::Result<()> {
        debug!(peer = %self.peer, "closing connection");
        self.stream.shutdown().await
    }
}

/// Read one framed record from the reader.
///
/// Split out from [`DaytimeConnection`] so the framing logic can be
/// exercised against in-memory pipes.
pub(crate) async fn read_record<R>(reader: &mut R, events_enabled: bool) -> io::Result<Received>
where
    R: AsyncRead + Unpin,
{
    let mut header_buf = [0u8; RecordHeader::PACKED_SIZE_BYTES];
    // EOF while waiting for a header is the peer's close.
    match reader.read_exact(&mut header_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(Received::Closed),
        Err(e) => return Err(e),
    }

    let (header, _) = RecordHeader::from_bytes(&header_buf).map_err(io::Error::from)?;
    let declared = header.length as usize;
    let len = declared.min(MAX_PAYLOAD);

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;

    // Drain bytes beyond the bound so the next record stays aligned.
    let mut excess = declared - len;
    let mut sink = [0u8; 64];
    while excess > 0 {
        let chunk = excess.min(sink.len());
        let n = reader.read(&mut sink[..chunk]).await?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed inside a record payload",
            ));
        }
        excess -= n;
    }

    let text = String::from_utf8_lossy(&payload);
    let text = strip_line_end(&text).to_string();
    let stream = if events_enabled {
        StreamId::from(header.stream)
    } else {
        StreamId::from(0)
    };

    Ok(Received::Record { stream, text, len })
}
