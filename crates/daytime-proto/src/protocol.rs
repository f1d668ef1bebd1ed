// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Protocol types and constants for the daytime record layer.
//!
//! A connection carries a sequence of records. Each record is tagged with
//! a stream number so that semantically distinct payloads (local time vs.
//! GMT time) travel on separate streams of the same connection without an
//! explicit tag byte in the payload itself — the stream number IS the tag.

use core::fmt;
use std::net::SocketAddr;

use byteorder::{ByteOrder, NetworkEndian};

use crate::error::ParseError;

/// The well-known daytime port (RFC 867).
pub const PORT: u16 = 13;

/// Maximum record payload size in bytes.
///
/// A received record longer than this bound is truncated on receipt; an
/// outgoing payload longer than this bound is rejected at encode time.
pub const MAX_PAYLOAD: usize = 127;

/// Line-end marker terminating daytime text payloads.
pub const LINE_END: &str = "\r\n";

/// Types that have a constant size when written to or read from bytes.
pub trait ConstPackedSizeBytes {
    /// The constant size in bytes when this type is packed for network
    /// transmission.
    const PACKED_SIZE_BYTES: usize;
}

/// Parse a type from a byte slice, returning the parsed value and the
/// number of bytes consumed.
pub trait FromBytes: Sized {
    /// Parse from the given byte slice. Returns the parsed value and the
    /// number of bytes consumed from the front of `buf`.
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError>;
}

/// Serialize a type into a byte slice, returning the number of bytes
/// written.
pub trait ToBytes {
    /// Write this value into the given byte slice. Returns the number of
    /// bytes written. Fails with [`ParseError::BufferTooShort`] if `buf`
    /// is too short.
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError>;
}

/// The stream a record was sent on.
///
/// Two stream numbers are reserved by the protocol: `0` carries local
/// time and `1` carries GMT time. Any other number is preserved in the
/// `Unknown` variant so receivers can report and discard it without
/// treating it as an error.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum StreamId {
    /// Local time of day (stream 0).
    Local,
    /// GMT time of day (stream 1).
    Gmt,
    /// A stream number not assigned by the protocol.
    Unknown(u16),
}

impl StreamId {
    /// The wire-level stream number.
    pub fn number(self) -> u16 {
        match self {
            StreamId::Local => 0,
            StreamId::Gmt => 1,
            StreamId::Unknown(n) => n,
        }
    }
}

impl From<u16> for StreamId {
    fn from(value: u16) -> Self {
        match value {
            0 => StreamId::Local,
            1 => StreamId::Gmt,
            n => StreamId::Unknown(n),
        }
    }
}

impl From<StreamId> for u16 {
    fn from(id: StreamId) -> u16 {
        id.number()
    }
}

/// **Record Header** - Prefixes every record on the wire. It carries the
/// stream number the record was sent on and the length of the payload
/// that follows.
///
/// ### Layout
///
/// ```ignore
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |         Stream Number         |         Payload Length        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RecordHeader {
    /// Stream number the record was sent on (16-bit unsigned).
    pub stream: u16,
    /// Payload length in bytes (16-bit unsigned).
    pub length: u16,
}

impl ConstPackedSizeBytes for RecordHeader {
    const PACKED_SIZE_BYTES: usize = 4;
}

impl FromBytes for RecordHeader {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        if buf.len() < Self::PACKED_SIZE_BYTES {
            return Err(ParseError::BufferTooShort {
                needed: Self::PACKED_SIZE_BYTES,
                available: buf.len(),
            });
        }
        let header = RecordHeader {
            stream: NetworkEndian::read_u16(&buf[0..2]),
            length: NetworkEndian::read_u16(&buf[2..4]),
        };
        Ok((header, Self::PACKED_SIZE_BYTES))
    }
}

impl ToBytes for RecordHeader {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        if buf.len() < Self::PACKED_SIZE_BYTES {
            return Err(ParseError::BufferTooShort {
                needed: Self::PACKED_SIZE_BYTES,
                available: buf.len(),
            });
        }
        NetworkEndian::write_u16(&mut buf[0..2], self.stream);
        NetworkEndian::write_u16(&mut buf[2..4], self.length);
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

/// Frame a text payload for transmission on the given stream.
///
/// Returns the complete wire record (header plus payload). Fails with
/// [`ParseError::PayloadTooLong`] if `text` exceeds [`MAX_PAYLOAD`].
pub fn encode_record(stream: StreamId, text: &str) -> Result<Vec<u8>, ParseError> {
    let payload = text.as_bytes();
    if payload.len() > MAX_PAYLOAD {
        return Err(ParseError::PayloadTooLong {
            length: payload.len(),
        });
    }
    let header = RecordHeader {
        stream: stream.number(),
        length: payload.len() as u16,
    };
    let mut frame = vec![0u8; RecordHeader::PACKED_SIZE_BYTES + payload.len()];
    header.to_bytes(&mut frame[..])?;
    frame[RecordHeader::PACKED_SIZE_BYTES..].copy_from_slice(payload);
    Ok(frame)
}

/// The numeric host and port strings of a connection's remote end.
///
/// Used for display and logging only, never for protocol logic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeerIdentity {
    /// Numeric host string (e.g. `127.0.0.1` or `::1`).
    pub host: String,
    /// Numeric port string.
    pub port: String,
}

impl From<SocketAddr> for PeerIdentity {
    fn from(addr: SocketAddr) -> Self {
        PeerIdentity {
            host: addr.ip().to_string(),
            port: addr.port().to_string(),
        }
    }
}

impl fmt::Display for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_id_mapping() {
        assert_eq!(StreamId::from(0), StreamId::Local);
        assert_eq!(StreamId::from(1), StreamId::Gmt);
        assert_eq!(StreamId::from(7), StreamId::Unknown(7));
        assert_eq!(StreamId::Local.number(), 0);
        assert_eq!(StreamId::Gmt.number(), 1);
        assert_eq!(StreamId::Unknown(41).number(), 41);
    }

    #[test]
    fn test_stream_id_u16_roundtrip() {
        for n in [0u16, 1, 2, 7, u16::MAX] {
            assert_eq!(u16::from(StreamId::from(n)), n);
        }
    }

    #[test]
    fn test_header_roundtrip() {
        let header = RecordHeader {
            stream: 1,
            length: 21,
        };
        let mut buf = [0u8; RecordHeader::PACKED_SIZE_BYTES];
        let written = header.to_bytes(&mut buf[..]).unwrap();
        assert_eq!(written, 4);

        let (parsed, consumed) = RecordHeader::from_bytes(&buf).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_header_network_byte_order() {
        let header = RecordHeader {
            stream: 0x0102,
            length: 0x0304,
        };
        let mut buf = [0u8; 4];
        header.to_bytes(&mut buf[..]).unwrap();
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_header_buffer_too_short() {
        let result = RecordHeader::from_bytes(&[0u8; 3]);
        assert_eq!(
            result,
            Err(ParseError::BufferTooShort {
                needed: 4,
                available: 3,
            })
        );

        let header = RecordHeader::default();
        let mut buf = [0u8; 2];
        assert!(header.to_bytes(&mut buf[..]).is_err());
    }

    #[test]
    fn test_encode_record() {
        let frame = encode_record(StreamId::Gmt, "2026-08-05 12:00:00\r\n").unwrap();
        assert_eq!(&frame[0..2], &[0, 1]);
        assert_eq!(&frame[2..4], &[0, 21]);
        assert_eq!(&frame[4..], b"2026-08-05 12:00:00\r\n");
    }

    #[test]
    fn test_encode_record_empty_payload() {
        let frame = encode_record(StreamId::Local, "").unwrap();
        assert_eq!(frame, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_record_at_bound() {
        let text = "x".repeat(MAX_PAYLOAD);
        let frame = encode_record(StreamId::Local, &text).unwrap();
        assert_eq!(frame.len(), RecordHeader::PACKED_SIZE_BYTES + MAX_PAYLOAD);
    }

    #[test]
    fn test_encode_record_over_bound() {
        let text = "x".repeat(MAX_PAYLOAD + 1);
        assert_eq!(
            encode_record(StreamId::Local, &text),
            Err(ParseError::PayloadTooLong { length: 128 })
        );
    }

    #[test]
    fn test_peer_identity_v4() {
        let peer = PeerIdentity::from("127.0.0.1:9999".parse::<SocketAddr>().unwrap());
        assert_eq!(peer.host, "127.0.0.1");
        assert_eq!(peer.port, "9999");
        assert_eq!(peer.to_string(), "127.0.0.1:9999");
    }

    #[test]
    fn test_peer_identity_v6() {
        let peer = PeerIdentity::from("[::1]:13".parse::<SocketAddr>().unwrap());
        assert_eq!(peer.host, "::1");
        assert_eq!(peer.to_string(), "::1:13");
    }
}
