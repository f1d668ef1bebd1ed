// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Custom error types for record framing and parsing.
//!
//! [`ParseError`] covers both directions of the record layer: decoding a
//! record header from received bytes and encoding an outgoing record. It
//! implements [`std::error::Error`] and converts to [`std::io::Error`] so
//! I/O-level callers can propagate it with `?`.

use core::fmt;

/// Errors that can occur while encoding or decoding daytime records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The buffer is too short for the expected data.
    BufferTooShort {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },
    /// An outgoing payload exceeds the fixed payload bound.
    PayloadTooLong {
        /// Length of the rejected payload in bytes.
        length: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BufferTooShort { needed, available } => {
                write!(
                    f,
                    "buffer too short: needed {} bytes, got {}",
                    needed, available
                )
            }
            ParseError::PayloadTooLong { length } => {
                write!(
                    f,
                    "payload of {} bytes exceeds the {} byte record bound",
                    length,
                    crate::protocol::MAX_PAYLOAD
                )
            }
        }
    }
}

impl From<ParseError> for std::io::Error {
    fn from(err: ParseError) -> std::io::Error {
        let kind = match &err {
            ParseError::BufferTooShort { .. } => std::io::ErrorKind::UnexpectedEof,
            ParseError::PayloadTooLong { .. } => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_buffer_too_short() {
        let err = ParseError::BufferTooShort {
            needed: 4,
            available: 1,
        };
        assert_eq!(err.to_string(), "buffer too short: needed 4 bytes, got 1");
    }

    #[test]
    fn test_display_payload_too_long() {
        let err = ParseError::PayloadTooLong { length: 300 };
        assert_eq!(
            err.to_string(),
            "payload of 300 bytes exceeds the 127 byte record bound"
        );
    }

    #[test]
    fn test_into_io_error() {
        let err = ParseError::BufferTooShort {
            needed: 4,
            available: 0,
        };
        let io_err: std::io::Error = err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::UnexpectedEof);

        let err = ParseError::PayloadTooLong { length: 128 };
        let io_err: std::io::Error = err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ParseError::PayloadTooLong { length: 128 });
        assert!(err.to_string().contains("record bound"));
    }
}
