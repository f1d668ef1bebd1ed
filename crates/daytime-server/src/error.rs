// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Custom error types for the daytime server.
//!
//! Public APIs return `io::Result<T>` or `Result<T, DaytimeServerError>`.
//! [`DaytimeServerError`] converts to `io::Error` via `From`, and users
//! who want programmatic matching can downcast via
//! `io::Error::get_ref()`:
//!
//! ```no_run
//! use daytime_server::error::DaytimeServerError;
//!
//! # fn example(result: std::io::Result<()>) {
//! if let Err(e) = result {
//!     if let Some(err) = e.get_ref().and_then(|inner| inner.downcast_ref::<DaytimeServerError>()) {
//!         match err {
//!             DaytimeServerError::Bind(b) => eprintln!("bind error: {b}"),
//!             _ => eprintln!("server error: {err}"),
//!         }
//!     }
//! }
//! # }
//! ```

use std::fmt;
use std::io;

/// Errors that can occur during daytime server operations.
#[derive(Debug)]
pub enum DaytimeServerError {
    /// No passive candidate could be bound.
    Bind(BindError),
    /// Underlying I/O error (listen, send, shutdown, etc.).
    Io(io::Error),
}

/// Every wildcard bind candidate for the port failed.
///
/// Fatal to the caller: without a bound candidate no listening endpoint
/// exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BindError {
    /// The port that could not be bound.
    pub port: u16,
}

// ── Display implementations ─────────────────────────────────────────

impl fmt::Display for DaytimeServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaytimeServerError::Bind(e) => write!(f, "{e}"),
            DaytimeServerError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bind failed for port {}", self.port)
    }
}

// ── Error trait implementations ─────────────────────────────────────

impl std::error::Error for DaytimeServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DaytimeServerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for BindError {}

// ── From conversions ────────────────────────────────────────────────

impl From<DaytimeServerError> for io::Error {
    fn from(err: DaytimeServerError) -> io::Error {
        let kind = match &err {
            DaytimeServerError::Bind(_) => io::ErrorKind::AddrInUse,
            DaytimeServerError::Io(e) => e.kind(),
        };
        // Preserve the original io::Error directly for the Io variant.
        if let DaytimeServerError::Io(e) = err {
            return e;
        }
        io::Error::new(kind, err)
    }
}

impl From<io::Error> for DaytimeServerError {
    fn from(err: io::Error) -> DaytimeServerError {
        DaytimeServerError::Io(err)
    }
}

impl From<BindError> for DaytimeServerError {
    fn from(err: BindError) -> DaytimeServerError {
        DaytimeServerError::Bind(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let e = BindError { port: 9999 };
        assert_eq!(e.to_string(), "bind failed for port 9999");
    }

    #[test]
    fn test_bind_error_to_io_error_kind() {
        let io_err: io::Error = DaytimeServerError::Bind(BindError { port: 13 }).into();
        assert_eq!(io_err.kind(), io::ErrorKind::AddrInUse);
    }

    #[test]
    fn test_error_downcast_roundtrip() {
        let err = DaytimeServerError::Bind(BindError { port: 13 });
        let io_err: io::Error = err.into();

        let inner = io_err
            .get_ref()
            .unwrap()
            .downcast_ref::<DaytimeServerError>()
            .unwrap();
        assert!(matches!(
            inner,
            DaytimeServerError::Bind(BindError { port: 13 })
        ));
    }

    #[test]
    fn test_io_error_passthrough() {
        let orig = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let kind = orig.kind();
        let err = DaytimeServerError::Io(orig);
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), kind);
        assert_eq!(io_err.to_string(), "reset");
    }

    #[test]
    fn test_from_io_error() {
        let orig = io::Error::new(io::ErrorKind::BrokenPipe, "broken");
        let err: DaytimeServerError = orig.into();
        assert!(matches!(err, DaytimeServerError::Io(_)));
    }
}
