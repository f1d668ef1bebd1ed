// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Custom error types for the daytime client.
//!
//! Public APIs return `io::Result<T>`. Internally, errors are constructed
//! as [`DaytimeError`] variants and converted to `io::Error` via
//! `From<DaytimeError> for io::Error`. Users who want programmatic error
//! matching can downcast via `io::Error::get_ref()`:
//!
//! ```no_run
//! use daytime_client::error::DaytimeError;
//!
//! # fn example(result: std::io::Result<()>) {
//! if let Err(e) = result {
//!     if let Some(err) = e.get_ref().and_then(|inner| inner.downcast_ref::<DaytimeError>()) {
//!         match err {
//!             DaytimeError::Resolve(r) => eprintln!("resolver error: {r}"),
//!             DaytimeError::Connect(c) => eprintln!("connect error: {c}"),
//!             _ => eprintln!("daytime error: {err}"),
//!         }
//!     }
//! }
//! # }
//! ```

use std::fmt;
use std::io;

/// Errors that can occur during daytime client operations.
#[derive(Debug)]
pub enum DaytimeError {
    /// Name resolution failed entirely for the server address.
    Resolve(ResolveError),
    /// Every resolved address candidate was attempted without success.
    Connect(ConnectError),
    /// Underlying I/O error (receive, shutdown, etc.).
    Io(io::Error),
}

/// Total name resolution failure, carrying the resolver's diagnostic text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolveError {
    /// The host name that failed to resolve.
    pub host: String,
    /// The port the resolution was for.
    pub port: u16,
    /// Diagnostic text from the system resolver.
    pub detail: String,
}

/// Connection establishment failed on every address candidate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectError {
    /// The host name the candidates were resolved from.
    pub host: String,
    /// The port the connection was attempted on.
    pub port: u16,
}

// ── Display implementations ─────────────────────────────────────────

impl fmt::Display for DaytimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaytimeError::Resolve(e) => write!(f, "{e}"),
            DaytimeError::Connect(e) => write!(f, "{e}"),
            DaytimeError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getaddrinfo failed for {} port {}: {}",
            self.host, self.port, self.detail
        )
    }
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "socket or connect failed for {} port {}",
            self.host, self.port
        )
    }
}

// ── Error trait implementations ─────────────────────────────────────

impl std::error::Error for DaytimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DaytimeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ResolveError {}
impl std::error::Error for ConnectError {}

// ── From conversions ────────────────────────────────────────────────

impl From<DaytimeError> for io::Error {
    fn from(err: DaytimeError) -> io::Error {
        let kind = match &err {
            DaytimeError::Resolve(_) => io::ErrorKind::InvalidInput,
            DaytimeError::Connect(_) => io::ErrorKind::ConnectionRefused,
            DaytimeError::Io(e) => e.kind(),
        };
        // Preserve the original io::Error directly for the Io variant.
        if let DaytimeError::Io(e) = err {
            return e;
        }
        io::Error::new(kind, err)
    }
}

impl From<io::Error> for DaytimeError {
    fn from(err: io::Error) -> DaytimeError {
        DaytimeError::Io(err)
    }
}

impl From<ResolveError> for DaytimeError {
    fn from(err: ResolveError) -> DaytimeError {
        DaytimeError::Resolve(err)
    }
}

impl From<ConnectError> for DaytimeError {
    fn from(err: ConnectError) -> DaytimeError {
        DaytimeError::Connect(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
