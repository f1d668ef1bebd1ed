// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Daytime protocol client library.
//!
//! Connects to a daytime server, enables stream-tagged receive, and reads
//! time-of-day records until the peer closes the connection. Stream 0
//! carries the server's local time and stream 1 carries GMT; records on
//! any other stream are reported and discarded.
//!
//! # Example
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

#![warn(missing_docs)]

// Re-export protocol types from daytime_proto for convenience.
pub use daytime_proto::{error as proto_error, protocol, timetext};

/// Custom error types for the daytime client.
pub mod error;

/// Server name resolution into ordered address candidates.
pub mod resolve;

/// Multi-homed connection establishment over the candidate sequence.
pub mod connect;

/// The client side of a daytime connection: stream-tagged receive and
/// teardown.
pub mod connection;

/// The client session: resolve, connect, receive, display, close.
pub mod session;

pub use connection::{DaytimeConnection, Received};
pub use error::{ConnectError, DaytimeError, ResolveError};
pub use session::DaytimeClient;
