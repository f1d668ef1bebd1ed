// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Daytime protocol server library.
//!
//! Listens for incoming connections and, for each accepted peer, sends
//! the current local time on stream 0 and the current GMT time on
//! stream 1, then closes the connection. Connections are served one at a
//! time, fully sequentially; the listening endpoint stays open for the
//! life of the server.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> std::io::Result<()> {
//! use daytime_server::session::DaytimeServer;
//!
//! let server = DaytimeServer::builder()
//!     .port(13)
//!     .build()?;
//!
//! server.run().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Re-export protocol types from daytime_proto for convenience.
pub use daytime_proto::{error as proto_error, protocol, timetext};

/// Custom error types for the daytime server.
pub mod error;

/// Listener establishment over the passive bind candidates, and accept.
pub mod listener;

/// The per-connection server session and the outer serve loop.
pub mod session;

pub use error::{BindError, DaytimeServerError};
pub use listener::DaytimeListener;
pub use session::DaytimeServer;
