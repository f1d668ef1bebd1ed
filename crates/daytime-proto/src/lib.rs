// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Daytime protocol wire types, record framing, and time text formatting.
//!
//! This crate provides the foundational types for a time-of-day exchange
//! protocol loosely modeled after RFC 867, carried over a multi-stream
//! record layer: every message travels on a numbered stream within one
//! connection, and the stream number — not the payload — identifies the
//! message kind.

#![warn(missing_docs)]

/// Custom error types for record framing and parsing.
pub mod error;

/// Protocol types and constants: stream identifiers, the record header,
/// and payload bounds.
pub mod protocol;

/// Daytime text formatting (`YYYY-MM-DD HH:MM:SS` plus line end).
pub mod timetext;
