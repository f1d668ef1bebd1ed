// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Shared test helpers for server integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

/// Spawn a test server on an ephemeral port and return its bound address.
///
/// The server runs in a background tokio task. It will shut down when the
/// tokio runtime is dropped.
pub(crate) async fn spawn_test_server(
    builder: daytime_server::session::DaytimeServerBuilder,
) -> SocketAddr {
    let server = builder.port(0).build().expect("failed to bind test server");
    let bound = server.local_addr().expect("failed to get local addr");
    // Replace unspecified address with loopback for test connectivity.
    let addr = SocketAddr::new(
        if bound.ip().is_unspecified() {
            std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST)
        } else {
            bound.ip()
        },
        bound.port(),
    );
    tokio::spawn(async move {
        server.run().await;
    });
    // Small yield to ensure the server task is running.
    tokio::time::sleep(Duration::from_millis(10)).await;
    addr
}

/// Read one raw record from the stream: `(stream number, payload bytes)`.
///
/// Returns `None` on a clean end of stream.
pub(crate) async fn read_record_raw(stream: &mut TcpStream) -> Option<(u16, Vec<u8>)> {
    let mut header = [0u8; 4];
    if stream.read_exact(&mut header).await.is_err() {
        return None;
    }
    let stream_no = u16::from_be_bytes([header[0], header[1]]);
    let length = u16::from_be_bytes([header[2], header[3]]) as usize;

    let mut payload = vec![0u8; length];
    stream
        .read_exact(&mut payload)
        .await
        .expect("payload shorter than declared");
    Some((stream_no, payload))
}
