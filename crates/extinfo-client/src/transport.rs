//! UDP transport for one logical query.
//!
//! A transport owns a socket connected to a single extinfo address, so the
//! kernel drops datagrams from any other peer. Every read gets a fresh
//! deadline.

use std::future::Future;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tokio::net::UdpSocket;
use tracing::{debug, trace};

use extinfo_proto::constants::MAX_DATAGRAM_SIZE;

use crate::error::ExtinfoError;

/// Something that yields reply datagrams one at a time.
pub trait DatagramSource {
    /// Wait for the next datagram. Fails with [`ExtinfoError::Timeout`]
    /// when nothing arrives in time.
    fn next_datagram(&mut self) -> impl Future<Output = Result<Bytes, ExtinfoError>> + Send;
}

pub struct Transport {
    socket: UdpSocket,
    peer: SocketAddr,
    timeout: Duration,
}

impl Transport {
    /// Bind an ephemeral local port and connect it to `peer`.
    pub async fn connect(peer: SocketAddr, timeout: Duration) -> Result<Self, ExtinfoError> {
        let local: SocketAddr = if peer.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local).await?;
        socket.connect(peer).await?;
        debug!("Extinfo socket {} connected to {peer}", socket.local_addr()?);
        Ok(Self {
            socket,
            peer,
            timeout,
        })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub async fn send(&self, request: &[u8]) -> Result<(), ExtinfoError> {
        self.socket.send(request).await?;
        trace!("Sent {} byte request to {}: {request:02X?}", request.len(), self.peer);
        Ok(())
    }

    /// Receive one datagram, keeping only the bytes actually received.
    pub async fn recv(&self) -> Result<Bytes, ExtinfoError> {
        let mut buf = BytesMut::zeroed(MAX_DATAGRAM_SIZE);
        let len = match tokio::time::timeout(self.timeout, self.socket.recv(&mut buf)).await {
            Ok(received) => received?,
            Err(_) => {
                debug!("No reply from {} within {:?}", self.peer, self.timeout);
                return Err(ExtinfoError::Timeout(self.timeout));
            }
        };
        buf.truncate(len);
        trace!("Received {len} bytes from {}", self.peer);
        Ok(buf.freeze())
    }

    /// Send `request` and wait for the first reply.
    pub async fn round_trip(&self, request: &[u8]) -> Result<Bytes, ExtinfoError> {
        self.send(request).await?;
        self.recv().await
    }
}

impl DatagramSource for Transport {
    async fn next_datagram(&mut self) -> Result<Bytes, ExtinfoError> {
        self.recv().await
    }
}
