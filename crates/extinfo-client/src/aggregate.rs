//! Collection of the multi-datagram client info reply.
//!
//! The first datagram of a client info reply lists the client numbers the
//! server is about to describe; one datagram per listed client follows.
//! Collection stops at the first failure and keeps what already arrived.

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use extinfo_proto::ResponseCursor;

use crate::error::ExtinfoError;
use crate::transport::DatagramSource;

/// Client numbers announced by the manifest datagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientManifest {
    pub client_nums: Vec<i32>,
}

impl ClientManifest {
    /// Read client numbers until the manifest is exhausted. A truncated
    /// trailing value is not counted.
    pub fn parse(mut cursor: ResponseCursor) -> Self {
        let mut client_nums = Vec::new();
        while cursor.has_remaining() {
            match cursor.read_int() {
                Ok(cn) => client_nums.push(cn),
                Err(e) => {
                    debug!("Ignoring trailing manifest bytes: {e}");
                    break;
                }
            }
        }
        Self { client_nums }
    }

    /// Number of follow-up datagrams the server will send.
    pub fn expected(&self) -> usize {
        self.client_nums.len()
    }
}

/// Follow-up datagrams received for one manifest.
#[derive(Debug)]
pub struct Aggregate {
    /// Datagrams in arrival order.
    pub replies: Vec<Bytes>,
    pub expected: usize,
    /// Why collection stopped early, if it did.
    pub failure: Option<ExtinfoError>,
}

impl Aggregate {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && self.replies.len() == self.expected
    }

    /// All received datagrams back to back, as one logical reply buffer.
    ///
    /// [`Server`](crate::Server) decodes `replies` one by one instead, since
    /// every follow-up repeats the reply header. This is for callers that
    /// keep or forward the raw reply as a whole.
    pub fn concatenated(&self) -> Bytes {
        let total = self.replies.iter().map(Bytes::len).sum();
        let mut buf = BytesMut::with_capacity(total);
        for reply in &self.replies {
            buf.extend_from_slice(reply);
        }
        buf.freeze()
    }
}

/// Read exactly one datagram per client the manifest lists.
pub async fn collect<S: DatagramSource>(manifest: &ClientManifest, source: &mut S) -> Aggregate {
    let expected = manifest.expected();
    let mut replies = Vec::with_capacity(expected);
    let mut failure = None;

    for _ in 0..expected {
        match source.next_datagram().await {
            Ok(datagram) => {
                trace!("Client reply {}/{expected}: {} bytes", replies.len() + 1, datagram.len());
                replies.push(datagram);
            }
            Err(e) => {
                debug!("Client info stopped after {}/{expected} replies: {e}", replies.len());
                failure = Some(e);
                break;
            }
        }
    }

    Aggregate {
        replies,
        expected,
        failure,
    }
}
