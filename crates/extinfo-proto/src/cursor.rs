//! Position-tracking reader over a single reply buffer.

use bytes::{Buf, Bytes};

use crate::codec;
use crate::error::ProtoError;

/// Reads fields from one datagram (or one logical reply buffer).
///
/// Every read advances past exactly the bytes it consumed. After a read
/// fails the position is unspecified and the cursor should be dropped.
#[derive(Debug, Clone)]
pub struct ResponseCursor {
    buf: Bytes,
    len: usize,
}

impl ResponseCursor {
    pub fn new(buf: Bytes) -> Self {
        let len = buf.len();
        Self { buf, len }
    }

    /// Offset of the next unread byte from the start of the buffer.
    pub fn position(&self) -> usize {
        self.len - self.buf.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn has_remaining(&self) -> bool {
        self.buf.has_remaining()
    }

    pub fn read_byte(&mut self) -> Result<u8, ProtoError> {
        if !self.buf.has_remaining() {
            return Err(ProtoError::truncated(1, 0));
        }
        Ok(self.buf.get_u8())
    }

    pub fn read_int(&mut self) -> Result<i32, ProtoError> {
        codec::read_int(&mut self.buf)
    }

    pub fn read_string(&mut self) -> Result<String, ProtoError> {
        codec::read_string(&mut self.buf)
    }

    /// Read `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes, ProtoError> {
        if self.buf.remaining() < n {
            return Err(ProtoError::truncated(n, self.buf.remaining()));
        }
        Ok(self.buf.split_to(n))
    }

    /// Split off the next `len` bytes as an independent cursor and advance
    /// past them.
    pub fn sub_range(&mut self, len: usize) -> Result<ResponseCursor, ProtoError> {
        self.read_bytes(len).map(ResponseCursor::new)
    }

    /// The unread part of the buffer, consuming the cursor.
    pub fn into_remaining(self) -> Bytes {
        self.buf
    }
}

impl From<Bytes> for ResponseCursor {
    fn from(buf: Bytes) -> Self {
        Self::new(buf)
    }
}
