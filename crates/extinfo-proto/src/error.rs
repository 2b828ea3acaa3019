//! Protocol-level errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtoError {
    #[error("buffer too short: need {needed} bytes, have {remaining}")]
    TruncatedBuffer { needed: usize, remaining: usize },

    #[error("reply does not echo the request: byte {offset} is 0x{got:02X}, expected 0x{expected:02X}")]
    ResponseMismatch { offset: usize, expected: u8, got: u8 },

    #[error("unsupported extinfo version: expected {expected}, got {got}")]
    UnsupportedVersion { expected: i32, got: i32 },

    #[error("server has no client with the requested client number")]
    NoSuchClient,

    #[error("server is not running a team mode")]
    NotTeamMode,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ProtoError {
    /// Shorthand for a truncated read of `needed` bytes with `remaining` left.
    pub(crate) fn truncated(needed: usize, remaining: usize) -> Self {
        Self::TruncatedBuffer { needed, remaining }
    }
}
