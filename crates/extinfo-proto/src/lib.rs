//! Cube 2: Sauerbraten extinfo protocol types and decoders.
//!
//! Everything in this crate is I/O free: requests are built as bytes and
//! replies are decoded from received datagrams.

pub mod basic_info;
pub mod client_info;
pub mod codec;
pub mod constants;
pub mod cubecode;
pub mod cursor;
pub mod error;
pub mod names;
pub mod request;
pub mod team_scores;
pub mod uptime;
pub mod validate;

pub use basic_info::{BasicInfo, BasicInfoRaw};
pub use client_info::{ClientInfo, ClientInfoRaw};
pub use cursor::ResponseCursor;
pub use error::ProtoError;
pub use request::{ClientTarget, Query};
pub use team_scores::{TeamScore, TeamScores, TeamScoresRaw};
pub use uptime::ServerMod;
