//! Uptime and server mod replies.

use serde::{Deserialize, Serialize};

use crate::cursor::ResponseCursor;
use crate::error::ProtoError;
use crate::names;

/// Decode the uptime in seconds following a validated uptime header.
pub fn decode_uptime(cursor: &mut ResponseCursor) -> Result<i32, ProtoError> {
    cursor.read_int()
}

/// Modification a server identified itself with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMod {
    pub id: i32,
    pub name: String,
}

impl ServerMod {
    pub fn from_id(id: i32) -> Self {
        Self {
            id,
            name: names::server_mod_name(id),
        }
    }

    /// Decode a server mod reply: the uptime, optionally followed by the
    /// mod id. Vanilla servers send no id.
    pub fn decode(cursor: &mut ResponseCursor) -> Result<Option<Self>, ProtoError> {
        decode_uptime(cursor)?;
        if !cursor.has_remaining() {
            return Ok(None);
        }
        cursor.read_int().map(|id| Some(Self::from_id(id)))
    }
}
