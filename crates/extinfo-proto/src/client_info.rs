//! Per-client statistics.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::cursor::ResponseCursor;
use crate::error::ProtoError;
use crate::names;

/// Octets of the client IP the server transmits. The last one is withheld.
const IP_OCTETS_SENT: usize = 3;

/// One client's statistics with every enum left as its wire integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfoRaw {
    pub client_num: i32,
    pub ping: i32,
    pub name: String,
    pub team: String,
    pub frags: i32,
    /// Flags scored.
    pub flags: i32,
    pub deaths: i32,
    pub teamkills: i32,
    /// Accuracy in percent.
    pub damage: i32,
    pub health: i32,
    pub armour: i32,
    pub weapon: i32,
    pub privilege: i32,
    pub state: i32,
    /// Client address with the last octet zeroed.
    pub ip: Ipv4Addr,
}

impl ClientInfoRaw {
    /// Decode the fields following a client stats header.
    pub fn decode(cursor: &mut ResponseCursor) -> Result<Self, ProtoError> {
        Ok(Self {
            client_num: cursor.read_int()?,
            ping: cursor.read_int()?,
            name: cursor.read_string()?,
            team: cursor.read_string()?,
            frags: cursor.read_int()?,
            flags: cursor.read_int()?,
            deaths: cursor.read_int()?,
            teamkills: cursor.read_int()?,
            damage: cursor.read_int()?,
            health: cursor.read_int()?,
            armour: cursor.read_int()?,
            weapon: cursor.read_int()?,
            privilege: cursor.read_int()?,
            state: cursor.read_int()?,
            ip: read_partial_ip(cursor)?,
        })
    }
}

fn read_partial_ip(cursor: &mut ResponseCursor) -> Result<Ipv4Addr, ProtoError> {
    let octets = cursor.read_bytes(IP_OCTETS_SENT)?;
    Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], 0))
}

/// One client's statistics with weapon, privilege and state translated to
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[serde(flatten)]
    pub raw: ClientInfoRaw,
    pub weapon_name: String,
    pub privilege_name: String,
    pub state_name: String,
}

impl From<ClientInfoRaw> for ClientInfo {
    fn from(raw: ClientInfoRaw) -> Self {
        Self {
            weapon_name: names::weapon_name(raw.weapon).to_string(),
            privilege_name: names::privilege_name(raw.privilege).to_string(),
            state_name: names::state_name(raw.state).to_string(),
            raw,
        }
    }
}
