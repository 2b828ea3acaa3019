//! Basic server info: player count, mode, map and description.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GAME_SPEED;
use crate::cursor::ResponseCursor;
use crate::error::ProtoError;
use crate::names;

/// Servers send at least these attributes: protocol version, game mode,
/// seconds left, max clients and master mode.
const MIN_ATTRIBUTES: i32 = 5;

/// Newer servers additionally send the paused flag and the game speed.
const ATTRIBUTES_WITH_PAUSE: i32 = 7;

/// Basic server info with every enum left as its wire integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfoRaw {
    /// Connected clients, players and spectators alike.
    pub number_of_clients: i32,
    pub protocol_version: i32,
    pub game_mode: i32,
    /// Seconds until intermission.
    pub secs_left: i32,
    pub max_number_of_clients: i32,
    pub master_mode: i32,
    pub paused: bool,
    pub game_speed: i32,
    pub map: String,
    pub description: String,
}

impl BasicInfoRaw {
    /// Decode the payload following the echoed request byte.
    pub fn decode(cursor: &mut ResponseCursor) -> Result<Self, ProtoError> {
        let number_of_clients = cursor.read_int()?;
        let attributes = cursor.read_int()?;
        if attributes < MIN_ATTRIBUTES {
            return Err(ProtoError::InvalidResponse(format!(
                "basic info carries {attributes} attributes, need at least {MIN_ATTRIBUTES}"
            )));
        }

        let protocol_version = cursor.read_int()?;
        let game_mode = cursor.read_int()?;
        let secs_left = cursor.read_int()?;
        let max_number_of_clients = cursor.read_int()?;
        let master_mode = cursor.read_int()?;

        let (paused, game_speed) = if attributes >= ATTRIBUTES_WITH_PAUSE {
            let paused = cursor.read_int()? == 1;
            let game_speed = cursor.read_int()?;
            // attributes this client doesn't know about
            for _ in ATTRIBUTES_WITH_PAUSE..attributes {
                cursor.read_int()?;
            }
            (paused, game_speed)
        } else {
            for _ in MIN_ATTRIBUTES..attributes {
                cursor.read_int()?;
            }
            (false, DEFAULT_GAME_SPEED)
        };

        Ok(Self {
            number_of_clients,
            protocol_version,
            game_mode,
            secs_left,
            max_number_of_clients,
            master_mode,
            paused,
            game_speed,
            map: cursor.read_string()?,
            description: cursor.read_string()?,
        })
    }
}

/// Basic server info with game mode and master mode translated to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(flatten)]
    pub raw: BasicInfoRaw,
    pub game_mode_name: String,
    pub master_mode_name: String,
}

impl From<BasicInfoRaw> for BasicInfo {
    fn from(raw: BasicInfoRaw) -> Self {
        Self {
            game_mode_name: names::game_mode_name(raw.game_mode).to_string(),
            master_mode_name: names::master_mode_name(raw.master_mode).to_string(),
            raw,
        }
    }
}
