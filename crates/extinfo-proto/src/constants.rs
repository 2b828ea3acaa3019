/// Info type byte for an extended info request.
pub const INFO_TYPE_EXTENDED: u8 = 0;

/// Info type byte for a basic info request.
pub const INFO_TYPE_BASIC: u8 = 1;

/// Extended info command: server uptime.
pub const EXT_UPTIME: u8 = 0;

/// Extended info command: per-client statistics.
pub const EXT_CLIENT_INFO: u8 = 1;

/// Extended info command: team scores.
pub const EXT_TEAM_SCORES: u8 = 2;

/// Client number byte meaning "all clients" (`-1` as an unsigned byte).
pub const ALL_CLIENTS: u8 = 0xFF;

/// Trailing uptime request byte asking the server to append its mod id.
pub const SERVER_MOD_FLAG: u8 = 1;

/// Acknowledgement sentinel following the echoed request.
pub const EXT_ACK: i32 = -1;

/// The only extinfo protocol version this client understands.
pub const EXT_VERSION: i32 = 105;

/// Per-command result flag: success.
pub const EXT_NO_ERROR: i32 = 0;

/// Per-command result flag: failure (unknown client, not a team mode).
pub const EXT_ERROR: i32 = 1;

/// Client info reply kind: list of client numbers follows.
pub const EXT_CLIENT_INFO_RESP_IDS: i32 = -10;

/// Client info reply kind: one client's statistics follow.
pub const EXT_CLIENT_INFO_RESP_STATS: i32 = -11;

/// Game speed reported by servers that omit the pause/speed attributes.
pub const DEFAULT_GAME_SPEED: i32 = 100;

/// Largest datagram the server sends (its MAXTRANS).
pub const MAX_DATAGRAM_SIZE: usize = 5000;
