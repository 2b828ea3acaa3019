//! Query kinds and their request bytes.

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::*;

/// Which clients a client info query asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientTarget {
    /// A single client number.
    One(u8),
    /// Every connected client, including spectators.
    All,
}

impl ClientTarget {
    fn to_byte(self) -> u8 {
        match self {
            Self::One(cn) => cn,
            Self::All => ALL_CLIENTS,
        }
    }
}

/// One logical extinfo query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    BasicInfo,
    Uptime,
    /// Uptime plus the server's mod identifier, if it reports one.
    ServerMod,
    ClientInfo(ClientTarget),
    TeamScores,
}

impl Query {
    /// Build the request datagram for this query.
    pub fn request(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(3);
        match self {
            Self::BasicInfo => buf.put_u8(INFO_TYPE_BASIC),
            Self::Uptime => {
                buf.put_u8(INFO_TYPE_EXTENDED);
                buf.put_u8(EXT_UPTIME);
            }
            Self::ServerMod => {
                buf.put_u8(INFO_TYPE_EXTENDED);
                buf.put_u8(EXT_UPTIME);
                buf.put_u8(SERVER_MOD_FLAG);
            }
            Self::ClientInfo(target) => {
                buf.put_u8(INFO_TYPE_EXTENDED);
                buf.put_u8(EXT_CLIENT_INFO);
                buf.put_u8(target.to_byte());
            }
            Self::TeamScores => {
                buf.put_u8(INFO_TYPE_EXTENDED);
                buf.put_u8(EXT_TEAM_SCORES);
            }
        }
        buf.freeze()
    }

    pub fn is_extended(&self) -> bool {
        !matches!(self, Self::BasicInfo)
    }

    /// Number of header bytes every reply carries after the echoed request:
    /// ack and version for extended replies, plus the result flag for
    /// commands that have one. Error replies end right after the flag.
    pub fn header_len(&self) -> usize {
        match self {
            Self::BasicInfo => 0,
            Self::Uptime | Self::ServerMod => 2,
            Self::TeamScores | Self::ClientInfo(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_info_request() {
        assert_eq!(&Query::BasicInfo.request()[..], &[0x01]);
        assert!(!Query::BasicInfo.is_extended());
    }

    #[test]
    fn extended_requests() {
        assert_eq!(&Query::Uptime.request()[..], &[0x00, 0x00]);
        assert_eq!(&Query::TeamScores.request()[..], &[0x00, 0x02]);
        assert_eq!(&Query::ServerMod.request()[..], &[0x00, 0x00, 0x01]);
    }

    #[test]
    fn client_info_requests() {
        assert_eq!(
            &Query::ClientInfo(ClientTarget::One(7)).request()[..],
            &[0x00, 0x01, 0x07]
        );
        assert_eq!(
            &Query::ClientInfo(ClientTarget::All).request()[..],
            &[0x00, 0x01, 0xFF]
        );
    }
}
