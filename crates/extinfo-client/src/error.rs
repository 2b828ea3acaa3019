use std::time::Duration;

use extinfo_proto::{ClientInfoRaw, ProtoError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtinfoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Proto(#[from] ProtoError),

    /// A client info query failed after some client replies were already
    /// decoded. The decoded records are kept, in arrival order.
    #[error("incomplete client info: {} of {expected} replies decoded: {source}", .clients.len())]
    Incomplete {
        clients: Vec<ClientInfoRaw>,
        expected: usize,
        source: Box<ExtinfoError>,
    },

    #[error("invalid master server entry: {0}")]
    InvalidMasterEntry(String),

    /// The byte that would carry this client number means "all clients".
    #[error("client number {0} cannot be queried on its own")]
    ReservedClientNumber(u8),
}

impl ExtinfoError {
    /// Whether the failure happened below the protocol: socket errors and
    /// timeouts.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Io(_) | Self::Timeout(_) => true,
            Self::Incomplete { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Whether the server answered correctly but reported a condition the
    /// caller asked about: an unknown client number or a non-team mode.
    pub fn is_expected_outcome(&self) -> bool {
        matches!(
            self,
            Self::Proto(ProtoError::NoSuchClient) | Self::Proto(ProtoError::NotTeamMode)
        )
    }

    /// Client records decoded before an incomplete query failed.
    pub fn partial_clients(&self) -> &[ClientInfoRaw] {
        match self {
            Self::Incomplete { clients, .. } => clients,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(ExtinfoError::Timeout(Duration::from_secs(1)).is_transport());
        assert!(!ExtinfoError::Timeout(Duration::from_secs(1)).is_expected_outcome());

        let not_team = ExtinfoError::from(ProtoError::NotTeamMode);
        assert!(not_team.is_expected_outcome());
        assert!(!not_team.is_transport());

        let no_client = ExtinfoError::from(ProtoError::NoSuchClient);
        assert!(no_client.is_expected_outcome());

        let reserved = ExtinfoError::ReservedClientNumber(255);
        assert!(!reserved.is_transport());
        assert!(!reserved.is_expected_outcome());
    }

    #[test]
    fn incomplete_keeps_cause() {
        let err = ExtinfoError::Incomplete {
            clients: vec![],
            expected: 3,
            source: Box::new(ExtinfoError::Timeout(Duration::from_millis(200))),
        };
        assert!(err.is_transport());
        assert!(err.partial_clients().is_empty());
        assert_eq!(
            err.to_string(),
            "incomplete client info: 0 of 3 replies decoded: no reply within 200ms"
        );
    }
}
