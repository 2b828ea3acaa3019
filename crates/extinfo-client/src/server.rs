//! High-level queries against one game server.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, warn};

use extinfo_proto::constants::ALL_CLIENTS;
use extinfo_proto::validate::{validate, validate_client_stats};
use extinfo_proto::{
    uptime, BasicInfo, BasicInfoRaw, ClientInfo, ClientInfoRaw, ClientTarget, ProtoError, Query,
    ResponseCursor, ServerMod, TeamScores, TeamScoresRaw,
};

use crate::aggregate::{self, ClientManifest};
use crate::config::ClientConfig;
use crate::error::ExtinfoError;
use crate::transport::Transport;

/// A game server reachable over extinfo.
///
/// Holds no socket: every query opens its own transport, so clones can
/// query concurrently.
#[derive(Debug, Clone)]
pub struct Server {
    addr: SocketAddr,
    timeout: Duration,
}

impl Server {
    /// `game_addr` is the address players connect to; extinfo listens one
    /// port above it. A game port of 65535 has no extinfo port and every
    /// query fails with an I/O error.
    pub fn new(game_addr: SocketAddr, timeout: Duration) -> Self {
        let mut addr = game_addr;
        addr.set_port(game_addr.port().wrapping_add(1));
        Self { addr, timeout }
    }

    pub fn from_config(game_addr: SocketAddr, config: &ClientConfig) -> Self {
        Self::new(game_addr, config.query.timeout())
    }

    /// The extinfo address (game port + 1).
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn basic_info_raw(&self) -> Result<BasicInfoRaw, ExtinfoError> {
        let (_, mut cursor) = self.query(Query::BasicInfo).await?;
        Ok(BasicInfoRaw::decode(&mut cursor)?)
    }

    pub async fn basic_info(&self) -> Result<BasicInfo, ExtinfoError> {
        self.basic_info_raw().await.map(BasicInfo::from)
    }

    /// Seconds since the server started.
    pub async fn uptime(&self) -> Result<i32, ExtinfoError> {
        let (_, mut cursor) = self.query(Query::Uptime).await?;
        Ok(uptime::decode_uptime(&mut cursor)?)
    }

    /// The mod the server identifies as, or `None` for a vanilla server.
    pub async fn server_mod(&self) -> Result<Option<ServerMod>, ExtinfoError> {
        let (_, mut cursor) = self.query(Query::ServerMod).await?;
        Ok(ServerMod::decode(&mut cursor)?)
    }

    /// Fails with [`ProtoError::NotTeamMode`] outside team modes.
    pub async fn team_scores_raw(&self) -> Result<TeamScoresRaw, ExtinfoError> {
        let (_, mut cursor) = self.query(Query::TeamScores).await?;
        Ok(TeamScoresRaw::decode(&mut cursor)?)
    }

    pub async fn team_scores(&self) -> Result<TeamScores, ExtinfoError> {
        self.team_scores_raw().await.map(TeamScores::from)
    }

    /// Fails with [`ProtoError::NoSuchClient`] when `cn` is not connected.
    /// `cn` 255 is the "all clients" byte and is rejected without sending
    /// anything.
    pub async fn client_info_raw(&self, cn: u8) -> Result<ClientInfoRaw, ExtinfoError> {
        if cn == ALL_CLIENTS {
            return Err(ExtinfoError::ReservedClientNumber(cn));
        }
        let clients = match self.client_infos(ClientTarget::One(cn)).await {
            Ok(clients) => clients,
            // nothing partial to keep for a single client
            Err(ExtinfoError::Incomplete { source, .. }) => return Err(*source),
            Err(e) => return Err(e),
        };
        let client = clients.into_iter().next().ok_or_else(|| {
            ProtoError::InvalidResponse(format!("no client record for cn {cn}"))
        })?;
        if client.client_num != i32::from(cn) {
            return Err(ProtoError::InvalidResponse(format!(
                "asked for cn {cn}, got a record for cn {}",
                client.client_num
            ))
            .into());
        }
        Ok(client)
    }

    pub async fn client_info(&self, cn: u8) -> Result<ClientInfo, ExtinfoError> {
        self.client_info_raw(cn).await.map(ClientInfo::from)
    }

    /// Every connected client keyed by client number.
    ///
    /// If a follow-up reply is lost or malformed the result is
    /// [`ExtinfoError::Incomplete`], carrying the records decoded so far.
    pub async fn all_client_info_raw(&self) -> Result<BTreeMap<i32, ClientInfoRaw>, ExtinfoError> {
        let clients = self.client_infos(ClientTarget::All).await?;
        Ok(clients.into_iter().map(|c| (c.client_num, c)).collect())
    }

    pub async fn all_client_info(&self) -> Result<BTreeMap<i32, ClientInfo>, ExtinfoError> {
        let clients = self.all_client_info_raw().await?;
        Ok(clients
            .into_iter()
            .map(|(cn, raw)| (cn, ClientInfo::from(raw)))
            .collect())
    }

    /// Send `query` over a fresh transport and validate the first reply.
    async fn query(&self, query: Query) -> Result<(Transport, ResponseCursor), ExtinfoError> {
        let transport = Transport::connect(self.addr, self.timeout).await?;
        let datagram = transport.round_trip(&query.request()).await?;
        let cursor = validate(datagram, &query)?;
        debug!("{query:?} reply from {} validated", self.addr);
        Ok((transport, cursor))
    }

    async fn client_infos(&self, target: ClientTarget) -> Result<Vec<ClientInfoRaw>, ExtinfoError> {
        let query = Query::ClientInfo(target);
        let (mut transport, cursor) = self.query(query).await?;
        let manifest = ClientManifest::parse(cursor);
        debug!(
            "{} announced {} clients: {:?}",
            self.addr,
            manifest.expected(),
            manifest.client_nums
        );

        let collected = aggregate::collect(&manifest, &mut transport).await;
        let expected = collected.expected;
        let mut clients = Vec::with_capacity(collected.replies.len());
        for reply in collected.replies {
            match decode_client(reply, &query) {
                Ok(client) => clients.push(client),
                Err(e) => {
                    warn!("Bad client reply from {}: {e}", self.addr);
                    return Err(ExtinfoError::Incomplete {
                        clients,
                        expected,
                        source: Box::new(e.into()),
                    });
                }
            }
        }

        match collected.failure {
            None => Ok(clients),
            Some(source) => Err(ExtinfoError::Incomplete {
                clients,
                expected,
                source: Box::new(source),
            }),
        }
    }
}

fn decode_client(reply: Bytes, query: &Query) -> Result<ClientInfoRaw, ProtoError> {
    let mut cursor = validate_client_stats(reply, query)?;
    ClientInfoRaw::decode(&mut cursor)
}
