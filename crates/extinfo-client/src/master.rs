//! Server list from the master server.
//!
//! The master speaks a line-based text protocol over TCP: after `list` it
//! answers with one `addserver <ip> <port>` line per registered server and
//! closes the connection.

use std::net::{IpAddr, SocketAddr};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::config::{ClientConfig, MasterSection};
use crate::error::ExtinfoError;
use crate::server::Server;

const LIST_COMMAND: &[u8] = b"list\n";
const ADD_SERVER: &str = "addserver";

/// Fetch the game addresses of every registered server.
pub async fn fetch_server_list(master: &MasterSection) -> Result<Vec<SocketAddr>, ExtinfoError> {
    let timeout = master.timeout();
    match tokio::time::timeout(timeout, fetch(master)).await {
        Ok(result) => result,
        Err(_) => {
            debug!("Master {}:{} did not finish within {timeout:?}", master.address, master.port);
            Err(ExtinfoError::Timeout(timeout))
        }
    }
}

/// Fetch the server list and wrap each entry for querying.
pub async fn fetch_servers(config: &ClientConfig) -> Result<Vec<Server>, ExtinfoError> {
    let addrs = fetch_server_list(&config.master).await?;
    Ok(addrs
        .into_iter()
        .map(|addr| Server::from_config(addr, config))
        .collect())
}

async fn fetch(master: &MasterSection) -> Result<Vec<SocketAddr>, ExtinfoError> {
    let mut stream = TcpStream::connect((master.address.as_str(), master.port)).await?;
    stream.write_all(LIST_COMMAND).await?;

    let mut lines = BufReader::new(stream).lines();
    let mut servers = Vec::new();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(Some(addr)) => servers.push(addr),
            Ok(None) => {}
            Err(e) => warn!("Skipping master entry: {e}"),
        }
    }
    debug!(
        "Master {}:{} listed {} servers",
        master.address,
        master.port,
        servers.len()
    );
    Ok(servers)
}

/// Parse every `addserver` line of a complete listing, skipping the rest.
pub fn parse_server_list(listing: &str) -> Vec<SocketAddr> {
    listing
        .lines()
        .filter_map(|line| match parse_line(line) {
            Ok(addr) => addr,
            Err(e) => {
                warn!("Skipping master entry: {e}");
                None
            }
        })
        .collect()
}

/// `Ok(None)` for lines that are not server entries.
fn parse_line(line: &str) -> Result<Option<SocketAddr>, ExtinfoError> {
    let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    let mut fields = line.split_whitespace();
    if fields.next() != Some(ADD_SERVER) {
        return Ok(None);
    }
    let invalid = || ExtinfoError::InvalidMasterEntry(line.to_string());
    let ip: IpAddr = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(invalid)?;
    let port: u16 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(invalid)?;
    Ok(Some(SocketAddr::new(ip, port)))
}
