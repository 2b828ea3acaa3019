//! Async client for the Cube 2: Sauerbraten extinfo status protocol.
//!
//! ```no_run
//! # async fn run() -> Result<(), extinfo_client::ExtinfoError> {
//! use std::time::Duration;
//!
//! let server = extinfo_client::Server::new("127.0.0.1:28785".parse().unwrap(), Duration::from_secs(5));
//! let info = server.basic_info().await?;
//! println!("{} on {}", info.game_mode_name, info.raw.map);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod master;
pub mod server;
pub mod transport;

pub use config::ClientConfig;
pub use error::ExtinfoError;
pub use extinfo_proto as proto;
pub use server::Server;
