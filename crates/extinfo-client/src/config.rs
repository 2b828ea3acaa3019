use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub query: QuerySection,
    #[serde(default)]
    pub master: MasterSection,
}

#[derive(Debug, Deserialize)]
pub struct QuerySection {
    /// Deadline for every single datagram read, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_query_timeout_ms() -> u64 {
    5000
}

impl QuerySection {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for QuerySection {
    fn default() -> Self {
        Self {
            timeout_ms: default_query_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MasterSection {
    #[serde(default = "default_master_address")]
    pub address: String,
    #[serde(default = "default_master_port")]
    pub port: u16,
    /// Deadline for fetching the whole server list, in milliseconds.
    #[serde(default = "default_master_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_master_address() -> String {
    "master.sauerbraten.org".into()
}

fn default_master_port() -> u16 {
    28787
}

fn default_master_timeout_ms() -> u64 {
    10000
}

impl MasterSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for MasterSection {
    fn default() -> Self {
        Self {
            address: default_master_address(),
            port: default_master_port(),
            timeout_ms: default_master_timeout_ms(),
        }
    }
}

impl ClientConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.query.timeout_ms, 5000);
        assert_eq!(config.query.timeout(), Duration::from_secs(5));
        assert_eq!(config.master.address, "master.sauerbraten.org");
        assert_eq!(config.master.port, 28787);
        assert_eq!(config.master.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn parse_config() {
        let toml_str = r#"
            [query]
            timeout_ms = 750

            [master]
            address = "127.0.0.1"
        "#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.query.timeout(), Duration::from_millis(750));
        assert_eq!(config.master.address, "127.0.0.1");
        // port defaults when absent
        assert_eq!(config.master.port, 28787);
    }

    #[test]
    fn missing_file() {
        assert!(ClientConfig::load("/nonexistent/extinfo.toml").is_err());
    }
}
