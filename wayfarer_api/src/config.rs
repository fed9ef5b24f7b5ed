use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

pub struct ServerConfig {
    pub addr: SocketAddr,

    /// JSON graph file, the built-in Addis Ababa graph is served when absent
    pub graph_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("WAYFARER_ADDR").ok(),
            std::env::var("WAYFARER_GRAPH").ok(),
        )
    }

    fn from_vars(addr: Option<String>, graph_path: Option<String>) -> anyhow::Result<Self> {
        let addr = addr.as_deref().unwrap_or(DEFAULT_ADDR);
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("WAYFARER_ADDR is not a socket address: {addr}"))?;

        Ok(ServerConfig {
            addr,
            graph_path: graph_path
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert!(config.graph_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(
            Some(String::from("0.0.0.0:8080")),
            Some(String::from("data/graph.json")),
        )
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.graph_path, Some(PathBuf::from("data/graph.json")));
    }

    #[test]
    fn test_empty_graph_path_is_ignored() {
        let config = ServerConfig::from_vars(None, Some(String::new())).unwrap();
        assert!(config.graph_path.is_none());
    }

    #[test]
    fn test_invalid_addr() {
        assert!(ServerConfig::from_vars(Some(String::from("localhost")), None).is_err());
    }
}
