use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

/// HTTP server for campus indoor routing
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Location-navigation dataset (JSON), overrides the config file
    #[arg(long)]
    pub dataset: Option<PathBuf>,
    /// Address to listen on, overrides the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Allowed CORS origin, overrides the config file
    #[arg(long)]
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub dataset: PathBuf,
    pub cors_origin: String,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            dataset: PathBuf::from("data/location_navigation.json"),
            cors_origin: "http://localhost:3000".to_string(),
            request_timeout_secs: 10,
            max_concurrent_requests: 256,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("invalid server configuration")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve(cli: Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(dataset) = cli.dataset {
            config.dataset = dataset;
        }
        if let Some(bind) = cli.bind {
            config.bind = bind;
        }
        if let Some(origin) = cli.cors_origin {
            config.cors_origin = origin;
        }
        Ok(config)
    }
}
