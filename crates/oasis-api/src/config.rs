//! # Service Configuration
//!
//! Command-line flags with environment fallbacks, parsed by `clap`.
//! Every setting has a default, so the binary starts with no arguments.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "oasis-api", version, about = "OASIS schema-idiom API server")]
pub struct AppConfig {
    /// Address to bind.
    #[arg(long, env = "OASIS_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log output format.
    #[arg(long, env = "OASIS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Number of generated items behind `/cursoritems`.
    #[arg(long, env = "OASIS_CURSOR_ITEMS", default_value_t = 50)]
    pub cursor_items: usize,
}

impl AppConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            log_format: LogFormat::Text,
            cursor_items: 50,
        }
    }
}
