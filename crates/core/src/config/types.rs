use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use crate::timeline::MatchStrategy;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tickets: TicketEndpointConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Remote ticket service the form submits to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TicketEndpointConfig {
    /// Full URL that accepts `POST` with a JSON ticket payload.
    #[serde(default = "default_ticket_endpoint")]
    pub endpoint: String,
}

impl Default for TicketEndpointConfig {
    fn default() -> Self {
        Self {
            endpoint: default_ticket_endpoint(),
        }
    }
}

fn default_ticket_endpoint() -> String {
    "http://localhost:5000/api/tickets".to_string()
}

/// Approval timeline configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TimelineConfig {
    /// How approval records are paired with canonical departments.
    #[serde(default)]
    pub matching: MatchStrategy,
}
