//! Configuração do servidor, lida de variáveis de ambiente.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `NUMDET_BIND`
    pub bind_addr: SocketAddr,
    /// `RUST_LOG`, no formato de diretivas do `EnvFilter`
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var("NUMDET_BIND").ok(), env::var("RUST_LOG").ok())
    }

    fn from_vars(bind: Option<String>, log_filter: Option<String>) -> Result<Self> {
        let bind = bind.unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("NUMDET_BIND inválido: {bind}"))?;
        Ok(Self {
            bind_addr,
            log_filter: log_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
