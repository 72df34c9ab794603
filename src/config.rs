use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{net::SocketAddr, path::Path};
use validator::Validate;

use crate::domain::{OperatingParams, Scenario};
use crate::policy::PolicySpec;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "RESOPS__";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub scenario: Scenario,
    pub reservoir: OperatingParams,
    #[serde(default)]
    pub sweep: SweepConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub enable_cors: bool,
    #[serde(default)]
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Policies evaluated by `/sweep` when the request names none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub policies: Vec<PolicySpec>,
}

impl Config {
    /// Load `config/default.toml`, then apply `RESOPS__`-prefixed env overrides.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file(DEFAULT_CONFIG_PATH))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        let cfg: Self = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a single TOML file without env overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cfg: Self = Figment::from(Toml::file(path))
            .extract()
            .with_context(|| format!("reading config from {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.server.validate().context("invalid [server] section")?;
        self.scenario.validate().context("invalid [scenario] section")?;
        self.reservoir.validate().context("invalid [reservoir] section")?;
        for spec in &self.sweep.policies {
            spec.schedule(&self.scenario, &self.reservoir)
                .with_context(|| format!("invalid sweep policy {}", spec.label()))?;
        }
        Ok(())
    }
}
