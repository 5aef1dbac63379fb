use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{anyhow, Context};
use inspira_palettes::trending::{DEFAULT_TIMEOUT, DEFAULT_TRENDING_URL};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub trending_url: String,
    pub trending_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind = var("INSPIRA_BIND")
            .unwrap_or_else(|| "0.0.0.0:8001".into())
            .parse()
            .context("invalid INSPIRA_BIND")?;

        let trending_url = var("INSPIRA_TRENDING_URL")
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TRENDING_URL.into());
        if trending_url.is_empty() {
            return Err(anyhow!("INSPIRA_TRENDING_URL must not be empty"));
        }

        let timeout_secs = parse_u64_var(
            &var,
            "INSPIRA_TRENDING_TIMEOUT_SECS",
            DEFAULT_TIMEOUT.as_secs(),
        );
        if timeout_secs == 0 {
            return Err(anyhow!("INSPIRA_TRENDING_TIMEOUT_SECS must be > 0"));
        }

        Ok(Self {
            bind,
            trending_url,
            trending_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_u64_var(var: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    var(name)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
