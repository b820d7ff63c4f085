use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::jobs::transition::TransitionPolicy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the durable slot files.
    pub data_dir: PathBuf,
    /// Seed the demo applications when no saved collection exists.
    pub seed_demo_data: bool,
    pub transition_policy: TransitionPolicy,
    /// Simulated latency of the mock login/register calls.
    pub auth_delay: Duration,
    /// Simulated latency of the mock resume analysis.
    pub analysis_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            seed_demo_data: parse_env("SEED_DEMO_DATA", true)?,
            transition_policy: parse_env("TRANSITION_POLICY", TransitionPolicy::Unrestricted)?,
            auth_delay: Duration::from_millis(parse_env("AUTH_DELAY_MS", 1000)?),
            analysis_delay: Duration::from_millis(parse_env("ANALYSIS_DELAY_MS", 3000)?),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow!("{key} has invalid value '{raw}': {e}"))
}

#[cfg(test)]
impl Config {
    /// No delays, no demo seed; slots are supplied separately by the test.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            data_dir: PathBuf::from("unused"),
            seed_demo_data: false,
            transition_policy: TransitionPolicy::Unrestricted,
            auth_delay: Duration::ZERO,
            analysis_delay: Duration::ZERO,
        }
    }
}
