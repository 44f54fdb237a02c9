use std::env;

use anyhow::{bail, Context, Result};

pub const DEFAULT_PORT: u16 = 4045;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Lambda,
    Local,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub run_mode: RunMode,
    /// Listening port in `Local` mode.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "development".to_string(),
            run_mode: RunMode::Local,
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let run_mode = match lookup("RUN_MODE").as_deref() {
            None | Some("LOCAL") => RunMode::Local,
            Some("LAMBDA") => RunMode::Lambda,
            Some(other) => bail!("Invalid RUN_MODE: {other}"),
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {port}"))?,
            None => defaults.port,
        };

        Ok(Config {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            run_mode,
            port,
        })
    }
}
