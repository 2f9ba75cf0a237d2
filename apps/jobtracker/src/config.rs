use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::backend::mock::MockLatency;

/// Which backend the stores talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The tracker API over HTTP.
    Http,
    /// An in-process mock; nothing leaves the machine.
    Mock,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(BackendKind::Http),
            "mock" => Ok(BackendKind::Mock),
            other => bail!("JOBTRACKER_BACKEND must be 'http' or 'mock', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub backend: BackendKind,
    pub token_path: PathBuf,
    pub mock_latency: MockLatency,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: env_or("JOBTRACKER_API_URL", "http://127.0.0.1:8080/api"),
            backend: env_or("JOBTRACKER_BACKEND", "http").parse()?,
            token_path: std::env::var("JOBTRACKER_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_token_path()),
            mock_latency: MockLatency {
                auth: millis_env("MOCK_AUTH_LATENCY_MS", 1000)?,
                call: millis_env("MOCK_LATENCY_MS", 500)?,
                generation: millis_env("MOCK_GENERATION_LATENCY_MS", 2000)?,
            },
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn millis_env(key: &str, default: u64) -> Result<Duration> {
    let raw = env_or(key, &default.to_string());
    let millis = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of milliseconds, got '{raw}'"))?;
    Ok(Duration::from_millis(millis))
}

fn default_token_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jobtracker")
        .join("token")
}
