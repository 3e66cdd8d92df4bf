//! Environment-driven service configuration.
//!
//! # Responsibility
//! - Read every tunable from environment variables with sane defaults.
//! - Keep configuration access explicit (no ambient globals).
//!
//! # Invariants
//! - Missing or unparsable variables fall back to their defaults; the
//!   service always starts with a complete configuration.

use std::env;
use std::path::PathBuf;

/// Full service configuration assembled at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Deployment environment label (`development`, `production`, ...).
    pub env: String,
    /// SQLite database file path.
    pub database_path: PathBuf,
    /// Log level passed to core logging init.
    pub log_level: String,
    /// Optional directory for rolling log files; stderr-only when unset.
    pub log_dir: Option<PathBuf>,
    /// Single allowed CORS origin for the frontend.
    pub frontend_url: String,
    pub gemini: GeminiConfig,
}

/// Settings for the hosted Gemini API handle.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub api_key: String,
    pub max_output_tokens: u32,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("PORT", 8080),
            env: env_string("ENV", "development"),
            database_path: PathBuf::from(env_string("SOLVELOG_DB", "solvelog.sqlite3")),
            log_level: env_string("SOLVELOG_LOG_LEVEL", solvelog_core::default_log_level()),
            log_dir: env::var("SOLVELOG_LOG_DIR")
                .ok()
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            frontend_url: env_string("FRONTEND_URL", "http://localhost:3000"),
            gemini: GeminiConfig {
                model: env_string("GEMINI_MODEL", "gemini-1.5-flash"),
                api_key: env_string("GEMINI_API_KEY", ""),
                max_output_tokens: env_parsed("MAX_OUTPUT_TOKENS", 4096),
            },
        }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads a parsable variable; unparsable values count as absent.
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
