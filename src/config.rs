//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `PBLY_TOKEN` - shared write secret, required and non-empty; callers
//!   must present it in the `Pbly-Token` header to create links
//! - `PORT` - listen port, bound on `0.0.0.0` (default: `3000`)
//! - `RUST_LOG` - log filter (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port; the server binds `0.0.0.0:<port>`.
    pub port: u16,
    /// Shared write secret compared against the `Pbly-Token` header.
    pub token: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PBLY_TOKEN` is missing or `PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
            Err(_) => 3000,
        };

        let token = env::var("PBLY_TOKEN").context("PBLY_TOKEN must be set")?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            port,
            token,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `token` is empty
    /// - `port` is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            anyhow::bail!("PBLY_TOKEN must not be empty");
        }

        if self.port == 0 {
            anyhow::bail!("PORT must not be 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns the socket address string the server binds.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Prints configuration summary (without the write secret).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Write token: {}", mask_token(&self.token));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks the write secret for logging, keeping only its length visible.
fn mask_token(token: &str) -> String {
    format!("*** ({} chars)", token.len())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
