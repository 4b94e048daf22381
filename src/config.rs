//! Application configuration loaded from environment variables and CLI flags.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. CLI flags take priority over environment variables, which take
//! priority over defaults.
//!
//! ## Variables
//!
//! - `PORT` - HTTP port, all interfaces (default: `8080`, flag: `-port`)
//! - `WHOIS_ROOT_SERVER` - Server used to resolve TLDs (default: `whois.iana.org`)
//! - `WHOIS_PORT` - TCP port for outbound WHOIS queries (default: `43`)
//! - `WHOIS_TIMEOUT_SECS` - Deadline per WHOIS query (default: unset, no deadline)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`, flag: `--log-format`)
//!
//! ```bash
//! export WHOIS_TIMEOUT_SECS=10
//! whois-relay -port 9000
//! ```

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::cli::Cli;
use crate::domain::registry::{IANA_WHOIS_SERVER, WHOIS_PORT};

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port as given by the user; must parse as a `u16`.
    pub port: String,
    pub whois_root_server: String,
    pub whois_port: u16,
    /// Unset means queries wait for the server to close the connection,
    /// however long that takes.
    pub whois_timeout_secs: Option<u64>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: "8080".to_string(),
            whois_root_server: IANA_WHOIS_SERVER.to_string(),
            whois_port: WHOIS_PORT,
            whois_timeout_secs: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WHOIS_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = env::var("PORT").unwrap_or(defaults.port);
        let whois_root_server =
            env::var("WHOIS_ROOT_SERVER").unwrap_or(defaults.whois_root_server);

        let whois_port = env::var("WHOIS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.whois_port);

        let whois_timeout_secs = match env::var("WHOIS_TIMEOUT_SECS") {
            Ok(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse()
                    .with_context(|| format!("WHOIS_TIMEOUT_SECS must be a number, got '{v}'"))?,
            ),
            _ => None,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            port,
            whois_root_server,
            whois_port,
            whois_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Overrides values with flags given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(port) = &cli.port {
            self.port = port.clone();
        }
        if let Some(log_format) = &cli.log_format {
            self.log_format = log_format.clone();
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is not a valid TCP port number
    /// - `whois_root_server` is empty
    /// - `whois_port` is 0
    /// - `whois_timeout_secs` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        self.port.parse::<u16>().with_context(|| {
            format!(
                "port must be a number between 0 and 65535, got '{}'",
                self.port
            )
        })?;

        if self.whois_root_server.trim().is_empty() {
            anyhow::bail!("WHOIS_ROOT_SERVER must not be empty");
        }

        if self.whois_port == 0 {
            anyhow::bail!("WHOIS_PORT must be greater than 0");
        }

        if self.whois_timeout_secs == Some(0) {
            anyhow::bail!("WHOIS_TIMEOUT_SECS must be greater than 0 when set");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Address the HTTP listener binds: every interface on `port`.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn whois_timeout(&self) -> Option<Duration> {
        self.whois_timeout_secs.map(Duration::from_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!(
            "  WHOIS root server: {}:{}",
            self.whois_root_server,
            self.whois_port
        );
        match self.whois_timeout_secs {
            Some(secs) => tracing::info!("  WHOIS timeout: {}s", secs),
            None => tracing::info!("  WHOIS timeout: none"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads configuration from the environment, applies CLI overrides and
/// validates the result.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;
    config.apply_cli(cli);
    config.validate()?;
    Ok(config)
}
