//! Command-line interface.
//!
//! # Usage
//!
//! ```bash
//! whois-relay -port 9000
//! whois-relay --port=9000 --log-format json
//! ```
//!
//! Long flags are accepted with a single dash (`-port`) as well as the usual
//! double dash; see [`normalize_args`].

use clap::Parser;
use std::ffi::OsString;

/// HTTP relay for WHOIS lookups.
#[derive(Debug, Default, Parser)]
#[command(name = "whois-relay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to run the HTTP server on [default: 8080, env: PORT]
    #[arg(long, value_name = "PORT")]
    pub port: Option<String>,

    /// Log output format: text or json [default: text, env: LOG_FORMAT]
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,
}

/// Flags that may be spelled with a single leading dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["port", "log-format"];

impl Cli {
    /// Parses process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-port` / `-port=N` style arguments to `--port` / `--port=N`.
///
/// Anything else, including non UTF-8 arguments, passes through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|text| {
                let rest = text.strip_prefix('-')?;
                (!rest.starts_with('-') && is_single_dash_long_flag(rest))
                    .then(|| format!("-{text}"))
            });

            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long_flag(rest: &str) -> bool {
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG_FLAGS.contains(&name)
}
