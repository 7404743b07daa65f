//! Command-line interface parsing for jqurl
//!
//! This module handles parsing of CLI arguments using clap. Values that need
//! more than a type conversion (headers, durations) get their own parsers so
//! bad input is rejected before any configuration is built.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A header argument has no `:` separator
    #[error("Malformatted header: '{0}'")]
    MalformedHeader(String),

    /// A duration argument is not understood
    #[error("Invalid duration '{0}': {1}")]
    InvalidDuration(String, String),
}

/// jqurl - URL and JSON parser tool
#[derive(Parser, Debug)]
#[command(name = "jqurl")]
#[command(about = "Fetch JSON from URLs (with retries and caching) and filter it with a jq query")]
#[command(version)]
pub struct Cli {
    /// jq query applied to the fetched document
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Candidate URLs, tried in round-robin order
    #[arg(value_name = "URL", required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Pretty print JSON with indents
    #[arg(short = 'P', long)]
    pub pretty: bool,

    /// Raw output, no quotes for strings
    #[arg(short = 'r', long = "raw-output")]
    pub raw_output: bool,

    /// Include response headers in output (written to stderr)
    #[arg(short = 'i', long)]
    pub include: bool,

    /// Force redownload, when using cache
    #[arg(long)]
    pub flush: bool,

    /// Use local cache to speed up static queries
    #[arg(short = 'C', long)]
    pub cache: bool,

    /// Debug / verbose output
    #[arg(long)]
    pub debug: bool,

    /// Path for cache
    #[arg(long, value_name = "DIR")]
    pub cachedir: Option<PathBuf>,

    /// Write output to <FILE> instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Max age for cache
    #[arg(long = "max-age", value_name = "DURATION", default_value = "4h", value_parser = parse_duration_arg)]
    pub max_age: Duration,

    /// Data to use in POST (use @filename to read from file)
    #[arg(short = 'd', long, value_name = "STRING")]
    pub data: Option<String>,

    /// Custom header to pass to server
    ///
    /// Repeatable. Example: -H 'Authorization: Bearer abc'
    #[arg(short = 'H', long = "header", value_name = "'HEADER: VALUE'", value_parser = parse_header_arg)]
    pub headers: Vec<(String, String)>,

    /// Follow redirects
    #[arg(short = 'L', long)]
    pub location: bool,

    /// Delay between retries
    #[arg(long = "retry-delay", value_name = "DURATION", default_value = "7s", value_parser = parse_duration_arg)]
    pub retry_delay: Duration,

    /// Timeout per request
    #[arg(short = 'm', long = "max-time", value_name = "DURATION", default_value = "15s", value_parser = parse_duration_arg)]
    pub max_time: Duration,

    /// Maximum number of tries
    #[arg(long = "max-tries", value_name = "TRIES", default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tries: u32,

    /// Ignore certificate validation checks
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Method to use for HTTP request (ie: POST/GET)
    #[arg(short = 'X', long = "request", value_name = "METHOD", default_value = "GET")]
    pub method: String,

    /// Use certificate authorities, PEM encoded
    #[arg(long, value_name = "FILE")]
    pub cacert: Option<PathBuf>,

    /// Use client cert in request, PEM encoded
    #[arg(short = 'E', long, value_name = "FILE")]
    pub cert: Option<PathBuf>,

    /// Key file for client cert, PEM encoded
    #[arg(long, value_name = "FILE")]
    pub key: Option<PathBuf>,

    /// Switch to the network of a container
    #[arg(long, value_name = "CONTAINER_ID")]
    pub docker: Option<String>,
}

/// Parses a `KEY: VALUE` header argument.
///
/// The key is trimmed and lower-cased; exactly one leading space is removed
/// from the value.
///
/// # Returns
/// * `Ok((key, value))` for well-formed headers
/// * `Err(CliError::MalformedHeader)` if there is no `:`
pub fn parse_header_arg(s: &str) -> Result<(String, String), CliError> {
    let (key, value) = s
        .split_once(':')
        .ok_or_else(|| CliError::MalformedHeader(s.to_string()))?;
    let value = value.strip_prefix(' ').unwrap_or(value);
    Ok((key.trim().to_lowercase(), value.to_string()))
}

/// Parses a human readable duration such as `4h`, `7s` or `1m30s`.
pub fn parse_duration_arg(s: &str) -> Result<Duration, CliError> {
    humantime::parse_duration(s).map_err(|e| CliError::InvalidDuration(s.to_string(), e.to_string()))
}
