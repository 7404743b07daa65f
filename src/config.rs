//! Runtime configuration for jqurl
//!
//! `Config` is built once from the parsed command line and then only ever
//! borrowed. Everything the fetch loop, the cache and the output need is in
//! here, so there is no process-wide mutable state.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Method;
use url::Url;

use crate::cache::{cache_key, current_user_id, CacheKey};
use crate::cli::Cli;
use crate::error::{Error, Result};

/// Header sent with every request unless overridden
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// One candidate URL plus its cache key
#[derive(Debug, Clone)]
pub struct Target {
    /// The URL string exactly as given on the command line
    pub raw: String,
    /// Parsed form used for requests
    pub url: Url,
    /// Fingerprint of `raw` and the invoking user
    pub key: CacheKey,
}

impl Target {
    /// Parses a target URL and derives its cache key for `user`
    pub fn parse(raw: &str, user: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|source| Error::MalformedUrl {
            url: raw.to_string(),
            source,
        })?;
        Ok(Self {
            raw: raw.to_string(),
            url,
            key: cache_key(raw, user),
        })
    }
}

/// Body for POST requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostData {
    /// Sent as given
    Literal(String),
    /// Read from a file (argument was `@path`)
    File(PathBuf),
}

impl PostData {
    /// Interprets a `--data` argument; a leading `@` names a file
    pub fn parse(arg: &str) -> Self {
        match arg.strip_prefix('@') {
            Some(path) => PostData::File(PathBuf::from(path)),
            None => PostData::Literal(arg.to_string()),
        }
    }

    /// Produces the request body bytes
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            PostData::Literal(s) => Ok(s.clone().into_bytes()),
            PostData::File(path) => fs::read(path).map_err(|source| Error::PostData {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Request headers, keyed by lower-cased name
pub type Headers = BTreeMap<String, String>;

/// How each request is built
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Headers,
    pub data: Option<PostData>,
    pub follow_redirects: bool,
    /// Bound on a single request, not on the whole retry loop
    pub timeout: Duration,
}

/// TLS material and verification settings
#[derive(Debug, Clone, Default)]
pub struct TlsOptions {
    pub insecure: bool,
    pub ca_cert: Option<PathBuf>,
    /// Client certificate and key paths (may be the same file)
    pub client_cert: Option<(PathBuf, PathBuf)>,
}

/// Cache behaviour
#[derive(Debug, Clone)]
pub struct CachePolicy {
    pub enabled: bool,
    /// Skip lookups but still store fresh responses
    pub force_refresh: bool,
    pub dir: Option<PathBuf>,
    pub max_age: Duration,
}

impl CachePolicy {
    /// Whether lookups should be attempted at all
    pub fn lookups_enabled(&self) -> bool {
        self.enabled && !self.force_refresh
    }
}

/// Retry loop bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_tries: u32,
    /// Pause after each full pass over the targets
    pub delay: Duration,
}

/// Result rendering
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub pretty: bool,
    pub raw: bool,
    pub file: Option<PathBuf>,
}

/// Everything a run needs, fixed for the process lifetime
#[derive(Debug, Clone)]
pub struct Config {
    pub query: String,
    pub targets: Vec<Target>,
    pub request: RequestOptions,
    pub tls: TlsOptions,
    pub cache: CachePolicy,
    pub retry: RetryPolicy,
    pub output: OutputOptions,
    pub include_headers: bool,
    pub debug: bool,
    pub docker: Option<String>,
}

impl Config {
    /// Creates a Config from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(Config)` with every target parsed and keyed
    /// * `Err(Error::MalformedUrl)` for the first URL that does not parse
    /// * `Err(Error::InvalidMethod)` if the method is not a valid HTTP token
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::from_cli_as_user(cli, &current_user_id())
    }

    /// Same as [`Config::from_cli`] with an explicit user identity
    pub fn from_cli_as_user(cli: &Cli, user: &str) -> Result<Self> {
        let targets = cli
            .urls
            .iter()
            .map(|raw| Target::parse(raw, user))
            .collect::<Result<Vec<_>>>()?;

        let method = Method::from_bytes(cli.method.to_uppercase().as_bytes())
            .map_err(|_| Error::InvalidMethod(cli.method.clone()))?;

        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), DEFAULT_CONTENT_TYPE.to_string());
        for (key, value) in &cli.headers {
            headers.insert(key.clone(), value.clone());
        }

        // cert and key may live in the same PEM file
        let client_cert = cli.cert.as_ref().map(|cert| {
            let key = cli.key.clone().unwrap_or_else(|| cert.clone());
            (cert.clone(), key)
        });

        Ok(Self {
            query: cli.query.clone(),
            targets,
            request: RequestOptions {
                method,
                headers,
                data: cli.data.as_deref().map(PostData::parse),
                follow_redirects: cli.location,
                timeout: cli.max_time,
            },
            tls: TlsOptions {
                insecure: cli.insecure,
                ca_cert: cli.cacert.clone(),
                client_cert,
            },
            cache: CachePolicy {
                enabled: cli.cache,
                force_refresh: cli.flush,
                dir: cli.cachedir.clone(),
                max_age: cli.max_age,
            },
            retry: RetryPolicy {
                max_tries: cli.max_tries,
                delay: cli.retry_delay,
            },
            output: OutputOptions {
                pretty: cli.pretty,
                raw: cli.raw_output,
                file: cli.output.clone(),
            },
            include_headers: cli.include,
            debug: cli.debug,
            docker: cli.docker.clone(),
        })
    }
}
