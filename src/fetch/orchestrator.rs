//! Retry loop over the configured targets
//!
//! Attempt `k` always goes to `targets[k % targets.len()]`. Each attempt
//! first checks the response cache for that target, then falls back to the
//! network. The first body that parses as a JSON object ends the whole loop.
//! A pause is only taken after the last target of a pass has failed.

use std::io::Write;

use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use super::{FetchedResponse, Transport};
use crate::cache::ResponseCache;
use crate::config::{Config, Target};
use crate::error::{Error, Result};

/// Where the document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    /// A fresh cache entry for the target at this index
    Cache(usize),
    /// A network response from the target at this index
    Network(usize),
}

/// What the retry loop ended with
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// The parsed document, `None` when every attempt failed
    pub document: Option<Value>,
    /// Which target produced the document
    pub source: Option<DocumentSource>,
    /// Loop iterations consumed, including the one that succeeded
    pub attempts: u32,
    /// Retry pauses taken
    pub delays: u32,
}

impl FetchOutcome {
    /// Whether the loop ran out of tries without a document
    pub fn is_exhausted(&self) -> bool {
        self.document.is_none()
    }
}

/// Drives fetch attempts across targets until one yields a document
pub struct Orchestrator<'a, T> {
    config: &'a Config,
    cache: ResponseCache,
    transport: T,
}

impl<'a, T: Transport> Orchestrator<'a, T> {
    /// Creates an orchestrator using the cache directory from `config`
    pub fn new(config: &'a Config, transport: T) -> Self {
        let cache = match &config.cache.dir {
            Some(dir) => ResponseCache::with_dir(dir.clone()),
            None => ResponseCache::new(),
        };
        Self::with_cache(config, cache, transport)
    }

    /// Creates an orchestrator with an explicit cache
    pub fn with_cache(config: &'a Config, cache: ResponseCache, transport: T) -> Self {
        Self {
            config,
            cache,
            transport,
        }
    }

    /// Runs the retry loop.
    ///
    /// Running out of tries is not an error: the outcome then has no document.
    ///
    /// # Returns
    /// * `Err(Error::PostData)` if the `@file` POST body cannot be read
    /// * `Err(Error::InvalidResponse)` / `Err(Error::CacheWrite)` in debug mode only
    pub async fn run(&self) -> Result<FetchOutcome> {
        let targets = &self.config.targets;
        let mut outcome = FetchOutcome::default();
        if targets.is_empty() {
            return Ok(outcome);
        }

        for attempt in 0..self.config.retry.max_tries {
            let index = attempt as usize % targets.len();
            let target = &targets[index];
            outcome.attempts += 1;

            if let Some(document) = self.try_cache(target) {
                outcome.document = Some(document);
                outcome.source = Some(DocumentSource::Cache(index));
                break;
            }

            if let Some(document) = self.try_network(target).await? {
                outcome.document = Some(document);
                outcome.source = Some(DocumentSource::Network(index));
                break;
            }

            if index == targets.len() - 1 {
                outcome.delays += 1;
                debug!(delay = ?self.config.retry.delay, "all targets failed, waiting before next pass");
                tokio::time::sleep(self.config.retry.delay).await;
            }
        }

        if outcome.is_exhausted() {
            debug!(attempts = outcome.attempts, "retries exhausted without a document");
        }
        Ok(outcome)
    }

    fn try_cache(&self, target: &Target) -> Option<Value> {
        if !self.config.cache.lookups_enabled() {
            return None;
        }

        let path = self.cache.cache_path(&target.key);
        let body = self.cache.lookup(&target.key, self.config.cache.max_age)?;
        debug!(file = %path.display(), "found fresh cache entry");

        match parse_document(&body) {
            Ok(document) => {
                debug!(file = %path.display(), "using cache");
                if self.config.include_headers {
                    eprintln!(
                        "Header skipped as cache used\nURL: {}\nFile: {}",
                        target.url,
                        path.display()
                    );
                }
                Some(document)
            }
            Err(e) => {
                debug!(file = %path.display(), error = %e, "ignoring unparsable cache entry");
                None
            }
        }
    }

    async fn try_network(&self, target: &Target) -> Result<Option<Value>> {
        let body = self.request_body()?;
        debug!("HTTP {} {}", self.config.request.method, target.url);

        let response = match self.transport.fetch(target, body).await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %target.url, error = %e, "attempt failed");
                return Ok(None);
            }
        };

        if self.config.include_headers {
            print_response_head(&response);
        }

        let document = match parse_document(&response.body) {
            Ok(document) => document,
            Err(reason) if self.config.debug => {
                return Err(Error::InvalidResponse {
                    url: target.raw.clone(),
                    reason,
                });
            }
            Err(reason) => {
                debug!(url = %target.url, error = %reason, "response is not a JSON object");
                return Ok(None);
            }
        };

        if self.config.cache.enabled {
            self.store(target, &response.body)?;
        }
        Ok(Some(document))
    }

    fn request_body(&self) -> Result<Option<Vec<u8>>> {
        if self.config.request.method != Method::POST {
            return Ok(None);
        }
        match &self.config.request.data {
            Some(data) => data.read().map(Some),
            None => Ok(Some(Vec::new())),
        }
    }

    fn store(&self, target: &Target, body: &[u8]) -> Result<()> {
        let path = self.cache.cache_path(&target.key);
        debug!(file = %path.display(), "writing out cache file");
        match self.cache.store(&target.key, body) {
            Ok(()) => Ok(()),
            Err(source) if self.config.debug => Err(Error::CacheWrite { path, source }),
            Err(e) => {
                debug!(file = %path.display(), error = %e, "cache write failed");
                Ok(())
            }
        }
    }
}

/// Parses a response body into a document
///
/// Only a JSON object is a document. A literal `null` decodes to an empty
/// object; arrays, scalars and invalid JSON are rejected.
fn parse_document(body: &[u8]) -> std::result::Result<Value, String> {
    match serde_json::from_slice::<Value>(body).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(Value::Object(map)),
        Value::Null => Ok(Value::Object(Map::new())),
        other => Err(format!("expected a JSON object, found {}", json_type(&other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn print_response_head(response: &FetchedResponse) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{}", response.status_line);
    for (name, value) in &response.headers {
        let _ = writeln!(out, "{}: {}", name, value);
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::fetch::FetchError;
    use async_trait::async_trait;
    use clap::Parser;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Replays canned results in order and records which URLs were hit
    #[derive(Default)]
    struct ScriptedTransport {
        script: Mutex<VecDeque<std::result::Result<&'static str, FetchError>>>,
        calls: Mutex<Vec<String>>,
        bodies: Mutex<Vec<Option<Vec<u8>>>>,
    }

    impl ScriptedTransport {
        fn new(script: Vec<std::result::Result<&'static str, FetchError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self::default()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn fetch(
            &self,
            target: &Target,
            body: Option<Vec<u8>>,
        ) -> std::result::Result<FetchedResponse, FetchError> {
            self.calls.lock().unwrap().push(target.raw.clone());
            self.bodies.lock().unwrap().push(body);
            let next = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Request("connection refused".to_string())));
            next.map(|body| FetchedResponse {
                status_line: "HTTP/1.1 200 OK".to_string(),
                headers: Vec::new(),
                body: body.as_bytes().to_vec(),
            })
        }
    }

    fn config(args: &[&str], cache_dir: &TempDir) -> Config {
        config_in(args, cache_dir.path())
    }

    fn config_in(args: &[&str], cache_dir: &std::path::Path) -> Config {
        let dir = cache_dir.to_string_lossy().to_string();
        let mut full = vec!["jqurl", "--retry-delay", "0s", "--cachedir", dir.as_str()];
        full.extend_from_slice(args);
        Config::from_cli_as_user(&Cli::parse_from(full), "1000").unwrap()
    }

    #[tokio::test]
    async fn test_first_success_stops_the_loop() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--max-tries", "3", ".x", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok(r#"{"x":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"x": 1})));
        assert_eq!(outcome.source, Some(DocumentSource::Network(0)));
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.delays, 0);
        assert_eq!(orchestrator.transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_timeout_then_success_single_target() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--max-tries", "3", ".x", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![
            Err(FetchError::Timeout(Duration::from_secs(15))),
            Ok(r#"{"x":1}"#),
        ]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"x": 1})));
        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.delays, 1, "single target pauses after every failure");
    }

    #[tokio::test]
    async fn test_round_robin_target_selection() {
        let dir = TempDir::new().unwrap();
        let config = config(
            &["--max-tries", "7", ".", "https://a.example/", "https://b.example/", "https://c.example/"],
            &dir,
        );
        let orchestrator = Orchestrator::new(&config, ScriptedTransport::failing());

        let outcome = orchestrator.run().await.unwrap();

        let expected: Vec<String> = (0..7)
            .map(|k| config.targets[k % 3].raw.clone())
            .collect();
        assert_eq!(orchestrator.transport.calls(), expected);
        assert_eq!(outcome.attempts, 7);
    }

    #[tokio::test]
    async fn test_delay_count_is_tries_divided_by_targets() {
        for (tries, targets) in [(3u32, 1usize), (7, 3), (6, 3), (2, 3), (10, 4)] {
            let dir = TempDir::new().unwrap();
            let tries_arg = tries.to_string();
            let urls: Vec<String> = (0..targets).map(|i| format!("https://t{}.example/", i)).collect();
            let mut args = vec!["--max-tries", tries_arg.as_str(), "."];
            args.extend(urls.iter().map(String::as_str));
            let config = config(&args, &dir);

            let orchestrator = Orchestrator::new(&config, ScriptedTransport::failing());
            let outcome = orchestrator.run().await.unwrap();

            assert!(outcome.is_exhausted());
            assert_eq!(outcome.attempts, tries);
            assert_eq!(outcome.delays, tries / targets as u32, "tries={} targets={}", tries, targets);
        }
    }

    #[tokio::test]
    async fn test_non_json_bodies_exhaust_without_error() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--max-tries", "3", ".anything", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("<html>"), Ok("<html>"), Ok("<html>")]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert!(outcome.document.is_none());
        assert!(outcome.source.is_none());
        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.delays, 3);
    }

    #[tokio::test]
    async fn test_non_json_body_is_fatal_in_debug_mode() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--debug", "--max-tries", "3", ".", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("<html>"), Ok(r#"{"x":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let err = orchestrator.run().await.unwrap_err();

        assert!(matches!(err, Error::InvalidResponse { .. }));
        assert_eq!(orchestrator.transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_array_body_is_retried() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--max-tries", "3", ".x", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("[1,2]"), Ok(r#"{"x":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"x": 1})));
        assert_eq!(outcome.source, Some(DocumentSource::Network(0)));
        assert_eq!(outcome.attempts, 2);
    }

    #[tokio::test]
    async fn test_scalar_bodies_exhaust_without_error() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--max-tries", "3", ".", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("42"), Ok(r#""text""#), Ok("true")]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert!(outcome.is_exhausted());
        assert_eq!(outcome.attempts, 3);
    }

    #[tokio::test]
    async fn test_array_body_is_fatal_in_debug_mode() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--debug", "--max-tries", "3", ".", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("[1,2]"), Ok(r#"{"x":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let err = orchestrator.run().await.unwrap_err();

        assert!(matches!(err, Error::InvalidResponse { .. }));
        assert_eq!(orchestrator.transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_null_body_is_an_empty_document() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--max-tries", "3", ".", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("null")]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({})));
        assert_eq!(outcome.attempts, 1);
    }

    #[tokio::test]
    async fn test_fresh_cache_entry_skips_network() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-C", "--max-tries", "3", ".y", "https://example.com/a.json"], &dir);
        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        cache.store(&config.targets[0].key, br#"{"y":2}"#).unwrap();
        let orchestrator = Orchestrator::new(&config, ScriptedTransport::failing());

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"y": 2})));
        assert_eq!(outcome.source, Some(DocumentSource::Cache(0)));
        assert!(orchestrator.transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cache_hit_on_later_target_short_circuits() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-C", ".", "https://a.example/", "https://b.example/"], &dir);
        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        cache.store(&config.targets[1].key, br#"{"from":"b"}"#).unwrap();
        let orchestrator = Orchestrator::with_cache(&config, cache, ScriptedTransport::failing());

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.source, Some(DocumentSource::Cache(1)));
        assert_eq!(orchestrator.transport.calls(), vec!["https://a.example/".to_string()]);
        assert_eq!(outcome.attempts, 2);
    }

    #[tokio::test]
    async fn test_cache_ignored_when_disabled() {
        let dir = TempDir::new().unwrap();
        let config = config(&["--max-tries", "1", ".", "https://example.com/a.json"], &dir);
        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        cache.store(&config.targets[0].key, br#"{"y":2}"#).unwrap();
        let transport = ScriptedTransport::new(vec![Ok(r#"{"y":3}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"y": 3})));
        // Caching disabled: the entry is neither read nor rewritten
        assert_eq!(cache.read(&config.targets[0].key).unwrap().body, br#"{"y":2}"#);
    }

    #[tokio::test]
    async fn test_flush_bypasses_lookup_but_still_stores() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-C", "--flush", ".y", "https://example.com/a.json"], &dir);
        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        cache.store(&config.targets[0].key, br#"{"y":2}"#).unwrap();
        let transport = ScriptedTransport::new(vec![Ok(r#"{"y":5}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(orchestrator.transport.calls().len(), 1);
        assert_eq!(outcome.document, Some(serde_json::json!({"y": 5})));
        assert_eq!(cache.read(&config.targets[0].key).unwrap().body, br#"{"y":5}"#);
    }

    #[tokio::test]
    async fn test_expired_cache_entry_falls_through_to_network() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-C", "--max-age", "0s", ".", "https://example.com/a.json"], &dir);
        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        cache.store(&config.targets[0].key, br#"{"old":true}"#).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        let transport = ScriptedTransport::new(vec![Ok(r#"{"old":false}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"old": false})));
        assert_eq!(outcome.source, Some(DocumentSource::Network(0)));
    }

    #[tokio::test]
    async fn test_unparsable_cache_entry_falls_through_to_network() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-C", ".", "https://example.com/a.json"], &dir);
        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        cache.store(&config.targets[0].key, b"garbage").unwrap();
        let transport = ScriptedTransport::new(vec![Ok(r#"{"ok":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.source, Some(DocumentSource::Network(0)));
    }

    #[tokio::test]
    async fn test_cached_array_entry_falls_through_to_network() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-C", ".", "https://example.com/a.json"], &dir);
        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        cache.store(&config.targets[0].key, b"[1,2,3]").unwrap();
        let transport = ScriptedTransport::new(vec![Ok(r#"{"ok":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"ok": 1})));
        assert_eq!(outcome.source, Some(DocumentSource::Network(0)));
    }

    #[test]
    fn test_parse_document_accepts_objects_only() {
        assert_eq!(parse_document(br#"{"a":1}"#).unwrap(), serde_json::json!({"a": 1}));
        assert_eq!(parse_document(b"null").unwrap(), serde_json::json!({}));
        assert!(parse_document(b"[1]").unwrap_err().contains("an array"));
        assert!(parse_document(b"3").unwrap_err().contains("a number"));
        assert!(parse_document(b"<html>").is_err());
    }

    #[tokio::test]
    async fn test_successful_fetch_is_cached_when_enabled() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-C", ".", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok(r#"{"x":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        orchestrator.run().await.unwrap();

        let cache = ResponseCache::with_dir(dir.path().to_path_buf());
        assert_eq!(cache.read(&config.targets[0].key).unwrap().body, br#"{"x":1}"#);
    }

    #[tokio::test]
    async fn test_cache_write_failure_is_ignored_outside_debug() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let config = config_in(&["-C", ".", "https://example.com/a.json"], &blocker);
        let transport = ScriptedTransport::new(vec![Ok(r#"{"x":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome.document, Some(serde_json::json!({"x": 1})));
    }

    #[tokio::test]
    async fn test_cache_write_failure_is_fatal_in_debug_mode() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let config = config_in(&["--debug", "-C", ".", "https://example.com/a.json"], &blocker);
        let transport = ScriptedTransport::new(vec![Ok(r#"{"x":1}"#)]);
        let orchestrator = Orchestrator::new(&config, transport);

        let err = orchestrator.run().await.unwrap_err();

        assert!(matches!(err, Error::CacheWrite { .. }));
    }

    #[tokio::test]
    async fn test_post_body_from_file() {
        let dir = TempDir::new().unwrap();
        let body_path = dir.path().join("body.json");
        std::fs::write(&body_path, br#"{"q":1}"#).unwrap();
        let data_arg = format!("@{}", body_path.display());
        let config = config(&["-X", "POST", "-d", &data_arg, ".", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("{}")]);
        let orchestrator = Orchestrator::new(&config, transport);

        orchestrator.run().await.unwrap();

        let bodies = orchestrator.transport.bodies.lock().unwrap().clone();
        assert_eq!(bodies, vec![Some(br#"{"q":1}"#.to_vec())]);
    }

    #[tokio::test]
    async fn test_get_sends_no_body_even_with_data() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-d", "a=1", ".", "https://example.com/a.json"], &dir);
        let transport = ScriptedTransport::new(vec![Ok("{}")]);
        let orchestrator = Orchestrator::new(&config, transport);

        orchestrator.run().await.unwrap();

        let bodies = orchestrator.transport.bodies.lock().unwrap().clone();
        assert_eq!(bodies, vec![None]);
    }

    #[tokio::test]
    async fn test_unreadable_post_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = config(&["-X", "POST", "-d", "@/no/such/body.json", ".", "https://example.com/a.json"], &dir);
        let orchestrator = Orchestrator::new(&config, ScriptedTransport::failing());

        let err = orchestrator.run().await.unwrap_err();

        assert!(matches!(err, Error::PostData { .. }));
        assert!(orchestrator.transport.calls().is_empty());
    }
}
