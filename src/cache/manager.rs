//! Response cache for persisting fetched bodies to disk
//!
//! Provides a `ResponseCache` that stores raw response bytes, one file per
//! target, and judges freshness from the file's modification time.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Prefix for every cache file name
const CACHE_FILE_PREFIX: &str = "jqurl_";

/// Fingerprint of a fetch target: the raw URL string plus the invoking user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Hex form of the fingerprint
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the cache key for a URL as seen by a given user.
///
/// Deterministic across runs: the same `(url, user)` pair always maps to the
/// same key.
pub fn cache_key(url: &str, user: &str) -> CacheKey {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(user.as_bytes());
    CacheKey(hex::encode(hasher.finalize()))
}

/// Identifier of the user running the process, mixed into every cache key
#[cfg(unix)]
pub fn current_user_id() -> String {
    nix::unistd::getuid().as_raw().to_string()
}

/// Identifier of the user running the process, mixed into every cache key
#[cfg(not(unix))]
pub fn current_user_id() -> String {
    std::env::var("USERNAME").unwrap_or_default()
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedResponse {
    /// The raw response body
    pub body: Vec<u8>,
    /// When the entry was last written
    pub cached_at: DateTime<Utc>,
}

impl CachedResponse {
    /// Whether the entry is still within `max_age` at time `now`
    pub fn is_fresh_at(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        match self.cached_at.checked_add_signed(max_age) {
            Some(expires_at) => now <= expires_at,
            // max_age beyond the representable range never expires
            None => true,
        }
    }
}

/// Manages reading and writing cached responses on disk
///
/// Entries are plain files holding the response bytes with no envelope. A
/// file is never deleted here; stale entries are simply ignored by `lookup`
/// and overwritten by the next successful `store`.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl ResponseCache {
    /// Creates a ResponseCache in the platform cache directory
    ///
    /// Uses `~/.cache/jqurl/` on Linux, or equivalent XDG path on other platforms,
    /// and the system temp directory when no home directory can be determined.
    pub fn new() -> Self {
        Self::with_dir(default_cache_dir())
    }

    /// Creates a ResponseCache with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path of the cache file for the given key
    pub fn cache_path(&self, key: &CacheKey) -> PathBuf {
        self.cache_dir
            .join(format!("{}{}", CACHE_FILE_PREFIX, key.as_str()))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Reads an entry regardless of its age
    ///
    /// Returns `None` if the file doesn't exist or cannot be read.
    pub fn read(&self, key: &CacheKey) -> Option<CachedResponse> {
        let path = self.cache_path(key);
        let modified = fs::metadata(&path).ok()?.modified().ok()?;
        let body = fs::read(&path).ok()?;

        Some(CachedResponse {
            body,
            cached_at: DateTime::<Utc>::from(modified),
        })
    }

    /// Returns the cached bytes if the entry exists and is no older than `max_age`
    ///
    /// Missing and expired entries are both reported as `None`.
    pub fn lookup(&self, key: &CacheKey, max_age: std::time::Duration) -> Option<Vec<u8>> {
        let max_age = Duration::from_std(max_age).unwrap_or(Duration::MAX);
        let cached = self.read(key)?;
        if cached.is_fresh_at(max_age, Utc::now()) {
            Some(cached.body)
        } else {
            None
        }
    }

    /// Writes `body` under `key`, overwriting any previous entry
    ///
    /// The entry is stamped with the current time by the filesystem.
    pub fn store(&self, key: &CacheKey, body: &[u8]) -> std::io::Result<()> {
        self.ensure_dir()?;
        fs::write(self.cache_path(key), body)
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

fn default_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "jqurl")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
}
