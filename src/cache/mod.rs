//! Cache module for storing fetched responses on disk
//!
//! This module provides a response cache keyed by a fingerprint of the target
//! URL and the invoking user. Entries are raw response bytes and their age is
//! the file's modification time.

mod manager;

pub use manager::{cache_key, current_user_id, CacheKey, CachedResponse, ResponseCache};
