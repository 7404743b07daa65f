//! jqurl library
//!
//! Exposes the fetch loop, cache, query and output modules used by the
//! `jqurl` binary and its integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod netns;
pub mod output;
pub mod query;

pub use error::{Error, Result};
