//! jq query compilation and evaluation
//!
//! Queries run on the jaq engine with its standard library. A query is
//! compiled once, before any fetching, and can then be run any number of times
//! against a borrowed document.

use jaq_core::load::{Arena, File, Loader};
use jaq_core::{Compiler, Ctx, Filter, Native, RcIter};
use jaq_json::Val;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A compiled jq query
pub struct Query {
    source: String,
    filter: Filter<Native<Val>>,
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query").field("source", &self.source).finish()
    }
}

impl Query {
    /// Parses and compiles `source`
    ///
    /// # Returns
    /// * `Err(Error::QueryCompile)` on syntax errors or undefined names
    pub fn compile(source: &str) -> Result<Self> {
        let compile_error = |reason: String| Error::QueryCompile {
            query: source.to_string(),
            reason,
        };

        let program = File {
            code: source,
            path: (),
        };
        let loader = Loader::new(jaq_std::defs().chain(jaq_json::defs()));
        let arena = Arena::default();

        let modules = loader.load(&arena, program).map_err(|errs| {
            compile_error(
                errs.into_iter()
                    .map(|(_, e)| format!("{:?}", e))
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        let filter = Compiler::default()
            .with_funs(jaq_std::funs().chain(jaq_json::funs()))
            .compile(modules)
            .map_err(|errs| {
                compile_error(
                    errs.into_iter()
                        .flat_map(|(_, undefined)| undefined)
                        .map(|(name, kind)| format!("undefined {:?} {}", kind, name))
                        .collect::<Vec<_>>()
                        .join("; "),
                )
            })?;

        Ok(Self {
            source: source.to_string(),
            filter,
        })
    }

    /// Runs the query against `document` (an empty object when there is none)
    ///
    /// Results are produced lazily and handed to `emit` one at a time. The
    /// first error value stops evaluation; results emitted before it stay
    /// emitted.
    ///
    /// # Returns
    /// * `Ok(n)` with the number of results emitted
    /// * `Err(Error::QueryRun)` if the engine yields an error value
    /// * any error returned by `emit`
    pub fn run<F>(&self, document: Option<&Value>, mut emit: F) -> Result<usize>
    where
        F: FnMut(Value) -> Result<()>,
    {
        // no document behaves like an empty map: `.anything` is `null`
        let input = document
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        let inputs = RcIter::new(core::iter::empty());
        let results = self.filter.run((Ctx::new([], &inputs), Val::from(input)));

        let mut emitted = 0;
        for result in results {
            let value = result.map_err(|e| Error::QueryRun {
                query: self.source.clone(),
                reason: e.to_string(),
            })?;
            emit(Value::from(value))?;
            emitted += 1;
        }
        Ok(emitted)
    }
}
