//! One complete run: fetch the document, evaluate the query, write results

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{FetchOutcome, HttpTransport, Orchestrator, Transport};
use crate::output::ResultWriter;
use crate::query::Query;

/// What a finished run produced
#[derive(Debug)]
pub struct RunSummary {
    pub fetch: FetchOutcome,
    /// Number of query results written
    pub results: usize,
}

/// Runs against the network using the HTTP transport built from `config`
pub async fn run(config: &Config) -> Result<RunSummary> {
    // compile first so a bad query never touches the network
    let query = Query::compile(&config.query)?;
    let transport = HttpTransport::from_config(config)?;
    run_with(config, &query, transport).await
}

/// Runs with an explicit transport
///
/// An exhausted retry loop is not an error; the query then sees `null`.
pub async fn run_with<T: Transport>(config: &Config, query: &Query, transport: T) -> Result<RunSummary> {
    let orchestrator = Orchestrator::new(config, transport);
    let fetch = orchestrator.run().await?;
    debug!(
        attempts = fetch.attempts,
        delays = fetch.delays,
        source = ?fetch.source,
        "fetch finished"
    );

    let mut writer = ResultWriter::open(&config.output)?;
    let evaluated = query.run(fetch.document.as_ref(), |value| {
        debug!(?value, "query result");
        writer.write_value(&value)
    });
    writer.flush()?;

    Ok(RunSummary {
        fetch,
        results: evaluated?,
    })
}
