pub mod config;
pub mod endpoints;
pub mod error;
pub mod export;
pub mod fiscal;
pub mod logging;
pub mod record;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ExtractConfig;
use crate::endpoints::{output_filename, ENDPOINTS};
use crate::error::AppError;
use crate::export::save_to_csv;
use crate::fiscal::{fetch_all, FiscalClient};

// ── Run summary ───────────────────────────────────────────────────────────────

/// What happened to one endpoint during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointOutcome {
    pub endpoint: String,
    pub records: usize,
    /// `None` when the endpoint produced no records and no file was written.
    pub written: Option<PathBuf>,
}

/// Per-endpoint outcomes of a run, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<EndpointOutcome>,
}

impl RunSummary {
    /// Number of CSV files written.
    pub fn files_written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.written.is_some()).count()
    }

    /// Total records fetched across all endpoints.
    pub fn total_records(&self) -> usize {
        self.outcomes.iter().map(|o| o.records).sum()
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Extracts every endpoint in [`ENDPOINTS`] using `config`.
pub async fn run(config: &ExtractConfig) -> Result<RunSummary, AppError> {
    let client = FiscalClient::new(config)?;
    extract_endpoints(&client, ENDPOINTS, &config.output_dir).await
}

/// Fetches and saves each endpoint in order, one at a time.
///
/// Status failures and empty datasets are handled per endpoint and do not stop
/// the run. Any returned error (network, decode, filesystem) aborts the
/// remaining endpoints.
pub async fn extract_endpoints(
    client: &FiscalClient,
    endpoints: &[&str],
    output_dir: &Path,
) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    for endpoint in endpoints {
        let records = fetch_all(client, endpoint).await?;
        let filename = output_filename(endpoint);
        let written = save_to_csv(&records, output_dir, &filename)?;

        summary.outcomes.push(EndpointOutcome {
            endpoint: endpoint.to_string(),
            records: records.len(),
            written,
        });
    }

    info!(
        "Run complete: {} endpoints, {} files written, {} records",
        summary.outcomes.len(),
        summary.files_written(),
        summary.total_records()
    );

    Ok(summary)
}
