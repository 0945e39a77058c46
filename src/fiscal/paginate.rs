//! Page-number pagination over a single Fiscal Data endpoint.
//!
//! Pages are requested in order starting at 1. The loop stops on the first of:
//!
//! - a non-success HTTP status (records gathered so far are kept)
//! - a page with an empty `data` list
//! - the page number reaching `meta.total-pages`, read once from the first
//!   page that carries data

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::AppError;
use crate::fiscal::client::FiscalClient;
use crate::record::{Dataset, Record};

// ─────────────────────────────────────────────────────────────────────────────
// Internal Wire Types
// ─────────────────────────────────────────────────────────────────────────────

/// One page of an endpoint response. Only the fields the loop reads are kept;
/// `links` is ignored.
///
/// `meta` stays untyped: it is only interpreted on the first page with data,
/// so a malformed value on any later page never fails the decode.
#[derive(Debug, Deserialize)]
struct WirePage {
    #[serde(default)]
    data: Option<Vec<Record>>,
    #[serde(default)]
    meta: Option<Value>,
}

impl WirePage {
    /// Reads `meta.total-pages`, defaulting to 1 when `meta` or the key is
    /// absent. Any JSON number is accepted as-is, including zero, negatives
    /// and floats.
    fn total_pages(&self) -> Result<f64, String> {
        let meta = match &self.meta {
            None | Some(Value::Null) => return Ok(1.0),
            Some(Value::Object(meta)) => meta,
            Some(other) => return Err(format!("meta is not an object: {}", other)),
        };

        match meta.get("total-pages") {
            None => Ok(1.0),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| format!("total-pages out of range: {}", n)),
            Some(other) => Err(format!("total-pages is not a number: {}", other)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Fetches every page of `endpoint` and returns the records in page order.
///
/// A non-success status ends the fetch early without an error; the caller
/// gets whatever was accumulated before the failing page.
///
/// # Errors
///
/// - `AppError::ConnectionFailed` - no response was received
/// - `AppError::Decode` - a success response did not hold the page envelope
/// - `AppError::InvalidUrl` - the endpoint does not form a valid URL
pub async fn fetch_all(client: &FiscalClient, endpoint: &str) -> Result<Dataset, AppError> {
    info!("[FETCH] Fetching data from {}", endpoint);

    let mut records: Dataset = Vec::new();
    let mut page_number: u64 = 1;
    let mut total_pages: Option<f64> = None;

    loop {
        let url = client.page_url(endpoint, page_number)?;
        let response = client.get(url.clone()).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "[FETCH] Failed to fetch {} on page {}: status {}",
                url,
                page_number,
                status.as_u16()
            );
            break;
        }

        let mut page: WirePage = response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("{} page {}: {}", endpoint, page_number, e)))?;

        let data = page.data.take().unwrap_or_default();
        if data.is_empty() {
            info!("[FETCH] No more data available for {}", endpoint);
            break;
        }

        records.extend(data);

        let total = match total_pages {
            Some(total) => total,
            None => {
                let total = page.total_pages().map_err(|e| {
                    AppError::Decode(format!("{} page {}: {}", endpoint, page_number, e))
                })?;
                info!("[FETCH] Total pages to fetch: {}", total);
                *total_pages.insert(total)
            }
        };

        if page_number as f64 >= total {
            info!("[FETCH] All pages have been fetched for {}", endpoint);
            break;
        }

        page_number += 1;
    }

    info!(
        "[FETCH] {} complete: {} records, {} pages requested",
        endpoint,
        records.len(),
        page_number
    );

    Ok(records)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
