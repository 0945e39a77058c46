//! HTTP client for the Fiscal Data API with request logging.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{info, warn};
use url::Url;

use crate::config::ExtractConfig;
use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// URL Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Formats a URL for logging: path plus decoded query, without scheme or host.
///
/// Example: `/services/api/fiscal_service/v2/accounting/od/tic?page[number]=2&page[size]=100&format=json`
pub fn url_for_logs(url: &Url) -> String {
    let path = url.path();

    let pairs: Vec<String> = url
        .query_pairs()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();

    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, pairs.join("&"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FiscalClient
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client bound to one API base URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct FiscalClient {
    /// The underlying HTTP client.
    http: reqwest::Client,
    /// Prefix endpoint paths are appended to.
    base_url: String,
    /// Value sent as `page[size]`.
    page_size: u32,
}

impl FiscalClient {
    /// Creates a client from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidUrl` if the base URL does not parse, or
    /// `AppError::Internal` if the HTTP client fails to initialize.
    pub fn new(config: &ExtractConfig) -> Result<Self, AppError> {
        Url::parse(&config.base_url)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let http = build_http_client(&config.user_agent)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            page_size: config.page_size,
        })
    }

    /// Builds the full URL for an endpoint path without any query string.
    ///
    /// Endpoint paths are appended verbatim; `Url::join` would replace the
    /// last segment of the base path instead.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, AppError> {
        let raw = format!("{}{}", self.base_url, endpoint);
        Url::parse(&raw).map_err(|e| AppError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Builds the URL for one page of an endpoint.
    pub fn page_url(&self, endpoint: &str, page_number: u64) -> Result<Url, AppError> {
        let mut url = self.endpoint_url(endpoint)?;
        url.query_pairs_mut()
            .append_pair("page[number]", &page_number.to_string())
            .append_pair("page[size]", &self.page_size.to_string())
            .append_pair("format", "json");
        Ok(url)
    }

    /// Executes a GET request with timing and logging.
    ///
    /// Any status code is returned as a response; only transport failures
    /// (connect, DNS, TLS, broken body) are errors.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConnectionFailed` when no response is received.
    pub async fn get(&self, url: Url) -> Result<reqwest::Response, AppError> {
        let start = Instant::now();
        let logged_url = url_for_logs(&url);

        let result = self.http.get(url).send().await;
        let duration_ms = start.elapsed().as_millis();

        match result {
            Ok(response) => {
                info!(
                    "[FISCAL] GET {} {} {}ms",
                    logged_url,
                    response.status().as_u16(),
                    duration_ms
                );
                Ok(response)
            }
            Err(e) => {
                warn!("[FISCAL] GET {} FAILED {}ms", logged_url, duration_ms);
                Err(AppError::ConnectionFailed(e.to_string()))
            }
        }
    }
}

/// Builds the HTTP client with default headers. Timeouts are left at the
/// reqwest defaults.
fn build_http_client(user_agent: &str) -> Result<reqwest::Client, AppError> {
    let agent = HeaderValue::from_str(user_agent)
        .map_err(|e| AppError::Internal(format!("Invalid user agent: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, agent);

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
