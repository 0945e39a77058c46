//! Extraction settings.
//!
//! The tool has no flags, config file or environment-driven settings; the
//! `Default` impl carries the production values. Tests override the base URL
//! and output directory through the builder methods.

use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Root of every Fiscal Data endpoint path.
pub const BASE_URL: &str = "https://api.fiscaldata.treasury.gov/services/api/fiscal_service";

/// Records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Directory (relative to the working directory) receiving the CSV files.
pub const DEFAULT_OUTPUT_DIR: &str = "csv_data";

/// User agent string for all API requests.
const CLIENT_USER_AGENT: &str = concat!("fiscal-extract/", env!("CARGO_PKG_VERSION"));

// ─────────────────────────────────────────────────────────────────────────────
// ExtractConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Prefix that endpoint paths are appended to (no trailing slash).
    pub base_url: String,
    /// Value sent as `page[size]`.
    pub page_size: u32,
    /// Directory receiving one CSV per endpoint.
    pub output_dir: PathBuf,
    /// Value of the `User-Agent` request header.
    pub user_agent: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: CLIENT_USER_AGENT.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Sets the base URL. A trailing slash is dropped so that endpoint paths,
    /// which start with `/`, concatenate cleanly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
