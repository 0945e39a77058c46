//! Flattens a dataset into a rectangular CSV file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;
use crate::export::atomic_writer::AtomicCsvWriter;
use crate::record::{collect_headers, record_row, Record};

/// Writes `records` to `output_dir/filename`.
///
/// The header row is the sorted union of every record's field names; fields a
/// record lacks are written as empty cells. The output directory is created
/// when missing.
///
/// Returns `Ok(None)` without touching the filesystem when `records` is empty.
///
/// # Errors
///
/// Returns `AppError::Io` or `AppError::Csv` when the directory or file cannot
/// be written.
pub fn save_to_csv(
    records: &[Record],
    output_dir: &Path,
    filename: &str,
) -> Result<Option<PathBuf>, AppError> {
    if records.is_empty() {
        info!("[CSV] No data to save for {}", filename);
        return Ok(None);
    }

    let headers = collect_headers(records);

    std::fs::create_dir_all(output_dir)?;
    let final_path = output_dir.join(filename);

    let mut writer = AtomicCsvWriter::new(&final_path)?;
    writer.write_row(&headers)?;
    for record in records {
        writer.write_row(record_row(record, &headers))?;
    }
    let path = writer.finish()?;

    info!(
        "[CSV] Data saved to {} ({} rows, {} columns)",
        path.display(),
        records.len(),
        headers.len()
    );

    Ok(Some(path))
}
