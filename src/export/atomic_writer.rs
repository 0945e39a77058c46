//! Atomic CSV file writer with automatic cleanup on failure.
//!
//! Writes to a temporary file in the same directory as the destination,
//! then atomically replaces the destination on `finish()`. If dropped
//! before finishing, the temporary file is removed.
//!
//! Rows end with `\r\n`, the usual line ending for spreadsheet CSV.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csv::{Terminator, Writer, WriterBuilder};
use tempfile::NamedTempFile;

use crate::error::AppError;

/// A CSV writer that only exposes a complete file at its final path.
pub struct AtomicCsvWriter {
    writer: Writer<BufWriter<NamedTempFile>>,
    final_path: PathBuf,
}

impl AtomicCsvWriter {
    /// Creates a writer targeting `final_path`.
    ///
    /// The temporary file lives next to `final_path` so the final rename stays
    /// on one filesystem.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if `final_path` has no parent directory,
    /// or `AppError::Io` if the temporary file cannot be created.
    pub fn new(final_path: impl AsRef<Path>) -> Result<Self, AppError> {
        let final_path = final_path.as_ref().to_path_buf();

        let parent_dir = match final_path.parent() {
            Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
            Some(dir) => dir,
            None => {
                return Err(AppError::Internal(format!(
                    "Cannot determine parent directory for: {}",
                    final_path.display()
                )))
            }
        };

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        let writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(BufWriter::new(temp_file));

        Ok(Self { writer, final_path })
    }

    /// Writes one CSV row.
    pub fn write_row<I, T>(&mut self, row: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(row)?;
        Ok(())
    }

    /// Flushes all buffers and persists the file to its final path.
    ///
    /// Returns the final path. On error the temporary file is cleaned up.
    pub fn finish(self) -> Result<PathBuf, AppError> {
        let buf_writer = self
            .writer
            .into_inner()
            .map_err(|e| AppError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))?;

        let named_temp = buf_writer.into_inner().map_err(|e| {
            AppError::Io(std::io::Error::new(e.error().kind(), e.error().to_string()))
        })?;

        named_temp
            .persist(&self.final_path)
            .map_err(|e| AppError::Io(e.error))?;

        Ok(self.final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_successful_write() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let final_path = temp_dir.path().join("output.csv");

        let mut writer = AtomicCsvWriter::new(&final_path).expect("Failed to create writer");
        writer.write_row(["record_date", "amount"]).unwrap();
        writer.write_row(["2024-01-02", "10.5"]).unwrap();

        let result_path = writer.finish().expect("Failed to finish");

        assert_eq!(result_path, final_path);
        let content = fs::read_to_string(&final_path).expect("Failed to read file");
        assert_eq!(content, "record_date,amount\r\n2024-01-02,10.5\r\n");
    }

    #[test]
    fn test_drop_cleanup() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let final_path = temp_dir.path().join("output.csv");

        {
            let mut writer = AtomicCsvWriter::new(&final_path).expect("Failed to create writer");
            writer.write_row(["Header"]).unwrap();
            // dropped without finish()
        }

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .expect("Failed to read dir")
            .collect();
        assert!(entries.is_empty(), "temp file should be removed on drop");
        assert!(!final_path.exists());
    }

    #[test]
    fn test_overwrite_behavior() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let final_path = temp_dir.path().join("output.csv");
        fs::write(&final_path, "OLD_CONTENT").unwrap();

        let mut writer = AtomicCsvWriter::new(&final_path).unwrap();
        writer.write_row(["NEW"]).unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(&final_path).unwrap();
        assert_eq!(content, "NEW\r\n");
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let final_path = temp_dir.path().join("complex.csv");

        let mut writer = AtomicCsvWriter::new(&final_path).unwrap();
        writer.write_row(["name", "description"]).unwrap();
        writer.write_row(["Item1", "Contains, comma"]).unwrap();
        writer.write_row(["Item2", "Has \"quotes\""]).unwrap();
        writer.write_row(["Item3", "Multi\nline"]).unwrap();
        writer.finish().unwrap();

        let mut reader = csv::Reader::from_path(&final_path).unwrap();
        let records: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0][1], "Contains, comma");
        assert_eq!(records[1][1], "Has \"quotes\"");
        assert_eq!(records[2][1], "Multi\nline");
    }

    #[test]
    fn test_missing_parent_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let final_path = temp_dir.path().join("missing").join("output.csv");

        let result = AtomicCsvWriter::new(&final_path);

        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_root_path_has_no_parent() {
        let result = AtomicCsvWriter::new("/");
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
