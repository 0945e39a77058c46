//! CSV export of fetched datasets.
//!
//! Each dataset is flattened into a rectangular table (sorted union of field
//! names as the header) and written through an atomic writer, so a failed run
//! never leaves a half-written file under its final name.

mod atomic_writer;
mod csv_export;

pub use csv_export::save_to_csv;
