mod export_service;

pub use export_service::{CsvFile, ExportService};
