// Turns a directory of raw daily sales files into the single normalized sales file
use shared::models::{RawRow, Region, SalesRecord};
use std::fs;
use std::path::{Path, PathBuf};

use super::raw_parser::{currency, RawCsvParser};
use super::sales_table::SALES_COLUMNS;
use crate::config::EngineSettings;
use crate::error::{EngineError, Result};

/// What a formatter run did.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSummary {
    pub files_read: usize,
    pub rows_read: usize,
    pub records_written: usize,
    pub output: PathBuf,
}

/// Runs the whole batch: list, read, filter, derive, write.
///
/// Nothing is written unless every input file was read and normalized.
pub fn run(settings: &EngineSettings) -> Result<FormatSummary> {
    tracing::info!(
        data_dir = %settings.data_dir.display(),
        product = %settings.product,
        "Formatting raw sales files"
    );

    // Everything is read and checked before the output file is touched
    let files = list_input_files(&settings.data_dir)?;
    if files.is_empty() {
        tracing::warn!(data_dir = %settings.data_dir.display(), "No CSV files found");
    }

    // Files are concatenated in name order, rows in file order
    let mut records = Vec::new();
    let mut rows_read = 0;
    for file in &files {
        let rows = RawCsvParser::load_rows(file)?;
        rows_read += rows.len();
        let matched = normalize(file, &rows, &settings.product, &settings.currency_symbol)?;
        tracing::info!(file = %file.display(), rows = rows.len(), matched = matched.len(), "Processed file");
        records.extend(matched);
    }

    write_records(&settings.output_path, &records)?;

    let summary = FormatSummary {
        files_read: files.len(),
        rows_read,
        records_written: records.len(),
        output: settings.output_path.clone(),
    };
    tracing::info!(
        files = summary.files_read,
        rows = summary.rows_read,
        records = summary.records_written,
        output = %summary.output.display(),
        "Formatted sales file written"
    );
    Ok(summary)
}

/// CSV files directly inside `dir`, sorted by file name.
pub fn list_input_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| EngineError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EngineError::io(dir, e))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        } else {
            tracing::debug!(path = %path.display(), "Skipping non-CSV entry");
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Whether a raw product name is the target product (case-insensitive, outer whitespace ignored).
pub fn product_matches(product: &str, target: &str) -> bool {
    product.trim().to_lowercase() == target.trim().to_lowercase()
}

/// Keeps rows of `product` from `path` and derives `sales = price × quantity`, preserving row order.
///
/// Rows of other products are dropped without looking at their price or region.
/// A bad price or region on a kept row fails with the file and line it came from.
pub fn normalize(path: &Path, rows: &[RawRow], product: &str, currency_symbol: &str) -> Result<Vec<SalesRecord>> {
    rows.iter()
        .filter(|row| product_matches(&row.product, product))
        .map(|row| to_record(path, row, currency_symbol))
        .collect()
}

fn to_record(path: &Path, row: &RawRow, currency_symbol: &str) -> Result<SalesRecord> {
    let price = currency::parse_price(&row.price, currency_symbol)
        .map_err(|e| EngineError::parse(path, row.line, "price", e))?;
    // Regions are stored lowercase whatever the raw casing
    let region: Region = row
        .region
        .parse()
        .map_err(|e| EngineError::parse(path, row.line, "region", e))?;
    Ok(SalesRecord {
        sales: price * f64::from(row.quantity),
        date: row.date,
        region,
    })
}

/// Writes `sales,date,region` rows, creating parent directories as needed.
pub fn write_records(path: impl AsRef<Path>, records: &[SalesRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EngineError::io(parent, e))?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| EngineError::csv(path, e))?;
    if records.is_empty() {
        // serde only emits the header alongside the first row
        writer
            .write_record(SALES_COLUMNS)
            .map_err(|e| EngineError::csv(path, e))?;
    }
    for record in records {
        writer.serialize(record).map_err(|e| EngineError::csv(path, e))?;
    }
    writer.flush().map_err(|e| EngineError::io(path, e))?;
    Ok(())
}
