use csv::ReaderBuilder;
use shared::models::RawRow;
use std::fs;
use std::path::Path;

use super::{parse_date, record_line, require_column};
use crate::error::{EngineError, Result};

/// Columns every raw daily sales file must carry.
pub const RAW_COLUMNS: [&str; 5] = ["product", "price", "quantity", "date", "region"];

// Currency handling for raw prices such as "$3.00"
pub mod currency {
    use crate::error::{EngineError, Result};

    /// Parses a price, stripping one leading `symbol` if present.
    ///
    /// A price without the symbol is accepted as-is ("3.00" parses to 3.0).
    pub fn parse_price(text: &str, symbol: &str) -> Result<f64> {
        let trimmed = text.trim();
        let digits = if symbol.is_empty() {
            trimmed
        } else {
            trimmed.strip_prefix(symbol).unwrap_or(trimmed).trim_start()
        };

        let invalid = |reason: &str| EngineError::InvalidPrice {
            text: text.to_string(),
            reason: reason.to_string(),
        };

        if digits.is_empty() {
            return Err(invalid("no digits after currency symbol"));
        }
        let value: f64 = digits.parse().map_err(|_| invalid("not a decimal number"))?;
        if !value.is_finite() {
            return Err(invalid("not a finite number"));
        }
        if value < 0.0 {
            return Err(invalid("negative price"));
        }
        Ok(value)
    }

}

pub struct RawCsvParser;

impl RawCsvParser {
    // Header: product,price,quantity,date,region (any order, extra columns ignored)
    // Example row: pink morsel,$3.00,546,2021-01-10,north
    pub fn load_rows(file_path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
        let path = file_path.as_ref();
        // Daily files are small; keeping the bytes lets errors point at the exact source line.
        let source = fs::read(path).map_err(|e| EngineError::io(path, e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source.as_slice());

        // Map each required column to its position in this file's header row.
        // Headers are matched by name, so files may order or extend them freely.
        let headers = rdr.headers().map_err(|e| EngineError::csv(path, e))?.clone();
        let mut positions = [0usize; RAW_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(RAW_COLUMNS) {
            *slot = require_column(&headers, name, path)?;
        }
        let [product_idx, price_idx, quantity_idx, date_idx, region_idx] = positions;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| EngineError::csv(path, e))?;
            // Physical line in the file; blank lines are skipped by the reader but still counted here.
            let line = record_line(&record, &source);
            let field = |pos: usize| record.get(pos).unwrap_or("");

            let quantity = field(quantity_idx)
                .parse::<u32>()
                .map_err(|e| EngineError::parse(path, line, "quantity", format!("'{}': {}", field(quantity_idx), e)))?;
            let date = parse_date(field(date_idx)).map_err(|msg| EngineError::parse(path, line, "date", msg))?;

            // Product, price and region stay raw text; the formatter interprets them
            // only for rows of the target product.
            rows.push(RawRow {
                product: field(product_idx).to_string(),
                price: field(price_idx).to_string(),
                quantity,
                date,
                region: field(region_idx).to_string(),
                line,
            });
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "Read raw sales file");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_rows_valid_data() {
        let csv_content = "\
product,price,quantity,date,region
pink morsel,$3.00,546,2021-01-10,north
gold morsel,$9.99,5,2021-01-10,south";
        let tmp_file = create_test_csv(csv_content);
        let rows = RawCsvParser::load_rows(tmp_file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product, "pink morsel");
        assert_eq!(rows[0].price, "$3.00");
        assert_eq!(rows[0].quantity, 546);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2021, 1, 10).unwrap());
        assert_eq!(rows[0].region, "north");
        assert_eq!(rows[1].product, "gold morsel");
    }

    #[test]
    fn test_load_rows_columns_in_any_order() {
        let csv_content = "\
region,date,extra,quantity,price,product
east,2020-03-01,x,3,$1.50,Pink Morsel";
        let tmp_file = create_test_csv(csv_content);
        let rows = RawCsvParser::load_rows(tmp_file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region, "east");
        assert_eq!(rows[0].price, "$1.50");
        assert_eq!(rows[0].quantity, 3);
    }

    #[test]
    fn test_load_rows_header_only() {
        let tmp_file = create_test_csv("product,price,quantity,date,region");
        let rows = RawCsvParser::load_rows(tmp_file.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_rows_missing_column() {
        let csv_content = "\
product,price,date,region
pink morsel,$3.00,2021-01-10,north";
        let tmp_file = create_test_csv(csv_content);
        let err = RawCsvParser::load_rows(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::MissingColumn { ref column, .. } if column == "quantity"));
        assert!(err.to_string().contains("Missing required column 'quantity'"));
    }

    #[test]
    fn test_load_rows_bad_quantity() {
        let csv_content = "\
product,price,quantity,date,region
pink morsel,$3.00,lots,2021-01-10,north";
        let tmp_file = create_test_csv(csv_content);
        let err = RawCsvParser::load_rows(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("Error parsing 'quantity'"));
    }

    #[test]
    fn test_load_rows_bad_date() {
        let csv_content = "\
product,price,quantity,date,region
pink morsel,$3.00,1,10/01/2021,north";
        let tmp_file = create_test_csv(csv_content);
        let err = RawCsvParser::load_rows(tmp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Error parsing 'date'"));
    }

    #[test]
    fn test_load_rows_unpadded_date_rejected() {
        let csv_content = "\
product,price,quantity,date,region
pink morsel,$3.00,2,2021-1-5,north";
        let tmp_file = create_test_csv(csv_content);
        let err = RawCsvParser::load_rows(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 2, ref field, .. } if field == "date"));
        assert!(err.to_string().contains("2021-1-5"));
    }

    #[test]
    fn test_load_rows_line_numbers_count_blank_lines() {
        let csv_content = "\
product,price,quantity,date,region
pink morsel,$3.00,2,2021-01-10,north

pink morsel,$3.00,many,2021-01-11,north";
        let tmp_file = create_test_csv(csv_content);
        let err = RawCsvParser::load_rows(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 4, .. }), "unexpected error: {err:?}");
    }

    #[test]
    fn test_load_rows_records_physical_line() {
        let csv_content = "\
product,price,quantity,date,region

gold morsel,$9.99,1,2021-01-10,south
pink morsel,$3.00,2,2021-01-10,north";
        let tmp_file = create_test_csv(csv_content);
        let rows = RawCsvParser::load_rows(tmp_file.path()).unwrap();
        assert_eq!(rows.iter().map(|r| r.line).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_load_rows_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RawCsvParser::load_rows(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
