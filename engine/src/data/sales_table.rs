// In-memory table of normalized sales records, read-only once loaded
use csv::ReaderBuilder;
use shared::models::{Region, RegionFilter, SalesRecord};
use std::fs;
use std::path::Path;

use super::{parse_date, record_line, require_column};
use crate::error::{EngineError, Result};

/// Header of the normalized sales file, in write order.
pub const SALES_COLUMNS: [&str; 3] = ["sales", "date", "region"];

/// Normalized sales records sorted ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    /// Sorts by date; same-day records keep their given order.
    pub fn from_records(mut records: Vec<SalesRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        SalesTable { records }
    }

    // Header: sales,date,region
    // Example row: 6.00,2021-01-10,north
    pub fn load(file_path: impl AsRef<Path>) -> Result<Self> {
        let path = file_path.as_ref();
        let source = fs::read(path).map_err(|e| EngineError::io(path, e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source.as_slice());

        // Columns are found by name, so the writer's order is not assumed
        let headers = rdr.headers().map_err(|e| EngineError::csv(path, e))?.clone();
        let [sales_col, date_col, region_col] = SALES_COLUMNS;
        let sales_idx = require_column(&headers, sales_col, path)?;
        let date_idx = require_column(&headers, date_col, path)?;
        let region_idx = require_column(&headers, region_col, path)?;

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| EngineError::csv(path, e))?;
            let line = record_line(&record, &source);
            let field = |pos: usize| record.get(pos).unwrap_or("");

            let sales = field(sales_idx)
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| {
                    EngineError::parse(path, line, "sales", format!("'{}' is not a non-negative amount", field(sales_idx)))
                })?;
            let date = parse_date(field(date_idx)).map_err(|e| EngineError::parse(path, line, "date", e))?;
            let region = field(region_idx)
                .parse::<Region>()
                .map_err(|e| EngineError::parse(path, line, "region", e))?;

            records.push(SalesRecord { sales, date, region });
        }

        tracing::info!(path = %path.display(), records = records.len(), "Loaded sales table");
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `filter`, still in date order.
    pub fn filtered(&self, filter: RegionFilter) -> impl Iterator<Item = &SalesRecord> + '_ {
        self.records.iter().filter(move |r| filter.matches(r.region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DATE_FORMAT;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_load_sorts_by_date() {
        let csv_content = "\
sales,date,region
15.00,2021-01-16,south
6.00,2021-01-10,north
3.50,2021-01-12,SOUTH
7.25,2021-01-10,east";
        let tmp_file = create_test_csv(csv_content);
        let table = SalesTable::load(tmp_file.path()).unwrap();

        assert_eq!(table.len(), 4);
        let dates: Vec<_> = table.records().iter().map(|r| r.date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        // Stable for same-day rows
        assert_eq!(table.records()[0].region, Region::North);
        assert_eq!(table.records()[1].region, Region::East);
        assert_eq!(table.records()[2].sales, 3.5);
        assert_eq!(table.records()[2].region, Region::South);
    }

    #[test]
    fn test_load_columns_in_any_order() {
        let tmp_file = create_test_csv("region,sales,date\nwest,1.00,2021-01-01");
        let table = SalesTable::load(tmp_file.path()).unwrap();
        assert_eq!(
            table.records(),
            &[SalesRecord { sales: 1.0, date: date("2021-01-01"), region: Region::West }]
        );
    }

    #[test]
    fn test_load_missing_column() {
        let tmp_file = create_test_csv("sales,region\n6.00,north");
        let err = SalesTable::load(tmp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Missing required column 'date'"));
    }

    #[test]
    fn test_load_bad_sales_value() {
        let tmp_file = create_test_csv("sales,date,region\nlots,2021-01-01,north");
        let err = SalesTable::load(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 2, ref field, .. } if field == "sales"));
    }

    #[test]
    fn test_load_error_line_counts_blank_lines() {
        let tmp_file = create_test_csv("sales,date,region\n1.00,2021-01-01,north\n\n\n2.00,2021-01-02,north\nlots,2021-01-03,north");
        let err = SalesTable::load(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 6, ref field, .. } if field == "sales"));
    }

    #[test]
    fn test_load_unpadded_date_rejected() {
        let tmp_file = create_test_csv("sales,date,region\n1.00,2021-1-5,north");
        let err = SalesTable::load(tmp_file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 2, ref field, .. } if field == "date"));
    }

    #[test]
    fn test_load_unknown_region() {
        let tmp_file = create_test_csv("sales,date,region\n1.00,2021-01-01,central");
        let err = SalesTable::load(tmp_file.path()).unwrap_err();
        assert!(err.to_string().contains("central"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SalesTable::load(dir.path().join("formatted_data.csv")).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[test]
    fn test_filtered_by_region() {
        let table = SalesTable::from_records(vec![
            SalesRecord { sales: 2.0, date: date("2021-01-02"), region: Region::South },
            SalesRecord { sales: 1.0, date: date("2021-01-01"), region: Region::North },
            SalesRecord { sales: 3.0, date: date("2021-01-03"), region: Region::South },
        ]);

        assert_eq!(table.filtered(RegionFilter::All).count(), 3);
        let south: Vec<_> = table.filtered(RegionFilter::Only(Region::South)).map(|r| r.sales).collect();
        assert_eq!(south, vec![2.0, 3.0]);
        assert_eq!(table.filtered(RegionFilter::Only(Region::West)).count(), 0);
    }
}
