// Formatter output feeding the loader and chart builder
use engine::config::{ChartOptions, EngineSettings};
use engine::data::formatter;
use engine::{build_chart, SalesTable};
use shared::models::{Region, RegionFilter};
use std::fs;

const RAW_0: &str = "\
product,price,quantity,date,region
pink morsel,$3.00,546,2021-01-14,north
pink morsel,$3.00,620,2021-01-14,south
gold morsel,$9.99,12,2021-01-14,north
";

const RAW_1: &str = "\
product,price,quantity,date,region
Pink Morsel,$5.00,400,2021-01-16,south
pink morsel,$5.00,390,2021-01-16,north
pink morsel,$3.00,500,2021-01-13,south
";

fn run_formatter(dir: &tempfile::TempDir) -> EngineSettings {
    let data_dir = dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    fs::write(data_dir.join("daily_sales_data_0.csv"), RAW_0).unwrap();
    fs::write(data_dir.join("daily_sales_data_1.csv"), RAW_1).unwrap();

    let settings = EngineSettings {
        data_dir,
        output_path: dir.path().join("formatted_data.csv"),
        ..EngineSettings::default()
    };
    formatter::run(&settings).unwrap();
    settings
}

#[test]
fn formatted_file_loads_in_date_order() {
    let dir = tempfile::tempdir().unwrap();
    let settings = run_formatter(&dir);

    let table = SalesTable::load(&settings.output_path).unwrap();
    assert_eq!(table.len(), 5);
    let dates: Vec<_> = table.records().iter().map(|r| r.date).collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(table.records()[0].sales, 1500.0);
}

#[test]
fn region_selection_restricts_chart() {
    let dir = tempfile::tempdir().unwrap();
    let settings = run_formatter(&dir);
    let table = SalesTable::load(&settings.output_path).unwrap();
    let options = ChartOptions::default();

    let all = build_chart(&table, RegionFilter::All, &options);
    assert_eq!(all.points.len(), table.len());
    assert_eq!(all.marker.y, 2000.0);

    let south = build_chart(&table, "south".parse().unwrap(), &options);
    let south_sales: Vec<_> = south.points.iter().map(|p| p.sales).collect();
    assert_eq!(south_sales, vec![1500.0, 1860.0, 2000.0]);

    let north = build_chart(&table, RegionFilter::Only(Region::North), &options);
    assert_eq!(north.points.len(), 2);
    assert_eq!(north.marker.y, 1950.0);
}

#[test]
fn formatter_reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let settings = run_formatter(&dir);
    let first = fs::read(&settings.output_path).unwrap();
    formatter::run(&settings).unwrap();
    assert_eq!(first, fs::read(&settings.output_path).unwrap());
}
