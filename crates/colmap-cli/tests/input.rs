//! Integration tests for column-list ingestion.

use std::fs;
use std::path::PathBuf;

use colmap_cli::input::read_columns;

fn temp_dir(tag: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("colmap_input_{tag}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn cleanup_dir(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn csv_header_row_gives_columns() {
    let dir = temp_dir("csv");
    let path = dir.join("insurance_raw.csv");
    fs::write(
        &path,
        "id,Gender,Age,Annual_Premium,Vehicle_Age,Response\n1,Male,44,40454.0,> 2 Years,1\n",
    )
    .unwrap();

    let columns = read_columns(&path).expect("read csv header");
    assert_eq!(
        columns,
        vec!["id", "Gender", "Age", "Annual_Premium", "Vehicle_Age", "Response"]
    );

    cleanup_dir(&dir);
}

#[test]
fn csv_without_rows_still_has_header() {
    let dir = temp_dir("schema_only");
    let path = dir.join("policy_holders.CSV");
    fs::write(&path, "holder_id,full_name,sex,premium\n").unwrap();

    let columns = read_columns(&path).expect("read csv header");
    assert_eq!(columns, vec!["holder_id", "full_name", "sex", "premium"]);

    cleanup_dir(&dir);
}

#[test]
fn csv_keeps_empty_header_cells() {
    let dir = temp_dir("empty_cell");
    let path = dir.join("broken.csv");
    fs::write(&path, "id,,age\n").unwrap();

    let columns = read_columns(&path).expect("read csv header");
    assert_eq!(columns, vec!["id", "", "age"]);

    cleanup_dir(&dir);
}

#[test]
fn plain_list_reads_one_name_per_line() {
    let dir = temp_dir("list");
    let path = dir.join("target.txt");
    fs::write(&path, "# policy_holders\nholder_id\n\nlocation_city\r\nclaim_flag\n").unwrap();

    let columns = read_columns(&path).expect("read name list");
    assert_eq!(columns, vec!["holder_id", "location_city", "claim_flag"]);

    cleanup_dir(&dir);
}

#[test]
fn missing_file_is_an_error() {
    let dir = temp_dir("missing");
    let err = read_columns(&dir.join("nope.txt")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.txt"));
    let err = read_columns(&dir.join("nope.csv")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.csv"));
    cleanup_dir(&dir);
}
