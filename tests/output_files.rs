// tests/output_files.rs
//
// The CSV sink and output-directory handling.

mod common;

use common::tmp_dir;
use cybar_scrape::csv::parse_rows;
use cybar_scrape::file::{chunk_filename, ensure_directory, run_timestamp, RecordSink};
use cybar_scrape::record::{DetailFields, LawyerRecord, RowFields};

fn record(full_name: &str, province: &str) -> LawyerRecord {
    LawyerRecord::merge(
        RowFields {
            full_name: full_name.to_string(),
            province: province.to_string(),
            ..Default::default()
        },
        DetailFields::default(),
    )
}

#[tokio::test]
async fn create_writes_the_header_immediately() {
    let dir = tmp_dir("sink_header");
    let sink = RecordSink::create(&dir.join("out.csv")).unwrap();

    let rows = parse_rows(&std::fs::read_to_string(sink.path()).unwrap(), ',');
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 12);
    assert_eq!(rows[0][0], "Full Name");
    assert_eq!(rows[0][11], "Mobile");
}

#[tokio::test]
async fn appended_records_land_after_the_header_in_order() {
    let dir = tmp_dir("sink_append");
    let sink = RecordSink::create(&dir.join("out.csv")).unwrap();
    sink.append(&record("First Advocate", "Nicosia")).unwrap();
    sink.append(&record("Second Advocate", "Limassol")).unwrap();

    let rows = parse_rows(&std::fs::read_to_string(sink.path()).unwrap(), ',');
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][0], "First Advocate");
    assert_eq!(rows[2][0], "Second Advocate");
    assert_eq!(rows[2][6], "Limassol");
}

#[tokio::test]
async fn fields_with_separators_survive_the_round_trip() {
    let dir = tmp_dir("sink_quoting");
    let sink = RecordSink::create(&dir.join("out.csv")).unwrap();
    sink.append(&record("Advocate, Senior", "Nicosia, CY")).unwrap();

    let rows = parse_rows(&std::fs::read_to_string(sink.path()).unwrap(), ',');
    assert_eq!(rows[1].len(), 12);
    assert_eq!(rows[1][0], "Advocate, Senior");
    assert_eq!(rows[1][6], "Nicosia, CY");
}

#[tokio::test]
async fn sink_creates_missing_parent_directories() {
    let dir = tmp_dir("sink_parents");
    let path = dir.join("nested").join("deeper").join("out.csv");
    let sink = RecordSink::create(&path).unwrap();
    sink.append(&record("Only Advocate", "Paphos")).unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn ensure_directory_rejects_a_plain_file() {
    let dir = tmp_dir("ensure_dir");
    let file_path = dir.join("not_a_dir");
    std::fs::write(&file_path, "x").unwrap();
    assert!(ensure_directory(&file_path).is_err());
}

#[test]
fn chunk_filenames_are_distinct_per_range() {
    let stamp = run_timestamp();
    let a = chunk_filename(&stamp, 1, 5);
    let b = chunk_filename(&stamp, 6, 10);
    assert_ne!(a, b);
    assert!(a.starts_with("lawyers_"));
    assert!(a.ends_with("_1_5.csv"));
}
