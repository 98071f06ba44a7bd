mod fixtures;

use chrono::{TimeZone, Utc};
use fixtures::{KEYWORD, record, sample_competitors};
use serplens::analyzer::compute_analysis;
use serplens::exporter::Exporter;
use serplens::models::AnalysisResult;
use std::fs;
use tempfile::tempdir;

fn sample_result() -> AnalysisResult {
    compute_analysis(&sample_competitors(), KEYWORD).expect("analysis should succeed")
}

#[test]
fn test_export_json_appends_timestamp() {
    let result = sample_result();
    let at = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
    let bytes = Exporter::export_json_at(&result, at).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["exported_at"], at.to_rfc3339());
    assert_eq!(value["keyword"], KEYWORD);
    assert_eq!(value["total_competitors"], 3);

    let text = String::from_utf8(bytes).unwrap();
    let last_key = text.rfind("\"exported_at\"").unwrap();
    assert!(text.rfind("\"competitors\"").unwrap() < last_key);
}

#[test]
fn test_export_json_deserializes_back() {
    let result = sample_result();
    let bytes = Exporter::export_json(&result).unwrap();

    let parsed: AnalysisResult = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_export_csv_header_and_quoting() {
    let competitors = vec![record(
        1,
        "example.com",
        r#"Best "SEO" Guide"#,
        "A short description.",
    )];
    let result = compute_analysis(&competitors, "seo").unwrap();
    let csv = String::from_utf8(Exporter::export_csv(&result).unwrap()).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Position,Domain,URL,Title,Meta Description,Title Length,Meta Length"
    );
    assert_eq!(
        lines[1],
        r#"1,"example.com","https://example.com/","Best ""SEO"" Guide","A short description.",16,20"#
    );
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_export_csv_header_without_competitor_rows() {
    let mut result = sample_result();
    result.competitors.clear();

    let csv = String::from_utf8(Exporter::export_csv(&result).unwrap()).unwrap();
    assert_eq!(
        csv.trim_end(),
        "Position,Domain,URL,Title,Meta Description,Title Length,Meta Length"
    );
}

#[test]
fn test_export_csv_round_trip() {
    let competitors = vec![
        record(1, "a.com", "Title, with comma", "Line one\nline two"),
        record(2, "b.co.uk", "", "Quote \" inside"),
        record(3, "c.io", "Plain", ""),
    ];
    let result = compute_analysis(&competitors, "x").unwrap();
    let bytes = Exporter::export_csv(&result).unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let rows: Vec<(usize, String, String, usize, usize)> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (
                r[0].parse().unwrap(),
                r[1].to_string(),
                r[2].to_string(),
                r[5].parse().unwrap(),
                r[6].parse().unwrap(),
            )
        })
        .collect();

    let expected: Vec<(usize, String, String, usize, usize)> = result
        .competitors
        .iter()
        .map(|c| {
            (
                c.position,
                c.domain.clone(),
                c.url.clone(),
                c.title_length,
                c.meta_length,
            )
        })
        .collect();

    assert_eq!(rows, expected);
}

#[test]
fn test_export_file_names() {
    let date = Utc.with_ymd_and_hms(2026, 10, 17, 23, 59, 0).unwrap();

    assert_eq!(
        Exporter::json_file_name("best crm  software", date),
        "serp_analysis_best_crm_software_2026-10-17.json"
    );
    assert_eq!(
        Exporter::csv_file_name("seo", date),
        "serp_competitors_seo_2026-10-17.csv"
    );
}

#[test]
fn test_save_json_and_csv() {
    let dir = tempdir().unwrap();
    let result = sample_result();

    let json_path = dir.path().join("analysis.json");
    let csv_path = dir.path().join("competitors.csv");

    Exporter::save_json(&result, &json_path).unwrap();
    Exporter::save_csv(&result, &csv_path).unwrap();

    let json = fs::read_to_string(&json_path).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.total_competitors, 3);

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("\"hubspot.com\""));
}

#[test]
fn test_save_json_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("analysis.json");

    let err = Exporter::save_json(&sample_result(), &path).unwrap_err();
    assert!(err.to_string().contains("Failed to create export file"));
}

#[test]
fn test_export_csv_quotes_numeric_looking_text() {
    let competitors = vec![record(1, "example.com", "2024", "12.5")];
    let result = compute_analysis(&competitors, "seo").unwrap();

    let csv = String::from_utf8(Exporter::export_csv(&result).unwrap()).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row, r#"1,"example.com","https://example.com/","2024","12.5",4,4"#);
}
