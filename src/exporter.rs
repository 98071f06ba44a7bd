use crate::models::AnalysisResult;
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Writer, WriterBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADERS: [&str; 7] = [
    "Position",
    "Domain",
    "URL",
    "Title",
    "Meta Description",
    "Title Length",
    "Meta Length",
];

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should be valid"));

#[derive(Serialize)]
struct JsonExport<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    exported_at: String,
}

pub struct Exporter;

impl Exporter {
    /// Pretty-printed JSON of the full result with an `exported_at` field appended.
    pub fn export_json(result: &AnalysisResult) -> Result<Vec<u8>> {
        Self::export_json_at(result, Utc::now())
    }

    pub fn export_json_at(result: &AnalysisResult, exported_at: DateTime<Utc>) -> Result<Vec<u8>> {
        let export = JsonExport {
            result,
            exported_at: exported_at.to_rfc3339(),
        };
        let json = serde_json::to_string_pretty(&export).context("Failed to serialize analysis")?;
        Ok(json.into_bytes())
    }

    /// One row per competitor; text columns are always quoted, numbers never are.
    pub fn export_csv(result: &AnalysisResult) -> Result<Vec<u8>> {
        let mut header = Writer::from_writer(Vec::new());
        header.write_record(CSV_HEADERS)?;
        let buffer = header
            .into_inner()
            .map_err(|e| anyhow!("Failed to write CSV header: {}", e.error()))?;

        // text fields are quoted by hand so numeric-looking titles keep their quotes
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(buffer);

        for comp in &result.competitors {
            wtr.write_record([
                comp.position.to_string(),
                Self::quote(&comp.domain),
                Self::quote(&comp.url),
                Self::quote(&comp.title),
                Self::quote(&comp.meta_description),
                comp.title_length.to_string(),
                comp.meta_length.to_string(),
            ])?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| anyhow!("Failed to write CSV rows: {}", e.error()))?;

        tracing::debug!(rows = result.competitors.len(), "CSV export built");
        Ok(bytes)
    }

    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }

    pub fn json_file_name(keyword: &str, date: DateTime<Utc>) -> String {
        format!(
            "serp_analysis_{}_{}.json",
            Self::keyword_slug(keyword),
            date.format("%Y-%m-%d")
        )
    }

    pub fn csv_file_name(keyword: &str, date: DateTime<Utc>) -> String {
        format!(
            "serp_competitors_{}_{}.csv",
            Self::keyword_slug(keyword),
            date.format("%Y-%m-%d")
        )
    }

    fn keyword_slug(keyword: &str) -> String {
        WHITESPACE_RE.replace_all(keyword, "_").into_owned()
    }

    pub fn save_json(result: &AnalysisResult, path: &Path) -> Result<()> {
        let bytes = Self::export_json(result)?;
        Self::write_file(path, &bytes)
    }

    pub fn save_csv(result: &AnalysisResult, path: &Path) -> Result<()> {
        let bytes = Self::export_csv(result)?;
        Self::write_file(path, &bytes)
    }

    fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        file.write_all(bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Export written");
        Ok(())
    }
}
