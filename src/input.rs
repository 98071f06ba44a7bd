use crate::config::ConfigFormat;
use crate::models::CompetitorEntry;
use crate::registry::CompetitorRegistry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of a JSON, TOML or YAML competitor file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitorFile {
    /// Target keyword, used when none is given on the command line or in config
    pub keyword: Option<String>,

    /// Competitors in rank order
    #[serde(default)]
    pub competitors: Vec<CompetitorEntry>,
}

/// A row of a CSV file in the same layout the exporter writes.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Position")]
    position: Option<usize>,
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Meta Description", default)]
    meta_description: String,
}

impl CompetitorFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read competitor file: {}", path.display()))?;

        if is_csv {
            return Self::from_csv(&contents)
                .with_context(|| format!("Failed to parse CSV competitors: {}", path.display()));
        }

        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported competitor file format: {}", path.display()))?;

        let file = match format {
            ConfigFormat::Json => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON competitors: {}", path.display()))?,
            ConfigFormat::Toml => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML competitors: {}", path.display()))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML competitors: {}", path.display()))?,
        };

        Ok(file)
    }

    /// Parse CSV rows; rows carrying a position are ordered by it.
    pub fn from_csv(contents: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        let mut rows: Vec<CsvRow> = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            rows.push(row);
        }

        // stable, so rows without a position keep file order at the end
        rows.sort_by_key(|row| row.position.unwrap_or(usize::MAX));

        let competitors = rows
            .into_iter()
            .map(|row| CompetitorEntry {
                domain: row.domain,
                url: row.url,
                title: row.title,
                meta_description: row.meta_description,
            })
            .collect();

        Ok(Self {
            keyword: None,
            competitors,
        })
    }

    /// Validate every entry into a fresh registry, stopping at the first bad one.
    pub fn build_registry(&self) -> Result<CompetitorRegistry> {
        let mut registry = CompetitorRegistry::new();
        for (i, entry) in self.competitors.iter().enumerate() {
            registry
                .add_entry(entry)
                .with_context(|| format!("Invalid competitor #{}", i + 1))?;
        }
        Ok(registry)
    }
}
