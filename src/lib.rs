pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod input;
pub mod models;
pub mod registry;
pub mod reporter;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::Cli;
use colored::*;
use config::Config;
use exporter::Exporter;
use input::CompetitorFile;
use reporter::Reporter;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Apply the config file (explicit `--config`, else the default paths) under the CLI arguments.
pub fn resolve_args(args: Cli) -> Result<Cli> {
    let config = match &args.config {
        Some(path) => Some(Config::from_file(Path::new(path))?),
        None => Config::from_default_paths()?,
    };

    Ok(match config {
        Some(config) => config.merge_with_cli(&args),
        None => args,
    })
}

pub fn run(args: Cli) -> Result<()> {
    let text_output = !matches!(args.output.as_str(), "json" | "csv");

    if text_output {
        println!(
            "{}",
            "SERPLens - SERP Competitor Analyzer".bright_cyan().bold()
        );
        println!("{}", "=".repeat(50).bright_blue());
        println!();
    }

    let input_path = Path::new(&args.input);
    let file = CompetitorFile::from_file(input_path)?;

    let keyword = args
        .keyword
        .clone()
        .or_else(|| file.keyword.clone())
        .map(|k| k.trim().to_string())
        .unwrap_or_default();

    if keyword.is_empty() {
        anyhow::bail!("Please enter a keyword (use --keyword or set it in the input file)");
    }

    let registry = file.build_registry()?;

    if args.verbose && text_output {
        println!("{} {}", "Keyword:".bright_white().bold(), keyword);
        println!(
            "{} {}",
            "Competitors:".bright_white().bold(),
            registry.count()
        );
        println!();
    }

    let result = registry.analyze(&keyword)?;

    match args.output.as_str() {
        "json" => {
            let json = Exporter::export_json(&result)?;
            std::io::stdout().write_all(&json)?;
            println!();
        }
        "csv" => {
            let csv = Exporter::export_csv(&result)?;
            std::io::stdout().write_all(&csv)?;
        }
        _ => {
            Reporter::print_text_report(&result);
        }
    }

    if let Some(filename) = &args.save {
        let path = Path::new(filename);
        Exporter::save_json(&result, path)?;
        report_saved(path, text_output);
    }

    if let Some(filename) = &args.csv {
        let path = Path::new(filename);
        Exporter::save_csv(&result, path)?;
        report_saved(path, text_output);
    }

    if let Some(dir) = &args.export_dir {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
        let now = Utc::now();
        let json_path = dir.join(Exporter::json_file_name(&keyword, now));
        Exporter::save_json(&result, &json_path)?;
        report_saved(&json_path, text_output);
        let csv_path = dir.join(Exporter::csv_file_name(&keyword, now));
        Exporter::save_csv(&result, &csv_path)?;
        report_saved(&csv_path, text_output);
    }

    Ok(())
}

/// Stdout carries the JSON/CSV payload in machine-readable modes, so notices go to stderr there.
fn report_saved(path: &Path, text_output: bool) {
    let message = format!("Report saved to: {}", path.display().to_string().bright_green());
    if text_output {
        println!("{}", message);
    } else {
        eprintln!("{}", message);
    }
}
