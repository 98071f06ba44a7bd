use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "serplens")]
#[command(about = "A CLI SERP competitor analyzer", long_about = None)]
pub struct Cli {
    /// Competitor file to analyze (JSON, TOML, YAML or CSV)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Target keyword (overrides the keyword in the input file)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Output format: text, json or csv
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save the JSON analysis to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Save the competitor table as CSV to file
    #[arg(long)]
    pub csv: Option<String>,

    /// Save both exports under their default names in this directory
    #[arg(short, long)]
    pub export_dir: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
