use thiserror::Error;

/// Recoverable failures surfaced by the registry and the analyzer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("{0}")]
    Validation(String),

    #[error("Competitor index {index} is out of range (have {len})")]
    Index { index: usize, len: usize },

    #[error("Please add at least one competitor first")]
    EmptyInput,
}

pub type AnalyzerResult<T> = std::result::Result<T, AnalyzerError>;
