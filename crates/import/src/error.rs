use saldo_core::Column;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to parse layout TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Layout field '{0}' must not be empty")]
    EmptyLiteral(&'static str),
    #[error("Invalid terminal date pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Why a header line could not be turned into column boundaries.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColumnError {
    #[error("Column '{0}' not found in header")]
    Missing(Column),
    #[error("Columns '{0}' and '{1}' start at the same offset")]
    Overlapping(Column, Column),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
