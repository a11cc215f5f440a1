use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("duplicate identifier '{id}' in sequence collection")]
    DuplicateIdentifier { id: String },

    #[error("empty input: {what}")]
    EmptyInput { what: &'static str },

    #[error("identifier '{id}' not found in sequence collection")]
    InvalidIdentifier { id: String },

    #[error("invalid frame: {frame} (must be 1, 2, or 3)")]
    InvalidFrame { frame: usize },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),

    #[error("csv missing column '{name}' in {path}. headers: {headers:?}")]
    CsvMissingColumn {
        name: String,
        headers: Vec<String>,
        path: String,
    },

    #[error("csv column index {index} out of range (ncols={ncols}) in {path}")]
    CsvColumnIndexOutOfRange {
        index: usize,
        ncols: usize,
        path: String,
    },

    #[error("csv missing field at row {row} for column {column} in {path}")]
    CsvMissingField {
        row: usize,
        column: String,
        path: String,
    },

    #[error("csv empty identifier at row {row} for column {column} in {path}")]
    CsvEmptyIdentifier {
        row: usize,
        column: String,
        path: String,
    },

    #[error("csv parse error in {path}: {source}")]
    CsvParse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub type ScanResult<T> = Result<T, ScanError>;
