use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("No header row found. Expected `forge inspect <contract> storage` output.")]
    MissingHeader,

    #[error("Malformed row on line {line}: expected {expected} fields, found {found}")]
    MalformedRow { line: usize, expected: usize, found: usize },

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid {column} value '{value}' on line {line}")]
    InvalidField { line: usize, column: &'static str, value: String },

    #[error("No storage layout found in file")]
    EmptyLayout,
}

pub type Result<T> = std::result::Result<T, Error>;
