use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing required column '{column}' in '{}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Error parsing '{field}' at line {line} of '{}': {message}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        field: String,
        message: String,
    },

    #[error("Invalid price '{text}': {reason}")]
    InvalidPrice { text: String, reason: String },
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::Io { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        EngineError::Csv { path: path.into(), source }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: u64, field: &str, message: impl ToString) -> Self {
        EngineError::Parse {
            path: path.into(),
            line,
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
