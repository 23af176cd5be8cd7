use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse uploaded table: {0}")]
    Parse(String),
    #[error("required column '{0}' not found in the uploaded table")]
    MissingColumn(String),
    #[error("prefix must not be empty or whitespace-only")]
    EmptyPrefix,
    #[error("failed to serialize export: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
