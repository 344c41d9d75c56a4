use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    ValidationError(String),
    #[error("Invalid price {0:?}: not a whole number")]
    PriceError(String),
    #[error("Selection error: {0}")]
    SelectionError(String),
}

pub type Result<T> = std::result::Result<T, ListError>;
