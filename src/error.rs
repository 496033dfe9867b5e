use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyGaugeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

pub type KgResult<T> = Result<T, KeyGaugeError>;
