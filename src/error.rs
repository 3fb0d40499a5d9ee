use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntyError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IntyError>;
