use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeCount { field: &'static str, value: i64 },
    #[error("invalid scenario file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
}
