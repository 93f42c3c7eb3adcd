use thiserror::Error;

// Only configuration loading can fail. Parsing, snapshot computation and
// rule evaluation are total and never produce an EngineError.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Food-basket reference table error: {0}")]
    ReferenceTableError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}
