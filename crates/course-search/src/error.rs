#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Query parse error: {0}")]
    QueryParse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::Serialization(error.to_string())
    }
}
