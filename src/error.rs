use std::path::PathBuf;

pub type Result<T, E = SeedError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: invalid product record", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("embedding request failed")]
    Http(#[from] reqwest::Error),

    #[error("embedding provider returned {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The provider broke the one-vector-per-input contract.
    #[error("embedding provider returned {actual} vectors for {expected} inputs")]
    EmbeddingCount { expected: usize, actual: usize },

    #[error("document store operation failed")]
    Store(#[from] mongodb::error::Error),
}
