use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PhraseError>;

/// Errors raised while loading a phrase table or building its index.
/// Matching itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum PhraseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON phrase data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported phrase table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("duplicate English key {0:?}")]
    DuplicateKey(String),

    #[error("normalized form {normalized:?} of {dropped:?} already belongs to {kept:?}")]
    NormalizedCollision {
        normalized: String,
        kept: String,
        dropped: String,
    },

    #[error("phrase table has no entries")]
    EmptyTable,
}
