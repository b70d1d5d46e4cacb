use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkuI18nError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("formatter config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
