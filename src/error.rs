use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("No package manifest found above tool root: {path}")]
    ToolRootNotFound { path: PathBuf },

    #[error("Invalid package manifest at {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("Failed to load plugin module at {path}: {reason}")]
    ModuleLoad { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
