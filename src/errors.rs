use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ShellError {
    #[error("Content path must stay inside the application directory: {}", path.display())]
    InvalidContentPath { path: PathBuf },

    #[error("Failed to read preload script {}: {source}", path.display())]
    PreloadRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve application directory: {0}")]
    ResourceDir(#[source] tauri::Error),

    #[error("Failed to build window '{label}': {source}")]
    WindowBuild {
        label: String,
        #[source]
        source: tauri::Error,
    },

    #[error("Lifecycle state lock is poisoned")]
    StatePoisoned,
}

impl ShellError {
    pub(crate) fn invalid_content_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidContentPath { path: path.into() }
    }
}
