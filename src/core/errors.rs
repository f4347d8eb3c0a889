use std::path::PathBuf;

/// All domain errors for rlmerge.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum RlmergeError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         Profiles are exported from RuneLite as .properties files."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Cannot read {path} as text: {detail}\n\n  \
         Profiles are plain UTF-8 .properties files (key=value lines).\n  \
         Binary or otherwise undecodable files cannot be compared or merged."
    )]
    ReadFailure { path: PathBuf, detail: String },

    #[error(
        "Cannot merge: {side} is not loaded\n\n  \
         A merge needs both profiles parsed first, even when one of them\n  \
         contributes no settings to the output."
    )]
    MissingProfile { side: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RlmergeError>;
