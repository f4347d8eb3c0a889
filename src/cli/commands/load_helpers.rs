use std::path::Path;

use crate::core::errors::{Result, RlmergeError};
use crate::core::models::profile::Profile;
use crate::core::traits::parser::ProfileParser;

/// Read and parse one profile file.
///
/// The two failure modes here are the only ones a profile load can
/// produce: the path does not exist, or the bytes are not UTF-8 text.
/// Content problems are the parser's business and it never fails.
pub fn load_profile(path: &Path, parser: &dyn ProfileParser) -> Result<Profile> {
    if !path.exists() {
        return Err(RlmergeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| RlmergeError::ReadFailure {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    Ok(parser.parse(&text))
}
