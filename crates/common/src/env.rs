//! Environment/runtime helpers
//!
//! Sanity checks to ensure the SQLite database location is usable at startup.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Extract the on-disk file path from a SQLite URL.
///
/// Returns `None` for in-memory databases.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path.starts_with("file::memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of a file-backed SQLite database exists.
pub async fn ensure_db_dir(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(url) else {
        warn!(%url, "in-memory database configured; data is lost on shutdown");
        return Ok(());
    };
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    info!(dir = %parent.display(), "database directory ready");
    Ok(())
}
