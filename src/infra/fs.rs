//! Local filesystem adapter — artifact reading with `~` expansion.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ArtifactReader;

/// Production filesystem implementation of `ArtifactReader`.
pub struct LocalArtifacts;

impl ArtifactReader for LocalArtifacts {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let expanded = expand_home(path)?;
        std::fs::read(&expanded)
            .with_context(|| format!("cannot read artifact {}", expanded.display()))
    }
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// # Errors
///
/// Returns an error if the path starts with `~` and the home directory
/// cannot be determined.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if path == "~" {
        return home_dir();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }
    Ok(PathBuf::from(path))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
