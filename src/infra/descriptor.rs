//! Descriptor loading — YAML file to validated `FunctionSpec`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::descriptor::{DescriptorFile, FunctionSpec};

/// Load, default-fill, and validate a descriptor file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the YAML cannot be parsed,
/// or validation finds violations (all of them are listed).
pub fn load_file(path: &Path) -> Result<FunctionSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read descriptor {}", path.display()))?;
    load_str(&content).with_context(|| format!("in descriptor {}", path.display()))
}

/// Parse descriptor YAML, apply defaults, then validate.
///
/// Defaults are applied before validation, so a descriptor that omits
/// `timeout` and `memory_size` is still valid.
///
/// # Errors
///
/// Returns an error on malformed YAML or validation violations.
pub fn load_str(content: &str) -> Result<FunctionSpec> {
    let file: DescriptorFile =
        serde_yaml::from_str(content).context("cannot parse descriptor YAML")?;
    let mut spec = file.lambda;
    spec.apply_defaults();
    spec.validate()?;
    Ok(spec)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
