//! Desired-state descriptor — defaults and validation.
//!
//! The descriptor is parsed once per invocation from a YAML file (see
//! `crate::infra::descriptor`) and never mutated afterwards. Everything in
//! this module is a pure function over the descriptor value.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::error::DescriptorError;

/// Default function timeout in seconds, applied when the descriptor omits it.
pub const DEFAULT_TIMEOUT_SECONDS: i32 = 3;
/// Default memory size in MB, applied when the descriptor omits it.
pub const DEFAULT_MEMORY_MB: i32 = 128;

/// Top-level shape of the descriptor file: the function spec lives under a
/// `lambda:` key.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptorFile {
    pub lambda: FunctionSpec,
}

/// The declarative target state for one Lambda function.
///
/// Scalar fields default to their zero value when omitted from the YAML;
/// [`FunctionSpec::apply_defaults`] then fills in the numeric defaults
/// before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FunctionSpec {
    #[serde(default)]
    pub function_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub handler: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub memory_size: i32,
    #[serde(default)]
    pub timeout: i32,
    #[serde(default)]
    pub publish: bool,
    /// Environment variables. Order is irrelevant; a `BTreeMap` keeps diff
    /// output independent of YAML insertion order.
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
    /// Private network placement. When present, both id lists must be
    /// non-empty.
    #[serde(default)]
    pub vpc_config: Option<VpcConfig>,
}

/// Subnet and security-group identifiers for VPC attachment.
///
/// An all-empty value is only ever produced by the differ, where it means
/// "clear the placement remotely".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VpcConfig {
    #[serde(default)]
    pub subnet_ids: Vec<String>,
    #[serde(default)]
    pub security_group_ids: Vec<String>,
}

impl VpcConfig {
    /// `true` when both identifier lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subnet_ids.is_empty() && self.security_group_ids.is_empty()
    }
}

impl FunctionSpec {
    /// Fill in unset numeric fields: timeout → 3s, memory → 128 MB.
    ///
    /// Idempotent — applying twice yields the same result as once. No other
    /// field is touched.
    pub fn apply_defaults(&mut self) {
        if self.timeout == 0 {
            self.timeout = DEFAULT_TIMEOUT_SECONDS;
        }
        if self.memory_size == 0 {
            self.memory_size = DEFAULT_MEMORY_MB;
        }
    }

    /// Validate the descriptor, collecting *all* violations rather than
    /// failing on the first.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::Invalid`] listing every violation when any
    /// rule fails.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let mut violations: Vec<String> = Vec::new();

        if self.function_name.is_empty() {
            violations.push("missing function_name".to_string());
        }
        if self.handler.is_empty() {
            violations.push("missing handler".to_string());
        }
        if self.runtime.is_empty() {
            violations.push("missing runtime".to_string());
        }
        if self.role.is_empty() {
            violations.push("missing role".to_string());
        }
        if self.memory_size <= 0 {
            violations.push("memory_size must be positive".to_string());
        }
        if self.timeout <= 0 {
            violations.push("timeout must be positive".to_string());
        }
        if let Some(vpc) = &self.vpc_config {
            if vpc.subnet_ids.is_empty() {
                violations.push("vpc_config needs at least one subnet id".to_string());
            }
            if vpc.security_group_ids.is_empty() {
                violations.push("vpc_config needs at least one security group id".to_string());
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DescriptorError::Invalid { violations })
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
