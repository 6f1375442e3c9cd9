//! Configuration differ — minimal patch between desired and remote state.
//!
//! The remote service reports every scalar as optionally absent; "never set"
//! and "explicitly empty" are distinct states and must stay distinct, so
//! every remote field is an `Option` rather than a sentinel empty value.
//!
//! Inclusion rule per field: present in remote and unequal to desired, OR
//! absent in remote while desired is non-default/non-empty. Fields absent on
//! both sides are left out of the patch so an undrifted function never
//! triggers a spurious update.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::descriptor::{FunctionSpec, VpcConfig};

/// The observed remote state of a deployed function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteConfig {
    pub description: Option<String>,
    pub handler: Option<String>,
    pub runtime: Option<String>,
    pub role: Option<String>,
    pub memory_size: Option<i32>,
    pub timeout: Option<i32>,
    pub environment: Option<BTreeMap<String, String>>,
    pub vpc_config: Option<RemoteVpcConfig>,
    /// Base64 SHA-256 of the deployed artifact, as reported by the service.
    pub code_sha256: String,
}

/// Remote network placement. Unlike the descriptor's [`VpcConfig`], the
/// identifier lists may legitimately be empty here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteVpcConfig {
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
}

/// Minimal set of fields to send in an update-configuration call.
///
/// The function name is always set — it is the update key. Every other
/// field is `Some` only when it differs from remote state. A
/// `Some(VpcConfig)` with empty id lists instructs the service to clear the
/// network placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    pub function_name: String,
    pub description: Option<String>,
    pub handler: Option<String>,
    pub runtime: Option<String>,
    pub role: Option<String>,
    pub memory_size: Option<i32>,
    pub timeout: Option<i32>,
    pub environment: Option<BTreeMap<String, String>>,
    pub vpc_config: Option<VpcConfig>,
}

impl ConfigPatch {
    /// Names of the fields carried by this patch, for drift reporting.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.description.is_some() {
            fields.push("description");
        }
        if self.handler.is_some() {
            fields.push("handler");
        }
        if self.runtime.is_some() {
            fields.push("runtime");
        }
        if self.role.is_some() {
            fields.push("role");
        }
        if self.memory_size.is_some() {
            fields.push("memory_size");
        }
        if self.timeout.is_some() {
            fields.push("timeout");
        }
        if self.environment.is_some() {
            fields.push("environment");
        }
        if self.vpc_config.is_some() {
            fields.push("vpc_config");
        }
        fields
    }
}

/// Compare the desired descriptor against the remote configuration.
///
/// Returns the minimal patch plus a `changed` flag. The patch always carries
/// the function name, so callers must check `changed` — not patch
/// non-emptiness — before issuing an update.
///
/// Pure and deterministic: patch content does not depend on map or set
/// insertion order.
#[must_use]
pub fn diff(desired: &FunctionSpec, remote: &RemoteConfig) -> (ConfigPatch, bool) {
    let mut patch = ConfigPatch {
        function_name: desired.function_name.clone(),
        ..ConfigPatch::default()
    };
    let mut changed = false;

    if str_differs(remote.description.as_deref(), &desired.description) {
        patch.description = Some(desired.description.clone());
        changed = true;
    }
    if str_differs(remote.handler.as_deref(), &desired.handler) {
        patch.handler = Some(desired.handler.clone());
        changed = true;
    }
    if str_differs(remote.runtime.as_deref(), &desired.runtime) {
        patch.runtime = Some(desired.runtime.clone());
        changed = true;
    }
    if str_differs(remote.role.as_deref(), &desired.role) {
        patch.role = Some(desired.role.clone());
        changed = true;
    }
    if num_differs(remote.memory_size, desired.memory_size) {
        patch.memory_size = Some(desired.memory_size);
        changed = true;
    }
    if num_differs(remote.timeout, desired.timeout) {
        patch.timeout = Some(desired.timeout);
        changed = true;
    }

    // The remote API has no partial map update, so any difference replaces
    // the entire desired map (possibly empty, which clears it).
    match &remote.environment {
        None => {
            if !desired.environment.is_empty() {
                patch.environment = Some(desired.environment.clone());
                changed = true;
            }
        }
        Some(remote_env) => {
            if *remote_env != desired.environment {
                patch.environment = Some(desired.environment.clone());
                changed = true;
            }
        }
    }

    match (&remote.vpc_config, &desired.vpc_config) {
        (None, None) => {}
        (None, Some(want)) => {
            patch.vpc_config = Some(want.clone());
            changed = true;
        }
        (Some(_), None) => {
            // An empty placement tells the service to detach the function.
            patch.vpc_config = Some(VpcConfig::default());
            changed = true;
        }
        (Some(have), Some(want)) => {
            if !placement_eq(have, want) {
                patch.vpc_config = Some(want.clone());
                changed = true;
            }
        }
    }

    (patch, changed)
}

/// "Present and unequal" or "absent while desired is non-empty".
fn str_differs(remote: Option<&str>, desired: &str) -> bool {
    match remote {
        None => !desired.is_empty(),
        Some(value) => value != desired,
    }
}

/// "Present and unequal" or "absent while desired is non-zero".
fn num_differs(remote: Option<i32>, desired: i32) -> bool {
    match remote {
        None => desired != 0,
        Some(value) => value != desired,
    }
}

/// Symmetric set equality on both identifier lists, duplicates ignored.
fn placement_eq(remote: &RemoteVpcConfig, desired: &VpcConfig) -> bool {
    id_set_eq(&remote.subnet_ids, &desired.subnet_ids)
        && id_set_eq(&remote.security_group_ids, &desired.security_group_ids)
}

fn id_set_eq(a: &[String], b: &[String]) -> bool {
    let a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let b: BTreeSet<&str> = b.iter().map(String::as_str).collect();
    a == b
}

// ── Unit tests ───────────────────────────────────────────────────────────────
