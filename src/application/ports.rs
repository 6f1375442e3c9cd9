//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::descriptor::FunctionSpec;
use crate::domain::diff::ConfigPatch;
use crate::domain::reconcile::RemoteFetch;

// ── Value Types ───────────────────────────────────────────────────────────────

/// One row of `list` output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionSummary {
    pub name: String,
    pub runtime: Option<String>,
    pub memory_size: Option<i32>,
    pub timeout: Option<i32>,
    pub last_modified: Option<String>,
}

/// Account limits and usage, for the `account` subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountReport {
    /// Maximum total code size allowed, in bytes.
    pub total_code_size_limit: i64,
    /// Concurrent execution limit.
    pub concurrent_executions: i32,
    /// Code size currently in use, in bytes.
    pub total_code_size_used: i64,
    /// Number of deployed functions.
    pub function_count: i64,
}

// ── Remote Service Port ───────────────────────────────────────────────────────

/// The remote function service. One production implementation
/// (`crate::infra::aws::AwsLambdaApi`); tests substitute mocks.
#[allow(async_fn_in_trait)]
pub trait LambdaApi {
    /// Fetch the deployed state of `name`.
    ///
    /// Maps the service's "resource not found" to `RemoteFetch::NotFound`;
    /// every other failure is an error.
    async fn fetch_function(&self, name: &str) -> Result<RemoteFetch>;
    /// Create the function from the full descriptor and artifact bytes.
    async fn create_function(&self, spec: &FunctionSpec, artifact: &[u8]) -> Result<()>;
    /// Replace the deployed artifact.
    async fn update_code(&self, name: &str, publish: bool, artifact: &[u8]) -> Result<()>;
    /// Apply a minimal configuration patch.
    async fn update_config(&self, patch: &ConfigPatch) -> Result<()>;
    /// List deployed functions.
    async fn list_functions(&self) -> Result<Vec<FunctionSummary>>;
    /// Delete a function.
    async fn delete_function(&self, name: &str) -> Result<()>;
    /// Invoke a function, returning the raw response payload.
    async fn invoke(&self, name: &str, payload: Option<&[u8]>) -> Result<Vec<u8>>;
    /// Fetch account limits and usage.
    async fn account_settings(&self) -> Result<AccountReport>;
}

// ── Artifact Port ─────────────────────────────────────────────────────────────

/// Abstracts reading the code artifact from the local filesystem.
pub trait ArtifactReader {
    /// Read the artifact bytes, expanding a leading `~`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
