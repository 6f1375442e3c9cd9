//! Deploy service tests against a mocked `LambdaApi` port.

#![allow(clippy::expect_used)]

use std::sync::Mutex;

use anyhow::Result;

use lambda_deploy::application::ports::{
    AccountReport, FunctionSummary, LambdaApi, ProgressReporter,
};
use lambda_deploy::application::services::deploy::deploy;
use lambda_deploy::domain::descriptor::FunctionSpec;
use lambda_deploy::domain::diff::{ConfigPatch, RemoteConfig};
use lambda_deploy::domain::fingerprint::fingerprint;
use lambda_deploy::domain::reconcile::{Action, RemoteFetch};

const ARTIFACT: &[u8] = b"zip bytes";

// ── Helpers ──────────────────────────────────────────────────────────────────

fn desired() -> FunctionSpec {
    let mut spec = FunctionSpec {
        function_name: "my-function".to_string(),
        handler: "handler.main".to_string(),
        runtime: "python3.12".to_string(),
        role: "arn:aws:iam::123456789012:role/lambda".to_string(),
        ..FunctionSpec::default()
    };
    spec.apply_defaults();
    spec
}

fn converged_remote() -> RemoteConfig {
    let spec = desired();
    RemoteConfig {
        description: Some(spec.description.clone()),
        handler: Some(spec.handler.clone()),
        runtime: Some(spec.runtime.clone()),
        role: Some(spec.role.clone()),
        memory_size: Some(spec.memory_size),
        timeout: Some(spec.timeout),
        environment: None,
        vpc_config: None,
        code_sha256: fingerprint(ARTIFACT),
    }
}

/// A reporter that swallows everything.
struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

// ── Mock ─────────────────────────────────────────────────────────────────────

/// A mock `LambdaApi` that records calls in order and returns a configured
/// fetch result. `fail_on` makes the named call return an error.
struct MockApi {
    fetch: Option<RemoteFetch>,
    fail_on: Option<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    fn new(fetch: Option<RemoteFetch>) -> Self {
        Self {
            fetch,
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_on(fetch: Option<RemoteFetch>, call: &'static str) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::new(fetch)
        }
    }

    fn record(&self, call: &str) -> Result<()> {
        self.calls.lock().expect("lock").push(call.to_string());
        if self.fail_on == Some(call) {
            anyhow::bail!("simulated {call} failure");
        }
        Ok(())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

impl LambdaApi for MockApi {
    async fn fetch_function(&self, _name: &str) -> Result<RemoteFetch> {
        self.record("fetch")?;
        self.fetch
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no fetch result configured"))
    }

    async fn create_function(&self, _spec: &FunctionSpec, _artifact: &[u8]) -> Result<()> {
        self.record("create")
    }

    async fn update_code(&self, _name: &str, _publish: bool, _artifact: &[u8]) -> Result<()> {
        self.record("update_code")
    }

    async fn update_config(&self, patch: &ConfigPatch) -> Result<()> {
        self.record(&format!(
            "update_config({})",
            patch.changed_fields().join(",")
        ))
    }

    async fn list_functions(&self) -> Result<Vec<FunctionSummary>> {
        anyhow::bail!("not expected")
    }

    async fn delete_function(&self, _name: &str) -> Result<()> {
        anyhow::bail!("not expected")
    }

    async fn invoke(&self, _name: &str, _payload: Option<&[u8]>) -> Result<Vec<u8>> {
        anyhow::bail!("not expected")
    }

    async fn account_settings(&self) -> Result<AccountReport> {
        anyhow::bail!("not expected")
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_function_is_created() {
    let api = MockApi::new(Some(RemoteFetch::NotFound));
    let actions = deploy(&api, &SilentReporter, &desired(), ARTIFACT)
        .await
        .expect("deploy should succeed");
    assert_eq!(actions, vec![Action::CreateNew]);
    assert_eq!(api.calls(), vec!["fetch", "create"]);
}

#[tokio::test]
async fn converged_function_makes_no_mutating_calls() {
    let api = MockApi::new(Some(RemoteFetch::Found(converged_remote())));
    let actions = deploy(&api, &SilentReporter, &desired(), ARTIFACT)
        .await
        .expect("deploy should succeed");
    assert_eq!(actions, vec![Action::NoOp]);
    assert_eq!(api.calls(), vec!["fetch"], "no-op must not touch the remote");
}

#[tokio::test]
async fn code_drift_only_uploads_code() {
    let api = MockApi::new(Some(RemoteFetch::Found(converged_remote())));
    let actions = deploy(&api, &SilentReporter, &desired(), b"new zip bytes")
        .await
        .expect("deploy should succeed");
    assert_eq!(actions, vec![Action::UploadCode]);
    assert_eq!(api.calls(), vec!["fetch", "update_code"]);
}

#[tokio::test]
async fn config_drift_only_sends_minimal_patch() {
    let mut remote = converged_remote();
    remote.memory_size = Some(512);
    let api = MockApi::new(Some(RemoteFetch::Found(remote)));
    deploy(&api, &SilentReporter, &desired(), ARTIFACT)
        .await
        .expect("deploy should succeed");
    assert_eq!(api.calls(), vec!["fetch", "update_config(memory_size)"]);
}

#[tokio::test]
async fn code_and_config_drift_upload_code_first() {
    let mut remote = converged_remote();
    remote.timeout = Some(300);
    let api = MockApi::new(Some(RemoteFetch::Found(remote)));
    deploy(&api, &SilentReporter, &desired(), b"new zip bytes")
        .await
        .expect("deploy should succeed");
    assert_eq!(
        api.calls(),
        vec!["fetch", "update_code", "update_config(timeout)"]
    );
}

#[tokio::test]
async fn fetch_error_aborts_before_any_mutation() {
    let api = MockApi::failing_on(None, "fetch");
    let err = deploy(&api, &SilentReporter, &desired(), ARTIFACT)
        .await
        .expect_err("fetch failure must propagate");
    assert!(err.to_string().contains("simulated fetch failure"));
    assert_eq!(api.calls(), vec!["fetch"]);
}

#[tokio::test]
async fn code_upload_failure_stops_before_config_update() {
    let mut remote = converged_remote();
    remote.timeout = Some(300);
    let api = MockApi::failing_on(Some(RemoteFetch::Found(remote)), "update_code");
    let err = deploy(&api, &SilentReporter, &desired(), b"new zip bytes")
        .await
        .expect_err("upload failure must propagate");
    assert!(err.to_string().contains("simulated update_code failure"));
    assert_eq!(
        api.calls(),
        vec!["fetch", "update_code"],
        "config update must not run after a failed upload"
    );
}
