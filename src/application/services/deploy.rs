//! Application service — the deploy use-case.
//!
//! Drives the pure reconciliation engine against the `LambdaApi` port:
//! fetch the remote snapshot once, compute the action list, execute it in
//! order. A fetch error other than "resource not found" aborts before any
//! mutating call; no partial-state rollback is attempted — the remote
//! service stays the source of truth for whatever was applied.

use anyhow::Result;

use crate::application::ports::{LambdaApi, ProgressReporter};
use crate::domain::descriptor::FunctionSpec;
use crate::domain::reconcile::{Action, reconcile};

/// Deploy `desired` with the given artifact bytes.
///
/// Returns the actions that were performed, in execution order.
///
/// # Errors
///
/// Returns an error if the remote fetch fails (other than "not found") or
/// if any create/update call fails. Actions already executed are not rolled
/// back.
pub async fn deploy(
    api: &impl LambdaApi,
    reporter: &impl ProgressReporter,
    desired: &FunctionSpec,
    artifact: &[u8],
) -> Result<Vec<Action>> {
    let fetch = api.fetch_function(&desired.function_name).await?;
    let actions = reconcile(desired, &fetch, artifact);

    for action in &actions {
        match action {
            Action::CreateNew => {
                reporter.step(&format!(
                    "function '{}' is not deployed, creating it",
                    desired.function_name
                ));
                api.create_function(desired, artifact).await?;
                reporter.success("function created");
            }
            Action::UploadCode => {
                reporter.step("artifact fingerprint differs, uploading code");
                api.update_code(&desired.function_name, desired.publish, artifact)
                    .await?;
                reporter.success("code uploaded");
            }
            Action::UpdateConfig(patch) => {
                reporter.step(&format!(
                    "configuration drift: {}",
                    patch.changed_fields().join(", ")
                ));
                api.update_config(patch).await?;
                reporter.success("configuration updated");
            }
            Action::NoOp => {
                reporter.success("function is up to date, nothing to do");
            }
        }
    }

    Ok(actions)
}
