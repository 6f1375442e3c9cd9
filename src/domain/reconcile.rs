//! Reconciliation — combines the fingerprint and config signals into an
//! ordered list of deployment actions.

use crate::domain::descriptor::FunctionSpec;
use crate::domain::diff::{ConfigPatch, RemoteConfig, diff};
use crate::domain::fingerprint::fingerprint;

/// Result of fetching the remote function state.
///
/// Only the service's "resource not found" condition is recovered into
/// `NotFound`; every other fetch failure stays an error and never reaches
/// [`reconcile`].
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteFetch {
    NotFound,
    Found(RemoteConfig),
}

/// One deployment action, to be executed in list order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The function does not exist remotely: create it from the full
    /// descriptor and artifact bytes.
    CreateNew,
    /// The artifact fingerprint drifted: re-upload the code.
    UploadCode,
    /// The configuration drifted: send the minimal patch.
    UpdateConfig(ConfigPatch),
    /// Nothing to do.
    NoOp,
}

/// Decide which actions bring the remote function in line with `desired`.
///
/// Code and config drift are independent signals; both may apply in one run,
/// with the code upload ordered before the config update. A missing remote
/// function yields exactly `[CreateNew]`; a fully converged one exactly
/// `[NoOp]`.
#[must_use]
pub fn reconcile(desired: &FunctionSpec, fetch: &RemoteFetch, artifact: &[u8]) -> Vec<Action> {
    let remote = match fetch {
        RemoteFetch::NotFound => return vec![Action::CreateNew],
        RemoteFetch::Found(remote) => remote,
    };

    let mut actions = Vec::new();
    if fingerprint(artifact) != remote.code_sha256 {
        actions.push(Action::UploadCode);
    }
    let (patch, changed) = diff(desired, remote);
    if changed {
        actions.push(Action::UpdateConfig(patch));
    }
    if actions.is_empty() {
        actions.push(Action::NoOp);
    }
    actions
}

// ── Unit tests ───────────────────────────────────────────────────────────────
