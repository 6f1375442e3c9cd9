//! Domain layer — pure reconciliation logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod descriptor;
pub mod diff;
pub mod error;
pub mod fingerprint;
pub mod reconcile;

pub use descriptor::{DescriptorFile, FunctionSpec, VpcConfig};
pub use diff::{ConfigPatch, RemoteConfig, RemoteVpcConfig, diff};
pub use error::DescriptorError;
pub use fingerprint::fingerprint;
pub use reconcile::{Action, RemoteFetch, reconcile};
