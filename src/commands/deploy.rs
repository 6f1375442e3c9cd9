//! `lambda-deploy deploy` — reconcile a function against its descriptor.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ArtifactReader as _;
use crate::application::services::deploy as deploy_service;
use crate::infra;
use crate::infra::aws::AwsLambdaApi;
use crate::infra::fs::LocalArtifacts;

/// Arguments for the deploy command.
#[derive(Args)]
pub struct DeployArgs {
    /// Descriptor file for the function
    #[arg(short, long)]
    pub descriptor: PathBuf,

    /// Zip file containing the function code
    #[arg(short, long)]
    pub zip_file: String,
}

/// Run the deploy command.
///
/// The descriptor is validated and the artifact read before any remote call
/// is made, so local problems never leave half-applied remote state.
///
/// # Errors
///
/// Returns an error on an invalid descriptor, an unreadable artifact, or a
/// failed remote call.
pub async fn run(app: &AppContext, args: &DeployArgs) -> Result<()> {
    let spec = infra::descriptor::load_file(&args.descriptor)?;
    let artifact = LocalArtifacts.read_bytes(&args.zip_file)?;

    let api = AwsLambdaApi::connect(&app.target).await;
    deploy_service::deploy(&api, &app.output, &spec, &artifact).await?;

    app.output
        .success(&format!("function '{}' is deployed", spec.function_name));
    Ok(())
}
