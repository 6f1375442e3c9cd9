//! `lambda-deploy delete` — delete a function.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::LambdaApi as _;
use crate::infra::aws::AwsLambdaApi;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Name of the function to delete
    #[arg(short, long)]
    pub name: String,
}

/// Run the delete command.
///
/// # Errors
///
/// Returns an error if the delete call fails.
pub async fn run(app: &AppContext, args: &DeleteArgs) -> Result<()> {
    let api = AwsLambdaApi::connect(&app.target).await;
    api.delete_function(&args.name).await?;
    app.output
        .success(&format!("function '{}' deleted", args.name));
    Ok(())
}
