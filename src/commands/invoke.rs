//! `lambda-deploy invoke` — invoke a function and print its response.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::LambdaApi as _;
use crate::infra::aws::AwsLambdaApi;

/// Arguments for the invoke command.
#[derive(Args)]
pub struct InvokeArgs {
    /// Name of the function to invoke
    #[arg(short, long)]
    pub name: String,

    /// JSON payload to send with the invocation
    #[arg(short, long)]
    pub payload: Option<String>,
}

/// Run the invoke command.
///
/// The response payload goes to stdout: pretty-printed when it parses as
/// JSON, raw otherwise. Data output is never suppressed by `--quiet`.
///
/// # Errors
///
/// Returns an error if the invocation call fails.
pub async fn run(app: &AppContext, args: &InvokeArgs) -> Result<()> {
    let api = AwsLambdaApi::connect(&app.target).await;
    let payload = args.payload.as_deref().map(str::as_bytes);
    let response = api.invoke(&args.name, payload).await?;

    match serde_json::from_slice::<serde_json::Value>(&response) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", String::from_utf8_lossy(&response)),
    }
    Ok(())
}
