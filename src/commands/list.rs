//! `lambda-deploy list` — list deployed functions.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::LambdaApi as _;
use crate::infra::aws::AwsLambdaApi;

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the listing call fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let api = AwsLambdaApi::connect(&app.target).await;
    let functions = api.list_functions().await?;

    if functions.is_empty() {
        app.output.info("no functions deployed");
        return Ok(());
    }

    app.output.header("Deployed functions");
    for function in &functions {
        let runtime = function.runtime.as_deref().unwrap_or("-");
        let memory = function
            .memory_size
            .map_or_else(|| "-".to_string(), |m| format!("{m} MB"));
        let timeout = function
            .timeout
            .map_or_else(|| "-".to_string(), |t| format!("{t}s"));
        app.output.kv(
            &function.name,
            &format!("{runtime} · {memory} · {timeout}"),
        );
    }
    Ok(())
}
