//! `lambda-deploy account` — show account limits and usage.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::LambdaApi as _;
use crate::infra::aws::AwsLambdaApi;

/// Run the account command.
///
/// # Errors
///
/// Returns an error if the settings call fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let api = AwsLambdaApi::connect(&app.target).await;
    let report = api.account_settings().await?;

    app.output.header("Account settings");
    app.output
        .kv("functions", &report.function_count.to_string());
    app.output.kv(
        "code size",
        &format!(
            "{} of {} bytes",
            report.total_code_size_used, report.total_code_size_limit
        ),
    );
    app.output.kv(
        "concurrent executions",
        &report.concurrent_executions.to_string(),
    );
    Ok(())
}
