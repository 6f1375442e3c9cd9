//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;
use crate::infra::aws::AwsTarget;

/// Deploys and reconciles AWS Lambda functions from YAML descriptors
#[derive(Parser)]
#[command(
    name = "lambda-deploy",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// AWS profile (optional, falls back to AWS_PROFILE or the default profile)
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// AWS region (optional, falls back to AWS_REGION or the profile's region)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deploy a function from a descriptor
    Deploy(commands::deploy::DeployArgs),

    /// List deployed functions
    List,

    /// Invoke a function and print its response
    Invoke(commands::invoke::InvokeArgs),

    /// Delete a function
    Delete(commands::delete::DeleteArgs),

    /// Show account limits and usage
    Account,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            profile,
            region,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(no_color, quiet, AwsTarget { profile, region });
        match command {
            Command::Deploy(args) => commands::deploy::run(&app, &args).await,
            Command::List => commands::list::run(&app).await,
            Command::Invoke(args) => commands::invoke::run(&app, &args).await,
            Command::Delete(args) => commands::delete::run(&app, &args).await,
            Command::Account => commands::account::run(&app).await,
        }
    }
}
