//! lambda-deploy — deploys and reconciles AWS Lambda functions

use clap::Parser;

use lambda_deploy::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
