//! AWS SDK adapter — implements the `LambdaApi` port with `aws-sdk-lambda`.
//!
//! The only error condition handled locally is `ResourceNotFoundException`
//! on `GetFunction`, which becomes `RemoteFetch::NotFound` and drives the
//! create path. Everything else propagates with context. Retry policy, if
//! any, belongs to the SDK's transport layer, not here.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::{
    Environment, FunctionCode, FunctionConfiguration, Runtime, VpcConfig as SdkVpcConfig,
};

use crate::application::ports::{AccountReport, FunctionSummary, LambdaApi};
use crate::domain::descriptor::{FunctionSpec, VpcConfig};
use crate::domain::diff::{ConfigPatch, RemoteConfig, RemoteVpcConfig};
use crate::domain::reconcile::RemoteFetch;

/// Where the client should point: optional profile and region overrides.
/// When `None`, the SDK's own resolution (env vars, shared config) applies.
#[derive(Debug, Clone, Default)]
pub struct AwsTarget {
    pub profile: Option<String>,
    pub region: Option<String>,
}

/// Production implementation of the `LambdaApi` port.
pub struct AwsLambdaApi {
    client: aws_sdk_lambda::Client,
}

impl AwsLambdaApi {
    /// Build a client from shared AWS configuration, honoring the target's
    /// profile and region overrides.
    pub async fn connect(target: &AwsTarget) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &target.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &target.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let config = loader.load().await;
        Self {
            client: aws_sdk_lambda::Client::new(&config),
        }
    }
}

impl LambdaApi for AwsLambdaApi {
    async fn fetch_function(&self, name: &str) -> Result<RemoteFetch> {
        match self
            .client
            .get_function()
            .function_name(name)
            .send()
            .await
        {
            Ok(output) => {
                let config = output
                    .configuration()
                    .context("service returned a function without configuration")?;
                Ok(RemoteFetch::Found(remote_config_from(config)))
            }
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_resource_not_found_exception() {
                    Ok(RemoteFetch::NotFound)
                } else {
                    Err(anyhow::Error::from(service_err))
                        .with_context(|| format!("fetching function '{name}'"))
                }
            }
        }
    }

    async fn create_function(&self, spec: &FunctionSpec, artifact: &[u8]) -> Result<()> {
        let code = FunctionCode::builder()
            .zip_file(Blob::new(artifact.to_vec()))
            .build();
        let mut request = self
            .client
            .create_function()
            .function_name(spec.function_name.as_str())
            .description(spec.description.as_str())
            .handler(spec.handler.as_str())
            .runtime(Runtime::from(spec.runtime.as_str()))
            .role(spec.role.as_str())
            .memory_size(spec.memory_size)
            .timeout(spec.timeout)
            .publish(spec.publish)
            .code(code);
        if !spec.environment.is_empty() {
            request = request.environment(environment_from(&spec.environment));
        }
        if let Some(vpc) = &spec.vpc_config {
            request = request.vpc_config(vpc_from(vpc));
        }
        request
            .send()
            .await
            .with_context(|| format!("creating function '{}'", spec.function_name))?;
        Ok(())
    }

    async fn update_code(&self, name: &str, publish: bool, artifact: &[u8]) -> Result<()> {
        self.client
            .update_function_code()
            .function_name(name)
            .publish(publish)
            .zip_file(Blob::new(artifact.to_vec()))
            .send()
            .await
            .with_context(|| format!("uploading code for function '{name}'"))?;
        Ok(())
    }

    async fn update_config(&self, patch: &ConfigPatch) -> Result<()> {
        self.client
            .update_function_configuration()
            .function_name(patch.function_name.as_str())
            .set_description(patch.description.clone())
            .set_handler(patch.handler.clone())
            .set_runtime(patch.runtime.as_deref().map(Runtime::from))
            .set_role(patch.role.clone())
            .set_memory_size(patch.memory_size)
            .set_timeout(patch.timeout)
            .set_environment(patch.environment.as_ref().map(environment_from))
            .set_vpc_config(patch.vpc_config.as_ref().map(vpc_from))
            .send()
            .await
            .with_context(|| {
                format!("updating configuration of function '{}'", patch.function_name)
            })?;
        Ok(())
    }

    async fn list_functions(&self) -> Result<Vec<FunctionSummary>> {
        let mut summaries = Vec::new();
        let mut marker: Option<String> = None;
        loop {
            let mut request = self.client.list_functions();
            if let Some(m) = &marker {
                request = request.marker(m.as_str());
            }
            let page = request.send().await.context("listing functions")?;
            for config in page.functions() {
                summaries.push(FunctionSummary {
                    name: config.function_name().unwrap_or_default().to_owned(),
                    runtime: config.runtime().map(|r| r.as_str().to_owned()),
                    memory_size: config.memory_size(),
                    timeout: config.timeout(),
                    last_modified: config.last_modified().map(str::to_owned),
                });
            }
            match page.next_marker() {
                Some(next) => marker = Some(next.to_owned()),
                None => break,
            }
        }
        Ok(summaries)
    }

    async fn delete_function(&self, name: &str) -> Result<()> {
        self.client
            .delete_function()
            .function_name(name)
            .send()
            .await
            .with_context(|| format!("deleting function '{name}'"))?;
        Ok(())
    }

    async fn invoke(&self, name: &str, payload: Option<&[u8]>) -> Result<Vec<u8>> {
        let mut request = self.client.invoke().function_name(name);
        if let Some(body) = payload {
            request = request.payload(Blob::new(body.to_vec()));
        }
        let output = request
            .send()
            .await
            .with_context(|| format!("invoking function '{name}'"))?;
        Ok(output
            .payload()
            .map(|blob| blob.as_ref().to_vec())
            .unwrap_or_default())
    }

    async fn account_settings(&self) -> Result<AccountReport> {
        let output = self
            .client
            .get_account_settings()
            .send()
            .await
            .context("fetching account settings")?;
        let mut report = AccountReport::default();
        if let Some(limit) = output.account_limit() {
            report.total_code_size_limit = limit.total_code_size();
            report.concurrent_executions = limit.concurrent_executions();
        }
        if let Some(usage) = output.account_usage() {
            report.total_code_size_used = usage.total_code_size();
            report.function_count = usage.function_count();
        }
        Ok(report)
    }
}

// ── Wire conversions ─────────────────────────────────────────────────────────

/// Convert the service's configuration shape into the domain snapshot,
/// preserving the absent/present distinction per field.
fn remote_config_from(config: &FunctionConfiguration) -> RemoteConfig {
    RemoteConfig {
        description: config.description().map(str::to_owned),
        handler: config.handler().map(str::to_owned),
        runtime: config.runtime().map(|r| r.as_str().to_owned()),
        role: config.role().map(str::to_owned),
        memory_size: config.memory_size(),
        timeout: config.timeout(),
        environment: config
            .environment()
            .and_then(|env| env.variables())
            .map(|vars| {
                vars.iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect::<BTreeMap<String, String>>()
            }),
        // The service reports an all-empty placement for non-VPC functions;
        // normalize that to "no placement" before the differ sees it.
        vpc_config: config
            .vpc_config()
            .map(|vpc| RemoteVpcConfig {
                subnet_ids: vpc.subnet_ids().to_vec(),
                security_group_ids: vpc.security_group_ids().to_vec(),
            })
            .filter(|vpc| !(vpc.subnet_ids.is_empty() && vpc.security_group_ids.is_empty())),
        code_sha256: config.code_sha256().unwrap_or_default().to_owned(),
    }
}

fn environment_from(variables: &BTreeMap<String, String>) -> Environment {
    let variables: HashMap<String, String> = variables
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Environment::builder().set_variables(Some(variables)).build()
}

fn vpc_from(vpc: &VpcConfig) -> SdkVpcConfig {
    SdkVpcConfig::builder()
        .set_subnet_ids(Some(vpc.subnet_ids.clone()))
        .set_security_group_ids(Some(vpc.security_group_ids.clone()))
        .build()
}
