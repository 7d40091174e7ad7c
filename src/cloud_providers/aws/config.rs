use anyhow::{bail, Context, Result};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;

/// How to obtain AWS credentials. `Env` delegates to the SDK's default chain
/// (environment, shared config, instance metadata); `Profile` pins a named
/// profile from the shared config files.
#[derive(Clone, Debug, Default)]
pub enum AwsConfig {
    #[default]
    Env,
    Profile(String),
}

impl AwsConfig {
    pub fn from_profile(profile: Option<String>) -> Self {
        match profile {
            Some(profile) => Self::Profile(profile),
            None => Self::Env,
        }
    }
}

/// Loads an SDK config scoped to the given region and verifies that
/// credentials actually resolve, so a misconfigured environment fails up
/// front instead of on the first API call.
pub async fn get_initialized_aws_conf(
    initialization_conf: &AwsConfig,
    region: &str,
) -> Result<SdkConfig> {
    let config_loader = aws_config::defaults(BehaviorVersion::latest());
    let config = match initialization_conf {
        AwsConfig::Profile(profile) => config_loader.profile_name(profile),
        AwsConfig::Env => config_loader,
    }
    .region(Region::new(region.to_owned()))
    .load()
    .await;

    let Some(credentials_provider) = config.credentials_provider() else {
        bail!("No AWS credentials provider available");
    };

    credentials_provider
        .provide_credentials()
        .await
        .context("Failed to resolve AWS credentials")?;

    Ok(config)
}
