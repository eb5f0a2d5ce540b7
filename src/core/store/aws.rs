//! AWS Secrets Manager backend.
//!
//! The session is built from the explicit region and static credentials in
//! [`Settings`] rather than the default provider chain, so the values that
//! end up in the Terraform files are the same ones used to authenticate.

use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::{Credentials, Region};
use tracing::trace;
use zeroize::Zeroizing;

use super::SecretStore;
use crate::core::config::Settings;
use crate::error::{Result, SecretError};

const PROVIDER_NAME: &str = "tfinject";

/// Secrets Manager client for a single region and credential pair.
pub struct AwsSecretsManager {
    region: String,
    credentials: Credentials,
}

impl AwsSecretsManager {
    /// Create a client from the run settings.
    pub fn new(settings: &Settings) -> Self {
        let credentials = Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.as_str(),
            settings.session_token.as_deref().cloned(),
            None,
            PROVIDER_NAME,
        );
        Self {
            region: settings.region.clone(),
            credentials,
        }
    }
}

impl SecretStore for AwsSecretsManager {
    fn name(&self) -> &'static str {
        "aws-secrets-manager"
    }

    fn secret_string(&self, secret_id: &str) -> Result<Zeroizing<String>> {
        trace!(region = %self.region, secret_id, "calling GetSecretValue");

        // Create a tokio runtime for the async AWS SDK
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SecretError::Runtime)?;

        rt.block_on(async {
            let config = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(self.region.clone()))
                .credentials_provider(self.credentials.clone())
                .load()
                .await;
            let client = aws_sdk_secretsmanager::Client::new(&config);

            let output = client
                .get_secret_value()
                .secret_id(secret_id)
                .send()
                .await
                .map_err(|e| SecretError::Request {
                    secret_id: secret_id.to_string(),
                    reason: aws_sdk_secretsmanager::error::DisplayErrorContext(&e).to_string(),
                })?;

            let payload = output
                .secret_string()
                .ok_or_else(|| SecretError::NoSecretString(secret_id.to_string()))?;

            trace!(payload_len = payload.len(), "secret retrieved");
            Ok(Zeroizing::new(payload.to_string()))
        })
    }
}
