//! Runtime settings.
//!
//! All environment-derived values are read once into [`Settings`] at startup
//! and passed by reference from there on.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{self, vars};
use crate::error::{ConfigError, Result};

/// Validated configuration for a single injection run.
#[derive(Clone)]
pub struct Settings {
    /// AWS account owning the ECR repository.
    pub account_id: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: Zeroizing<String>,
    /// Optional STS session token for temporary credentials.
    pub session_token: Option<Zeroizing<String>>,
    /// CI run identifier, used as the image tag.
    pub run_id: String,
    /// CI base reference; may be empty.
    pub base_ref: String,
    /// Directory containing `terraform.tfvars` and `provider.tf`.
    pub iac_dir: PathBuf,
    pub secret_id: String,
    /// File receiving `name=value` output lines, when the CI provides one.
    pub github_output: Option<PathBuf>,
    /// Compute substitutions without writing files.
    pub dry_run: bool,
}

impl Settings {
    /// Build settings from a variable lookup.
    ///
    /// `lookup` is called with environment variable names from
    /// [`constants::vars`]. Path and secret defaults come from
    /// [`constants`] and can be overridden on the returned value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if a required variable is unset or
    /// empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| -> Result<String> {
            match lookup(var) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::MissingVar { var }.into()),
            }
        };

        let settings = Self {
            account_id: require(vars::AWS_ACCOUNT_ID)?,
            region: require(vars::AWS_REGION)?,
            access_key_id: require(vars::AWS_ACCESS_KEY_ID)?,
            secret_access_key: Zeroizing::new(require(vars::AWS_SECRET_ACCESS_KEY)?),
            session_token: lookup(vars::AWS_SESSION_TOKEN)
                .filter(|t| !t.is_empty())
                .map(Zeroizing::new),
            run_id: require(vars::GITHUB_RUN_ID)?,
            base_ref: lookup(vars::GITHUB_BASE_REF).unwrap_or_default(),
            iac_dir: PathBuf::from(constants::IAC_DIR),
            secret_id: constants::SECRET_ID.to_string(),
            github_output: lookup(vars::GITHUB_OUTPUT)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            dry_run: false,
        };

        debug!(
            account_id = %settings.account_id,
            region = %settings.region,
            run_id = %settings.run_id,
            base_ref = %settings.base_ref,
            "settings loaded"
        );

        Ok(settings)
    }

    /// Path of the Terraform variables file.
    pub fn tfvars_path(&self) -> PathBuf {
        self.iac_dir.join(constants::TFVARS_FILE)
    }

    /// Path of the Terraform provider file.
    pub fn provider_path(&self) -> PathBuf {
        self.iac_dir.join(constants::PROVIDER_FILE)
    }

    /// Fully qualified ECR image URI for this run.
    ///
    /// Format: `{account}.dkr.ecr.{region}.amazonaws.com/{repo}:{run_id}`
    pub fn image_uri(&self) -> String {
        format!(
            "{}.dkr.ecr.{}.amazonaws.com/{}:{}",
            self.account_id,
            self.region,
            constants::ECR_REPO,
            self.run_id
        )
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("account_id", &self.account_id)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .field("run_id", &self.run_id)
            .field("base_ref", &self.base_ref)
            .field("iac_dir", &self.iac_dir)
            .field("secret_id", &self.secret_id)
            .field("github_output", &self.github_output)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}
