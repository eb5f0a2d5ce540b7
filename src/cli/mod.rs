//! Command-line interface.

pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::config::Settings;
use crate::core::constants::{self, vars};
use crate::core::inject::{self, InjectReport};
use crate::core::store::SecretStore;
use crate::error::Result;

/// Inject Secrets Manager credentials and CI context into Terraform files.
///
/// Every option defaults to the environment variable shown, so running with
/// no arguments inside a CI job is the normal usage.
#[derive(Parser)]
#[command(name = "tfinject", version, about, long_about = None)]
pub struct Cli {
    /// AWS account id owning the ECR repository
    #[arg(long, env = vars::AWS_ACCOUNT_ID)]
    pub account_id: Option<String>,

    /// AWS region
    #[arg(long, env = vars::AWS_REGION)]
    pub region: Option<String>,

    /// AWS access key id
    #[arg(long, env = vars::AWS_ACCESS_KEY_ID)]
    pub access_key_id: Option<String>,

    /// AWS secret access key
    #[arg(long, env = vars::AWS_SECRET_ACCESS_KEY, hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// CI run id, used as the image tag
    #[arg(long, env = vars::GITHUB_RUN_ID)]
    pub run_id: Option<String>,

    /// CI base reference; its last path segment is the environment name
    #[arg(long, env = vars::GITHUB_BASE_REF)]
    pub base_ref: Option<String>,

    /// Directory containing terraform.tfvars and provider.tf
    #[arg(long, default_value = constants::IAC_DIR)]
    pub iac_dir: PathBuf,

    /// Secrets Manager id of the Spotify credentials
    #[arg(long, default_value = constants::SECRET_ID)]
    pub secret_id: String,

    /// Compute substitutions without writing the files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Value for a variable, preferring the parsed argument and falling back
    /// to the process environment for variables without a flag.
    fn lookup(&self, var: &str) -> Option<String> {
        let arg = match var {
            vars::AWS_ACCOUNT_ID => &self.account_id,
            vars::AWS_REGION => &self.region,
            vars::AWS_ACCESS_KEY_ID => &self.access_key_id,
            vars::AWS_SECRET_ACCESS_KEY => &self.secret_access_key,
            vars::GITHUB_RUN_ID => &self.run_id,
            vars::GITHUB_BASE_REF => &self.base_ref,
            _ => return std::env::var(var).ok(),
        };
        arg.clone()
    }

    /// Build validated settings from the parsed arguments.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::from_lookup(|var| self.lookup(var))?;
        settings.iac_dir = self.iac_dir.clone();
        settings.secret_id = self.secret_id.clone();
        settings.dry_run = self.dry_run;
        Ok(settings)
    }
}

/// Run the injection described by `cli`.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    debug!(?settings, "starting injection");

    let store = secret_store(&settings)?;
    let report = inject::run(&settings, store.as_ref(), &mut std::io::stdout().lock())?;

    if settings.dry_run {
        summarize(&report);
    }
    Ok(())
}

#[cfg(not(feature = "test-store"))]
fn secret_store(settings: &Settings) -> Result<Box<dyn SecretStore>> {
    let store = crate::core::store::AwsSecretsManager::new(settings);
    Ok(Box::new(store))
}

#[cfg(feature = "test-store")]
fn secret_store(settings: &Settings) -> Result<Box<dyn SecretStore>> {
    let mut store = crate::core::store::MemoryStore::new();
    if let Ok(payload) = std::env::var(vars::TEST_SECRET) {
        store.insert(settings.secret_id.as_str(), payload);
    }
    Ok(Box::new(store))
}

fn summarize(report: &InjectReport) {
    output::kv("environment", format!("{:?}", report.environment));
    output::kv("image", &report.image_uri);
    for file in [&report.tfvars, &report.provider] {
        output::kv(
            file.path.display(),
            format!("{} replaced (dry run, not written)", file.total()),
        );
    }
}
