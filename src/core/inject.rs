//! Injection flow.
//!
//! Resolves the environment, fetches credentials, rewrites the Terraform
//! variables and provider files, then emits the ECR repository name as a CI
//! output. Any error aborts before the output is written.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::ci;
use crate::core::config::Settings;
use crate::core::constants::{self, tokens};
use crate::core::env::resolve_environment;
use crate::core::rewrite::{self, RewriteReport};
use crate::core::store::{self, SecretStore, SpotifyCredentials};
use crate::core::template::TokenSet;
use crate::error::Result;

/// Summary of a completed run.
#[derive(Debug)]
pub struct InjectReport {
    pub environment: String,
    pub image_uri: String,
    pub tfvars: RewriteReport,
    pub provider: RewriteReport,
}

/// Substitutions for `terraform.tfvars`.
///
/// Order: region, access key, secret key, environment, client id, client
/// secret, image URI.
pub fn tfvars_tokens(
    settings: &Settings,
    environment: &str,
    credentials: &SpotifyCredentials,
) -> TokenSet {
    TokenSet::new()
        .with(tokens::AWS_REGION, settings.region.as_str())
        .with(tokens::ACCESS_KEY, settings.access_key_id.as_str())
        .with(tokens::SECRET_KEY, settings.secret_access_key.as_str())
        .with(tokens::ENV, environment)
        .with(tokens::CLIENT_ID, credentials.client_id.as_str())
        .with(tokens::CLIENT_SECRET, credentials.client_secret.as_str())
        .with(tokens::IMAGE_URI, settings.image_uri())
}

/// Substitutions for `provider.tf`.
///
/// Order: access key, secret key, region.
pub fn provider_tokens(settings: &Settings) -> TokenSet {
    TokenSet::new()
        .with(tokens::ACCESS_KEY, settings.access_key_id.as_str())
        .with(tokens::SECRET_KEY, settings.secret_access_key.as_str())
        .with(tokens::AWS_REGION, settings.region.as_str())
}

/// Run the full injection against `store`, writing the output binding to `out`.
///
/// # Errors
///
/// Returns the first error from secret retrieval, either file rewrite, or
/// writing the output. Nothing is written to `out` in that case.
pub fn run(
    settings: &Settings,
    store: &dyn SecretStore,
    out: &mut impl Write,
) -> Result<InjectReport> {
    let environment = resolve_environment(&settings.base_ref).to_string();
    info!(environment = %environment, "resolved environment");

    let credentials = store::fetch_credentials(store, &settings.secret_id)?;
    let image_uri = settings.image_uri();

    let tfvars = tfvars_tokens(settings, &environment, &credentials);
    let provider = provider_tokens(settings);

    let apply: fn(&Path, &TokenSet) -> Result<RewriteReport> = if settings.dry_run {
        rewrite::preview
    } else {
        rewrite::rewrite
    };
    let tfvars = apply(&settings.tfvars_path(), &tfvars)?;
    let provider = apply(&settings.provider_path(), &provider)?;

    info!(
        tfvars = tfvars.total(),
        provider = provider.total(),
        dry_run = settings.dry_run,
        "placeholders replaced"
    );

    if let Some(path) = &settings.github_output {
        ci::append_output_file(path, constants::OUTPUT_NAME, constants::ECR_REPO)?;
    }
    ci::write_set_output(out, constants::OUTPUT_NAME, constants::ECR_REPO)?;

    Ok(InjectReport {
        environment,
        image_uri,
        tfvars,
        provider,
    })
}
