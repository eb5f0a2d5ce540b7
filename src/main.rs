//! tfinject - fill Terraform placeholders from Secrets Manager and CI context.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tfinject::cli::{execute, output, Cli};
use tfinject::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support.
    // Logs go to stderr; stdout carries the CI output binding.
    let filter = EnvFilter::try_from_env("TFINJECT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("tfinject=debug")
        } else {
            EnvFilter::new("tfinject=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingVar { var }) => Some(format!("export {}", var)),
            Error::Secret(_) => {
                Some("check the AWS credentials and that the secret exists in AWS_REGION".into())
            }
            Error::Rewrite(_) => {
                Some("run from a directory next to ../iac or pass --iac-dir".into())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
