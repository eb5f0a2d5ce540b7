//! Constants used throughout tfinject.
//!
//! Centralizes placeholder tokens, file names and fixed deployment values.

/// Default directory holding the Terraform configuration, relative to the
/// working directory.
pub const IAC_DIR: &str = "../iac";

/// Terraform variables file name.
pub const TFVARS_FILE: &str = "terraform.tfvars";

/// Terraform provider/backend file name.
pub const PROVIDER_FILE: &str = "provider.tf";

/// Secrets Manager id of the Spotify API credentials.
pub const SECRET_ID: &str = "/spotify/credentials";

/// ECR repository holding the lambda images.
pub const ECR_REPO: &str = "spotify-lambda-images-ecr";

/// Name of the CI output variable carrying [`ECR_REPO`].
pub const OUTPUT_NAME: &str = "ecr_repo_name";

/// Placeholder tokens as they appear in the template files.
pub mod tokens {
    pub const AWS_REGION: &str = "aws_region_placeholder";
    pub const ACCESS_KEY: &str = "access_key_placeholder";
    pub const SECRET_KEY: &str = "secret_key_placeholder";
    pub const ENV: &str = "env_placeholder";
    pub const CLIENT_ID: &str = "client_id_placeholder";
    pub const CLIENT_SECRET: &str = "client_secret_placeholder";
    pub const IMAGE_URI: &str = "image_uri_placeholder";
}

/// Environment variable names read at startup.
pub mod vars {
    pub const AWS_ACCOUNT_ID: &str = "AWS_ACCOUNT_ID";
    pub const AWS_REGION: &str = "AWS_REGION";
    pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
    pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
    pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
    pub const GITHUB_RUN_ID: &str = "GITHUB_RUN_ID";
    pub const GITHUB_BASE_REF: &str = "GITHUB_BASE_REF";
    pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
    pub const TEST_SECRET: &str = "TFINJECT_TEST_SECRET";
}
