//! tfinject - deployment-time configuration injector for Terraform.
//!
//! Fetches Spotify API credentials from AWS Secrets Manager, fills the
//! placeholder tokens in `terraform.tfvars` and `provider.tf`, and emits the
//! ECR repository name as a CI output.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── output        # stderr formatting helpers
//! └── core/             # Core library components
//!     ├── config        # Settings read once at startup
//!     ├── env           # Environment name from the CI base ref
//!     ├── template      # Ordered placeholder substitution
//!     ├── rewrite       # Atomic in-place file rewrite
//!     ├── store/        # Secrets store backends
//!     │   ├── mod       # SecretStore trait, in-memory store
//!     │   └── aws       # AWS Secrets Manager
//!     ├── ci            # CI output bindings
//!     └── inject        # End-to-end flow
//! ```

pub mod cli;
pub mod core;
pub mod error;
