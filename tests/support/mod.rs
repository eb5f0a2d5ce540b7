//! Test support utilities for tfinject integration tests.
//!
//! Provides an isolated working directory laid out like a CI checkout:
//! `<tmp>/script` is the working directory and `<tmp>/iac` holds the
//! Terraform templates, so the default `../iac` paths resolve.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated: child processes use
/// `.current_dir()` and explicit env vars, so tests can run in parallel.
pub struct Test {
    pub root: TempDir,
}

impl Test {
    /// Create an empty layout with `script/` and `iac/` directories.
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(root.path().join("script")).expect("failed to create script dir");
        fs::create_dir(root.path().join("iac")).expect("failed to create iac dir");
        Self { root }
    }

    /// Create a layout with both templates in place.
    pub fn with_templates() -> Self {
        let t = Self::new();
        t.write_iac("terraform.tfvars", TFVARS_TEMPLATE);
        t.write_iac("provider.tf", PROVIDER_TEMPLATE);
        t
    }

    /// Working directory the tool runs from.
    pub fn workdir(&self) -> PathBuf {
        self.root.path().join("script")
    }

    pub fn iac_dir(&self) -> PathBuf {
        self.root.path().join("iac")
    }

    pub fn write_iac(&self, name: &str, content: &str) {
        fs::write(self.iac_dir().join(name), content).expect("failed to write template");
    }

    pub fn read_iac(&self, name: &str) -> String {
        fs::read_to_string(self.iac_dir().join(name)).expect("failed to read template")
    }

    pub fn tfvars(&self) -> String {
        self.read_iac("terraform.tfvars")
    }

    pub fn provider(&self) -> String {
        self.read_iac("provider.tf")
    }

    /// Path for a `GITHUB_OUTPUT` file inside the temp dir.
    pub fn output_file(&self) -> PathBuf {
        self.root.path().join("github_output")
    }
}
