//! Command helper methods for Test.

use super::fixtures::{CI_ENV, SECRET_JSON};
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a tfinject command with an empty environment.
    ///
    /// Returns a Command configured with:
    /// - no inherited environment variables (only NO_COLOR)
    /// - current directory set to the test working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tfinject").expect("failed to find tfinject binary");
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.workdir());
        cmd
    }

    /// Command with the standard CI environment and secret payload.
    pub fn ci_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.envs(CI_ENV.iter().copied());
        cmd.env("TFINJECT_TEST_SECRET", SECRET_JSON);
        cmd
    }

    /// Run with the standard CI environment, minus `removed` variables.
    pub fn run_without(&self, removed: &[&str]) -> Output {
        let mut cmd = self.ci_cmd();
        for var in removed {
            cmd.env_remove(var);
        }
        cmd.output().expect("failed to run tfinject")
    }

    /// Run with the standard CI environment.
    pub fn run(&self) -> Output {
        self.run_without(&[])
    }
}
