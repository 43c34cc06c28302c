//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a secret-baker command running in the service directory.
    ///
    /// Colors are disabled and SECRET_BAKER_* variables from the outer
    /// environment are cleared.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secret-baker").expect("failed to find secret-baker binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SECRET_BAKER_CONFIG");
        cmd.env_remove("SECRET_BAKER_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `secret-baker package` with extra args.
    pub fn package(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("package")
            .args(args)
            .output()
            .expect("failed to run secret-baker package")
    }

    /// Shortcut for `secret-baker cleanup` with extra args.
    pub fn cleanup(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("cleanup")
            .args(args)
            .output()
            .expect("failed to run secret-baker cleanup")
    }

    /// Shortcut for `secret-baker hook <event>`.
    pub fn hook(&self, event: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["hook", event])
            .args(args)
            .output()
            .expect("failed to run secret-baker hook")
    }

    /// Shortcut for `secret-baker hooks --json`.
    pub fn hooks_json(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["hooks", "--json"])
            .args(args)
            .output()
            .expect("failed to run secret-baker hooks")
    }

    /// Shortcut for `secret-baker status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run secret-baker status")
    }
}
