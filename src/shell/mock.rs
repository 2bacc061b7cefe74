//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] and records every invocation
//! for later assertion. Commands can be made to fail by substring match.

use std::cell::RefCell;

use crate::error::{KitbagError, Result};

use super::command::{display_command, CommandOutput, CommandRunner};

/// Records commands instead of executing them.
#[derive(Debug, Default)]
pub struct MockRunner {
    dry_run: bool,
    calls: RefCell<Vec<String>>,
    failing: Vec<String>,
    stdout_for: Vec<(String, String)>,
}

impl MockRunner {
    /// Create a mock runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands containing `needle` fail with exit code 1.
    pub fn fail_on(mut self, needle: &str) -> Self {
        self.failing.push(needle.to_string());
        self
    }

    /// Return canned stdout for commands containing `needle`.
    pub fn stdout_on(mut self, needle: &str, stdout: &str) -> Self {
        self.stdout_for.push((needle.to_string(), stdout.to_string()));
        self
    }

    /// All commands run so far, rendered as display strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether any recorded command contains `needle`.
    pub fn ran(&self, needle: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.contains(needle))
    }

    fn record(&self, rendered: String) -> Result<CommandOutput> {
        let fails = self.failing.iter().any(|n| rendered.contains(n));
        let stdout = self
            .stdout_for
            .iter()
            .find(|(n, _)| rendered.contains(n))
            .map(|(_, out)| out.clone())
            .unwrap_or_default();
        self.calls.borrow_mut().push(rendered.clone());

        if fails {
            Err(KitbagError::CommandFailed {
                command: rendered,
                code: Some(1),
                output: String::new(),
            })
        } else {
            Ok(CommandOutput {
                exit_code: Some(0),
                stdout,
                stderr: String::new(),
                success: true,
            })
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.record(display_command(program, args))
    }

    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let rendered = display_command(program, args);
        match self.record(rendered.clone()) {
            Ok(out) => Ok(out),
            Err(_) => Ok(CommandOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: String::new(),
                success: false,
            }),
        }
    }

    fn run_shell(&self, script: &str) -> Result<CommandOutput> {
        self.record(format!("bash -c {}", script))
    }

    fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls() {
        let mock = MockRunner::new();
        mock.run("apt", &["install", "-y", "git"]).unwrap();
        assert!(mock.ran("apt install -y git"));
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn fail_on_matches_substring() {
        let mock = MockRunner::new().fail_on("pacman");
        assert!(mock.run("pacman", &["-S", "git"]).is_err());
        assert!(mock.run("apt", &["install", "git"]).is_ok());
    }

    #[test]
    fn run_unchecked_reports_failure_without_error() {
        let mock = MockRunner::new().fail_on("git");
        let out = mock.run_unchecked("git", &["clone", "x"]).unwrap();
        assert!(!out.success);
    }

    #[test]
    fn canned_stdout() {
        let mock = MockRunner::new().stdout_on("echo $SHELL", "/usr/bin/zsh");
        let out = mock.run_shell("echo $SHELL").unwrap();
        assert_eq!(out.stdout, "/usr/bin/zsh");
    }
}
