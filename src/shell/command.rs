//! Shell command execution.

use std::process::Command;

use crate::error::{KitbagError, Result};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// A synthetic success, used for dry-run.
    pub fn dry_run() -> Self {
        Self {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
            success: true,
        }
    }

    /// Combined stdout + stderr, trimmed.
    pub fn combined(&self) -> String {
        let mut out = String::new();
        out.push_str(self.stdout.trim_end());
        if !self.stderr.trim().is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(self.stderr.trim_end());
        }
        out
    }
}

/// Trait seam over process execution.
///
/// Install and config flows take a `&dyn CommandRunner` so tests can record
/// invocations instead of touching the system.
pub trait CommandRunner {
    /// Run a program with arguments, failing on non-zero exit.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Run a program with arguments, returning the result regardless of
    /// exit code. Only spawn failures are errors.
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Run a script through `bash -c`, failing on non-zero exit.
    fn run_shell(&self, script: &str) -> Result<CommandOutput>;

    /// Whether this runner is in dry-run mode.
    fn is_dry_run(&self) -> bool;
}

/// Runner that executes commands on the host system.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    dry_run: bool,
}

impl SystemRunner {
    /// Create a runner.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    fn capture(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            KitbagError::CommandFailed {
                command: display_command(program, args),
                code: None,
                output: e.to_string(),
            }
        })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        if self.dry_run {
            tracing::info!(command = %display_command(program, args), "dry-run: skipping command");
            return Ok(CommandOutput::dry_run());
        }

        tracing::debug!(command = %display_command(program, args), "running command");
        let result = self.capture(program, args)?;
        if result.success {
            Ok(result)
        } else {
            Err(KitbagError::CommandFailed {
                command: display_command(program, args),
                code: result.exit_code,
                output: result.combined(),
            })
        }
    }

    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        if self.dry_run {
            tracing::info!(command = %display_command(program, args), "dry-run: skipping command");
            return Ok(CommandOutput::dry_run());
        }

        self.capture(program, args)
    }

    fn run_shell(&self, script: &str) -> Result<CommandOutput> {
        self.run("bash", &["-c", script])
    }

    fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Render a program + args for error messages and logs.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
