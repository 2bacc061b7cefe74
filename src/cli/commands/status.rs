//! Status command implementation.
//!
//! `kitbag status` reports, for every managed tool, whether it is
//! installed, where it was found, and its version when it can be read
//! from `<tool> --version`.

use std::path::Path;

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::detection::command::{command_version, lookup_on_path};
use crate::detection::package_manager;
use crate::detection::platform::Platform;
use crate::error::{KitbagError, Result};
use crate::tools::registry::{spec, CheckMethod};
use crate::tools::{is_installed, Tool};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(args: StatusArgs) -> Self {
        Self { args }
    }
}

/// Install state of one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: String,
    pub installed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Full machine-readable status report.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub os: String,
    pub arch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,
    pub tools: Vec<ToolStatus>,
}

/// Collect the status report for a home directory.
pub fn collect(platform: Platform, home: &Path) -> StatusReport {
    let pm = package_manager::detect(platform.os).ok();

    let tools = Tool::ALL
        .iter()
        .map(|&tool| tool_status(tool, home))
        .collect();

    StatusReport {
        os: platform.os.to_string(),
        arch: platform.arch.to_string(),
        package_manager: pm.map(|p| p.binary().to_string()),
        tools,
    }
}

fn tool_status(tool: Tool, home: &Path) -> ToolStatus {
    let installed = is_installed(tool, home);
    if !installed {
        return ToolStatus {
            name: tool.name().to_string(),
            installed: false,
            version: None,
            path: None,
        };
    }

    let (version, path) = match spec(tool).check {
        CheckMethod::OnPath(binary) => (
            command_version(binary),
            lookup_on_path(binary).map(|p| p.display().to_string()),
        ),
        CheckMethod::PathOrHome { binary, home_path } => (
            command_version(binary),
            lookup_on_path(binary)
                .map(|p| p.display().to_string())
                .or_else(|| Some(home.join(home_path).display().to_string())),
        ),
        CheckMethod::HomeMarker(marker) => {
            (None, Some(home.join(marker).display().to_string()))
        }
    };

    ToolStatus {
        name: tool.name().to_string(),
        installed: true,
        version,
        path,
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let platform = Platform::current()?;
        let home = dirs::home_dir().ok_or(KitbagError::HomeDirNotFound)?;
        let report = collect(platform, &home);

        if self.args.json {
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| KitbagError::Other(e.into()))?;
            ui.message(&rendered);
            return Ok(CommandResult::success());
        }

        ui.show_header("kitbag status");
        ui.message(&format!("platform         {}/{}", report.os, report.arch));
        ui.message(&format!(
            "package manager  {}",
            report.package_manager.as_deref().unwrap_or("none found")
        ));
        ui.message("");

        for tool in &report.tools {
            if tool.installed {
                let mut line = format!("{:<12} installed", tool.name);
                if let Some(version) = &tool.version {
                    line.push_str(&format!("  {}", version));
                }
                if let Some(path) = &tool.path {
                    line.push_str(&format!("  ({})", path));
                }
                ui.success(&line);
            } else {
                ui.message(&format!("{:<12} missing", tool.name));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::platform::{Arch, Os};
    use std::fs;
    use tempfile::TempDir;

    fn linux() -> Platform {
        Platform {
            os: Os::Linux,
            arch: Arch::Amd64,
        }
    }

    #[test]
    fn report_covers_all_tools() {
        let temp = TempDir::new().unwrap();
        let report = collect(linux(), temp.path());

        assert_eq!(report.tools.len(), Tool::ALL.len());
        assert_eq!(report.os, "linux");
        assert_eq!(report.arch, "amd64");
    }

    #[test]
    fn home_marker_tool_reports_marker_path() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".oh-my-zsh")).unwrap();

        let report = collect(linux(), temp.path());
        let omz = report
            .tools
            .iter()
            .find(|t| t.name == "oh-my-zsh")
            .unwrap();

        assert!(omz.installed);
        assert!(omz.path.as_deref().unwrap().ends_with(".oh-my-zsh"));
        assert!(omz.version.is_none());
    }

    #[test]
    fn missing_tool_has_no_version_or_path() {
        let temp = TempDir::new().unwrap();
        let report = collect(linux(), temp.path());
        let gvm = report.tools.iter().find(|t| t.name == "gvm").unwrap();

        assert!(!gvm.installed);
        assert!(gvm.version.is_none());
        assert!(gvm.path.is_none());
    }

    #[test]
    fn report_serializes_to_json() {
        let temp = TempDir::new().unwrap();
        let report = collect(linux(), temp.path());
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"os\":\"linux\""));
        assert!(json.contains("\"name\":\"git\""));
        // Skipped fields are absent for missing tools
        let gvm_fragment = json.split("gvm").nth(1).unwrap();
        assert!(gvm_fragment.starts_with("\",\"installed\":false"));
    }
}
