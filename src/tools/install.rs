//! Check-then-install orchestration.

use std::path::{Path, PathBuf};

use crate::detection::package_manager::{detect_with, install_command, PackageManager};
use crate::detection::platform::Platform;
use crate::error::{KitbagError, Result};
use crate::shell::{is_elevated, sudo_user, CommandRunner};
use crate::ui::UserInterface;

use super::check;
use super::download;
use super::registry::{spec, InstallMethod};
use super::release;
use super::Tool;

/// Everything the install loop needs about its environment.
pub struct InstallContext<'a> {
    pub platform: Platform,
    pub home: PathBuf,
    pub runner: &'a dyn CommandRunner,
    /// Skip install confirmations.
    pub assume_yes: bool,
    /// PATH probe, injectable for tests.
    pub probe: &'a dyn Fn(&str) -> bool,
    /// Whether this process is running as root.
    pub elevated: bool,
    /// Invoking user when running under sudo.
    pub sudo_user: Option<String>,
}

impl<'a> InstallContext<'a> {
    /// Build a context for the real system.
    pub fn system(platform: Platform, home: &Path, runner: &'a dyn CommandRunner, assume_yes: bool) -> Self {
        Self {
            platform,
            home: home.to_path_buf(),
            runner,
            assume_yes,
            probe: &crate::detection::command::on_path,
            elevated: is_elevated(),
            sudo_user: sudo_user(),
        }
    }
}

/// Check each planned tool and install the missing ones.
///
/// Present tools are reported and skipped. Missing tools are confirmed
/// (default yes) when the UI is interactive, then installed. Best-effort
/// installers (gvm, sdkman, rustup) downgrade failure to a warning.
pub fn ensure_tools(
    tools: &[Tool],
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    if tools.is_empty() {
        return Ok(());
    }

    ui.show_header("Checking tools");

    let total = tools.len();
    for (index, &tool) in tools.iter().enumerate() {
        ui.show_step(index + 1, total, tool.name());

        if check::is_installed_with(tool, &ctx.home, ctx.probe) {
            ui.success(&format!("{} already installed", tool));
            continue;
        }

        if !ctx.assume_yes && ui.is_interactive() {
            let wanted = ui.confirm(&format!("Install {}?", tool), true)?;
            if !wanted {
                ui.warning(&format!("Skipping {}", tool));
                continue;
            }
        }

        install_tool(tool, ctx, ui)?;
    }

    Ok(())
}

/// Install a single missing tool according to its spec.
pub fn install_tool(
    tool: Tool,
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    match spec(tool).install {
        InstallMethod::PackageManager => install_via_package_manager(tool, ctx, ui),
        InstallMethod::Script { url, command, required } => {
            install_via_script(tool, url, command, required, ctx, ui)
        }
        InstallMethod::BinaryRelease => install_via_release(tool, ctx, ui),
    }
}

fn install_via_package_manager(
    tool: Tool,
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let pm = detect_with(ctx.platform.os, ctx.probe)?;
    install_package(tool.name(), pm, ctx, ui).map_err(|e| KitbagError::ToolInstall {
        tool: tool.name().to_string(),
        message: e.to_string(),
    })?;

    ui.success(&format!("Installed {} via {}", tool, pm));
    Ok(())
}

fn install_package(
    package: &str,
    pm: PackageManager,
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    if pm.refuses_root() && ctx.elevated && ctx.sudo_user.is_none() {
        ui.warning("Running Homebrew as root; the install will likely fail");
    }

    let argv = install_command(pm, package, ctx.elevated, ctx.sudo_user.as_deref());
    let args: Vec<&str> = argv[1..].iter().map(String::as_str).collect();
    ctx.runner.run(&argv[0], &args)?;
    Ok(())
}

fn install_via_script(
    tool: Tool,
    url: &str,
    command: &str,
    required: bool,
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let mut spinner = ui.start_spinner(&format!("Installing {} from {}", tool, url));

    match ctx.runner.run_shell(command) {
        Ok(_) => {
            spinner.finish_success(&format!("Installed {}", tool));
            Ok(())
        }
        Err(e) if !required => {
            spinner.finish_skipped(&format!("{} install failed, continuing", tool));
            ui.warning(&format!(
                "Could not install {} ({}); install it manually later",
                tool, e
            ));
            Ok(())
        }
        Err(e) => {
            spinner.finish_error(&format!("{} install failed", tool));
            Err(KitbagError::ToolInstall {
                tool: tool.name().to_string(),
                message: e.to_string(),
            })
        }
    }
}

fn install_via_release(
    tool: Tool,
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let Some(plan) = release::plan(tool, ctx.platform) else {
        // No prebuilt archive for this platform (eza on Darwin): package
        // manager covers it.
        return install_via_package_manager(tool, ctx, ui);
    };

    if ctx.runner.is_dry_run() {
        ui.message(&format!(
            "dry-run: would download {} and install {}",
            plan.url, plan.binary
        ));
        return Ok(());
    }

    let mut spinner = ui.start_spinner(&format!("Downloading {}", plan.url));
    match download::install_release(&plan, &ctx.home) {
        Ok(path) => {
            spinner.finish_success(&format!("Installed {} to {}", tool, path.display()));
            Ok(())
        }
        Err(e) => {
            spinner.finish_error(&format!("{} install failed", tool));
            Err(KitbagError::ToolInstall {
                tool: tool.name().to_string(),
                message: e.to_string(),
            })
        }
    }
}
