//! Setup command implementation.
//!
//! `kitbag setup` is the core operation: resolve the selection flags into
//! a plan, check-then-install the planned tools, then apply the selected
//! configuration files.

use crate::cli::args::SetupArgs;
use crate::detection::platform::Platform;
use crate::dotfiles::git::GitIdentity;
use crate::dotfiles::zsh::ZshContext;
use crate::dotfiles::{git, vim, zsh, FileWriter};
use crate::error::{KitbagError, Result};
use crate::macos;
use crate::shell::SystemRunner;
use crate::tools::{ensure_tools, InstallContext, Tool};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(args: SetupArgs) -> Self {
        Self { args }
    }
}

/// Resolved work plan: which tools to install, which configs to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    pub tools: Vec<Tool>,
    pub git: bool,
    pub vim: bool,
    pub zsh: bool,
    pub macos: bool,
    pub gvm: bool,
    pub java: bool,
    pub rust: bool,
}

/// Resolve selection flags into a plan.
///
/// Returns `None` when nothing was selected. Any zsh-adjacent selection
/// (including the version managers, which live in `.zshrc`'s env files)
/// pulls in the whole zsh toolchain.
pub fn resolve_plan(args: &SetupArgs) -> Option<SetupPlan> {
    let any = args.git
        || args.vim
        || args.zsh
        || args.macos
        || args.gvm
        || args.java
        || args.rust
        || args.all;
    if !any {
        return None;
    }

    let git = args.all || args.git;
    let vim = args.all || args.vim;
    let gvm = args.all || args.gvm;
    let java = args.all || args.java;
    let rust = args.all || args.rust;
    let zsh = args.all || args.zsh || gvm || java || rust;
    let macos = args.all || args.macos;

    let mut tools = Vec::new();
    if git {
        tools.push(Tool::Git);
    }
    if vim {
        tools.push(Tool::Vim);
    }
    if zsh {
        tools.extend([
            Tool::Zsh,
            Tool::OhMyZsh,
            Tool::TheFuck,
            Tool::Bat,
            Tool::Fzf,
            Tool::Eza,
        ]);
        if gvm {
            tools.push(Tool::Gvm);
        }
        if java {
            tools.push(Tool::Sdkman);
        }
        if rust {
            tools.push(Tool::Rustup);
        }
    }

    Some(SetupPlan {
        tools,
        git,
        vim,
        zsh,
        macos,
        gvm,
        java,
        rust,
    })
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(plan) = resolve_plan(&self.args) else {
            ui.error(
                "Nothing selected. Pass at least one of --git, --vim, --zsh, \
                 --gvm, --java, --rust, --macos, or use --all.",
            );
            return Ok(CommandResult::failure(2));
        };

        let platform = Platform::current()?;
        let home = dirs::home_dir().ok_or(KitbagError::HomeDirNotFound)?;
        let runner = SystemRunner::new(self.args.dry_run);

        tracing::debug!(?plan, %platform, "resolved setup plan");

        if self.args.dry_run {
            ui.message("Running in dry-run mode: no commands executed, no files written");
        }

        let assume_yes = self.args.yes || self.args.non_interactive;
        let ctx = InstallContext::system(platform, &home, &runner, assume_yes);
        ensure_tools(&plan.tools, &ctx, ui)?;

        let writer = FileWriter::new(self.args.force, self.args.dry_run);

        if plan.git {
            let identity = GitIdentity {
                name: self.args.git_name.clone(),
                email: self.args.git_email.clone(),
            };
            git::apply(&home, &writer, &identity, ui)?;
        }

        if plan.vim {
            vim::apply(&home, &writer, ui)?;
        }

        if plan.zsh {
            let zsh_ctx =
                ZshContext::system(&home, &writer, &runner, plan.gvm, plan.java, plan.rust);
            zsh::apply(&zsh_ctx, ui)?;
        }

        if plan.macos {
            macos::apply(platform.os, self.args.macos, &runner, ui)?;
        }

        ui.success("Setup complete!");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(f: impl FnOnce(&mut SetupArgs)) -> SetupArgs {
        let mut args = SetupArgs::default();
        f(&mut args);
        args
    }

    #[test]
    fn no_selection_resolves_to_none() {
        assert!(resolve_plan(&SetupArgs::default()).is_none());
    }

    #[test]
    fn git_only() {
        let plan = resolve_plan(&args_with(|a| a.git = true)).unwrap();
        assert_eq!(plan.tools, vec![Tool::Git]);
        assert!(plan.git);
        assert!(!plan.vim && !plan.zsh && !plan.macos);
    }

    #[test]
    fn zsh_pulls_in_shell_toolchain() {
        let plan = resolve_plan(&args_with(|a| a.zsh = true)).unwrap();
        assert_eq!(
            plan.tools,
            vec![
                Tool::Zsh,
                Tool::OhMyZsh,
                Tool::TheFuck,
                Tool::Bat,
                Tool::Fzf,
                Tool::Eza,
            ]
        );
    }

    #[test]
    fn rust_implies_zsh_toolchain_plus_rustup() {
        let plan = resolve_plan(&args_with(|a| a.rust = true)).unwrap();
        assert!(plan.zsh);
        assert!(plan.tools.contains(&Tool::Rustup));
        assert!(plan.tools.contains(&Tool::Zsh));
        assert!(!plan.tools.contains(&Tool::Gvm));
    }

    #[test]
    fn java_selects_sdkman() {
        let plan = resolve_plan(&args_with(|a| a.java = true)).unwrap();
        assert!(plan.tools.contains(&Tool::Sdkman));
        assert!(!plan.tools.contains(&Tool::Rustup));
    }

    #[test]
    fn all_selects_everything() {
        let plan = resolve_plan(&args_with(|a| a.all = true)).unwrap();
        for tool in [
            Tool::Git,
            Tool::Vim,
            Tool::Zsh,
            Tool::OhMyZsh,
            Tool::TheFuck,
            Tool::Bat,
            Tool::Fzf,
            Tool::Eza,
            Tool::Gvm,
            Tool::Sdkman,
            Tool::Rustup,
        ] {
            assert!(plan.tools.contains(&tool), "missing {}", tool);
        }
        assert!(plan.git && plan.vim && plan.zsh && plan.macos);
    }

    #[test]
    fn macos_only_installs_no_tools() {
        let plan = resolve_plan(&args_with(|a| a.macos = true)).unwrap();
        assert!(plan.tools.is_empty());
        assert!(plan.macos);
    }

    #[test]
    fn config_order_is_git_vim_zsh() {
        // Tool order mirrors the config apply order
        let plan = resolve_plan(&args_with(|a| {
            a.git = true;
            a.vim = true;
            a.zsh = true;
        }))
        .unwrap();
        assert_eq!(plan.tools[0], Tool::Git);
        assert_eq!(plan.tools[1], Tool::Vim);
        assert_eq!(plan.tools[2], Tool::Zsh);
    }
}
