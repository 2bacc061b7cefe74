//! Zsh configuration applier.
//!
//! Five steps, in order: `.zshrc`, the per-user config dir, the oh-my-zsh
//! theme, the oh-my-zsh plugins, and the default shell.

use std::path::{Path, PathBuf};

use crate::error::{KitbagError, Result};
use crate::shell::{is_elevated, real_user_name, CommandRunner};
use crate::ui::UserInterface;

use super::template;
use super::writer::{FileWriter, WriteOutcome};

/// Plugins cloned into oh-my-zsh's custom plugin dir.
const PLUGINS: &[(&str, &str)] = &[
    (
        "zsh-autosuggestions",
        "https://github.com/zsh-users/zsh-autosuggestions",
    ),
    (
        "zsh-syntax-highlighting",
        "https://github.com/zsh-users/zsh-syntax-highlighting.git",
    ),
];

/// Plain config files copied verbatim into the per-user config dir.
const PLAIN_CONFIGS: &[&str] = &["aliases.zsh", "function.zsh", "fzf.zsh"];

/// Everything the zsh applier needs about its environment.
pub struct ZshContext<'a> {
    pub home: PathBuf,
    pub writer: &'a FileWriter,
    pub runner: &'a dyn CommandRunner,
    /// Owner of the per-user config dir (`~/.<user>_env/zsh`).
    pub user: String,
    pub elevated: bool,
    /// Value of `$SHELL` for the default-shell check.
    pub current_shell: Option<String>,
    pub enable_gvm: bool,
    pub enable_sdkman: bool,
    pub enable_rustup: bool,
}

impl<'a> ZshContext<'a> {
    /// Build a context for the real system.
    pub fn system(
        home: &Path,
        writer: &'a FileWriter,
        runner: &'a dyn CommandRunner,
        enable_gvm: bool,
        enable_sdkman: bool,
        enable_rustup: bool,
    ) -> Self {
        Self {
            home: home.to_path_buf(),
            writer,
            runner,
            user: real_user_name(),
            elevated: is_elevated(),
            current_shell: std::env::var("SHELL").ok(),
            enable_gvm,
            enable_sdkman,
            enable_rustup,
        }
    }
}

/// Apply the full zsh configuration.
pub fn apply(ctx: &ZshContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    ui.show_header("Configuring zsh");

    write_zshrc(ctx, ui)?;
    write_user_configs(ctx, ui)?;
    install_theme(ctx, ui)?;
    install_plugins(ctx, ui);
    check_default_shell(ctx, ui)?;

    ui.message("Run 'source ~/.zshrc' or open a new terminal to apply");
    Ok(())
}

fn write_zshrc(ctx: &ZshContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    let dest = ctx.home.join(".zshrc");
    match ctx
        .writer
        .write_config(&dest, super::asset("zsh/zshrc")?.as_bytes())?
    {
        WriteOutcome::Written => ui.success("Wrote ~/.zshrc"),
        WriteOutcome::SkippedExisting => {
            ui.message("~/.zshrc exists, skipping (use --force to overwrite)")
        }
        WriteOutcome::WouldWrite => ui.message("dry-run: would write ~/.zshrc"),
    }
    Ok(())
}

fn write_user_configs(ctx: &ZshContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    let config_dir = ctx.home.join(format!(".{}_env/zsh", ctx.user));
    ctx.writer.create_dir(&config_dir)?;

    for name in PLAIN_CONFIGS {
        let contents = super::asset(&format!("zsh/config/{}", name))?;
        ctx.writer
            .write_config(&config_dir.join(name), contents.as_bytes())?;
    }

    let envs = render_envs(ctx)?;
    ctx.writer
        .write_config(&config_dir.join("envs.zsh"), envs.as_bytes())?;

    if ctx.writer.is_dry_run() {
        ui.message(&format!(
            "dry-run: would install zsh config files to {}",
            config_dir.display()
        ));
    } else {
        ui.success(&format!(
            "Installed zsh config files to {}",
            config_dir.display()
        ));
    }
    Ok(())
}

/// Render `envs.zsh`: the base template plus an init block per enabled
/// version manager.
fn render_envs(ctx: &ZshContext<'_>) -> Result<String> {
    let vars = template::vars([("user", ctx.user.as_str())]);
    let mut envs = template::render(super::asset("zsh/config/envs.zsh")?, &vars)?;

    if ctx.enable_gvm {
        envs.push_str(
            "\n# gvm (Go version manager)\n\
             [[ -s \"$HOME/.gvm/scripts/gvm\" ]] && source \"$HOME/.gvm/scripts/gvm\"\n",
        );
    }
    if ctx.enable_sdkman {
        envs.push_str(
            "\n# sdkman (Java version manager)\n\
             export SDKMAN_DIR=\"$HOME/.sdkman\"\n\
             [[ -s \"$SDKMAN_DIR/bin/sdkman-init.sh\" ]] && source \"$SDKMAN_DIR/bin/sdkman-init.sh\"\n",
        );
    }
    if ctx.enable_rustup {
        envs.push_str(
            "\n# rustup\n\
             [[ -s \"$HOME/.cargo/env\" ]] && source \"$HOME/.cargo/env\"\n",
        );
    }

    Ok(envs)
}

fn install_theme(ctx: &ZshContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    if !ctx.home.join(".oh-my-zsh").is_dir() {
        ui.message("oh-my-zsh not present, skipping theme install");
        return Ok(());
    }

    let themes_dir = ctx.home.join(".oh-my-zsh/custom/themes");
    ctx.writer.create_dir(&themes_dir)?;

    let dest = themes_dir.join("use-custom.zsh-theme");
    match ctx
        .writer
        .write_config(&dest, super::asset("zsh/theme/use-custom.zsh-theme")?.as_bytes())?
    {
        WriteOutcome::Written => ui.success("Installed zsh theme"),
        WriteOutcome::SkippedExisting => ui.message("Theme already installed, skipping"),
        WriteOutcome::WouldWrite => ui.message("dry-run: would install zsh theme"),
    }
    Ok(())
}

/// Clone the plugin repos. Failures are warnings: a broken network should
/// not throw away the config files already written.
fn install_plugins(ctx: &ZshContext<'_>, ui: &mut dyn UserInterface) {
    if !ctx.home.join(".oh-my-zsh").is_dir() {
        ui.message("oh-my-zsh not present, skipping plugin install");
        return;
    }

    let plugins_dir = ctx.home.join(".oh-my-zsh/custom/plugins");
    if let Err(e) = ctx.writer.create_dir(&plugins_dir) {
        ui.warning(&format!("Could not create plugin dir: {}", e));
        return;
    }

    for &(name, url) in PLUGINS {
        let plugin_dir = plugins_dir.join(name);

        if plugin_dir.exists() {
            if !ctx.writer.force() {
                ui.message(&format!("Plugin {} already installed, skipping", name));
                continue;
            }
            if let Err(e) = ctx.writer.remove_dir_all(&plugin_dir) {
                ui.warning(&format!("Could not remove old {}: {}", name, e));
                continue;
            }
        }

        if ctx.writer.is_dry_run() {
            ui.message(&format!("dry-run: would clone {}", url));
            continue;
        }

        let dir_arg = plugin_dir.to_string_lossy();
        match ctx.runner.run("git", &["clone", url, dir_arg.as_ref()]) {
            Ok(_) => ui.success(&format!("Installed plugin {}", name)),
            Err(e) => ui.warning(&format!("Could not install plugin {}: {}", name, e)),
        }
    }
}

fn check_default_shell(ctx: &ZshContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    let shell = ctx.current_shell.as_deref().unwrap_or("");
    if shell.contains("zsh") {
        ui.message("Default shell is already zsh");
        return Ok(());
    }

    if ctx.elevated {
        if ctx.runner.is_dry_run() {
            ui.message("dry-run: would change default shell to zsh");
            return Ok(());
        }
        ctx.runner
            .run("chsh", &["-s", "/bin/zsh"])
            .map_err(|e| KitbagError::ConfigApply {
                name: "zsh".to_string(),
                message: format!("could not change default shell: {}", e),
            })?;
        ui.success("Changed default shell to zsh (takes effect on next login)");
    } else {
        ui.message("Default shell is not zsh; run 'chsh -s /bin/zsh' and log in again");
    }
    Ok(())
}
