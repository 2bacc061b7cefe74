//! Vim configuration applier.

use std::path::Path;

use crate::error::{KitbagError, Result};
use crate::shell::chown_if_needed;
use crate::tools::download::Downloader;
use crate::ui::UserInterface;

use super::writer::{FileWriter, WriteOutcome};

/// Location vim-plug is fetched from.
const VIM_PLUG_URL: &str =
    "https://raw.githubusercontent.com/junegunn/vim-plug/master/plug.vim";

/// Write `~/.vimrc` and install the vim-plug plugin manager.
pub fn apply(home: &Path, writer: &FileWriter, ui: &mut dyn UserInterface) -> Result<()> {
    ui.show_header("Configuring vim");

    // Full vimrc, with the plugin-free variant as a fallback should the
    // bundle ever ship without it.
    let vimrc = super::asset("vim/vimrc").or_else(|_| super::asset("vim/simple.vimrc"))?;

    let dest = home.join(".vimrc");
    match writer.write_config(&dest, vimrc.as_bytes())? {
        WriteOutcome::Written => ui.success("Wrote ~/.vimrc"),
        WriteOutcome::SkippedExisting => {
            ui.message("~/.vimrc exists, skipping (use --force to overwrite)")
        }
        WriteOutcome::WouldWrite => ui.message("dry-run: would write ~/.vimrc"),
    }

    let installed_plug = install_vim_plug(home, writer, ui)?;
    if installed_plug {
        ui.message("Open vim and run :PlugInstall to install plugins");
    }

    Ok(())
}

/// Download vim-plug into `~/.vim/autoload/plug.vim`.
///
/// Returns whether a fresh copy was installed.
fn install_vim_plug(home: &Path, writer: &FileWriter, ui: &mut dyn UserInterface) -> Result<bool> {
    let plug_path = home.join(".vim/autoload/plug.vim");

    if plug_path.exists() && !writer.force() {
        ui.message("vim-plug already present, skipping");
        return Ok(false);
    }

    if writer.is_dry_run() {
        ui.message(&format!("dry-run: would download {}", VIM_PLUG_URL));
        return Ok(false);
    }

    if let Some(parent) = plug_path.parent() {
        writer.create_dir(parent)?;
    }

    let mut spinner = ui.start_spinner("Downloading vim-plug");
    match Downloader::new()?.fetch(VIM_PLUG_URL, &plug_path) {
        Ok(_) => {
            chown_if_needed(&plug_path);
            spinner.finish_success("Installed vim-plug");
            Ok(true)
        }
        Err(e) => {
            spinner.finish_error("vim-plug download failed");
            Err(KitbagError::ConfigApply {
                name: "vim".to_string(),
                message: format!("could not download vim-plug: {}", e),
            })
        }
    }
}
