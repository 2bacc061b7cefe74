//! Embedded dotfiles and the appliers that install them.
//!
//! The bundled configuration files live under `assets/` and are embedded
//! at compile time, so the binary is self-contained.

pub mod git;
pub mod template;
pub mod vim;
pub mod writer;
pub mod zsh;

pub use writer::{FileWriter, WriteOutcome};

use include_dir::{include_dir, Dir};

use crate::error::{KitbagError, Result};

/// Embedded dotfile assets.
static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Fetch an embedded asset as UTF-8 text.
pub fn asset(path: &str) -> Result<&'static str> {
    ASSETS
        .get_file(path)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| KitbagError::ConfigApply {
            name: path.to_string(),
            message: "embedded asset missing or not UTF-8".to_string(),
        })
}
