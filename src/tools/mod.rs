//! Tool registry, detection, and installation.
//!
//! Every tool kitbag manages is a [`Tool`] variant with a static
//! [`registry::ToolSpec`] describing how it is detected and installed.

pub mod check;
pub mod download;
pub mod install;
pub mod registry;
pub mod release;

pub use check::is_installed;
pub use install::{ensure_tools, InstallContext};
pub use registry::{spec, CheckMethod, InstallMethod, ToolSpec};

/// A tool kitbag knows how to check and install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Git,
    Vim,
    Zsh,
    OhMyZsh,
    TheFuck,
    Eza,
    Fzf,
    Bat,
    Gvm,
    Sdkman,
    Rustup,
}

impl Tool {
    /// Every known tool, in status display order.
    pub const ALL: [Tool; 11] = [
        Tool::Git,
        Tool::Vim,
        Tool::Zsh,
        Tool::OhMyZsh,
        Tool::TheFuck,
        Tool::Fzf,
        Tool::Bat,
        Tool::Eza,
        Tool::Gvm,
        Tool::Sdkman,
        Tool::Rustup,
    ];

    /// Canonical tool name (also the package and binary name where
    /// applicable).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Vim => "vim",
            Self::Zsh => "zsh",
            Self::OhMyZsh => "oh-my-zsh",
            Self::TheFuck => "thefuck",
            Self::Eza => "eza",
            Self::Fzf => "fzf",
            Self::Bat => "bat",
            Self::Gvm => "gvm",
            Self::Sdkman => "sdkman",
            Self::Rustup => "rustup",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
