//! Static specs for how each tool is detected and installed.

use super::Tool;

/// How a tool's presence is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMethod {
    /// Binary found on PATH.
    OnPath(&'static str),

    /// Marker directory exists under the home directory. Used for tools
    /// that install as sourced shell functions and never appear on PATH.
    HomeMarker(&'static str),

    /// Binary on PATH, or an executable at a well-known home path. Used
    /// for rustup, whose bin dir may not be on PATH in this shell yet.
    PathOrHome {
        binary: &'static str,
        home_path: &'static str,
    },
}

/// How a tool is installed when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    /// Install through the detected system package manager.
    PackageManager,

    /// Install by piping an upstream installer script through bash.
    /// When `required` is false, failure is a warning rather than an
    /// abort (language version managers are nice-to-have).
    Script {
        url: &'static str,
        command: &'static str,
        required: bool,
    },

    /// Download a pinned prebuilt release archive and install the binary.
    BinaryRelease,
}

/// Full spec for one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub tool: Tool,
    pub check: CheckMethod,
    pub install: InstallMethod,
}

/// Look up the spec for a tool.
pub fn spec(tool: Tool) -> ToolSpec {
    let (check, install) = match tool {
        Tool::Git => (CheckMethod::OnPath("git"), InstallMethod::PackageManager),
        Tool::Vim => (CheckMethod::OnPath("vim"), InstallMethod::PackageManager),
        Tool::Zsh => (CheckMethod::OnPath("zsh"), InstallMethod::PackageManager),
        Tool::TheFuck => (
            CheckMethod::OnPath("thefuck"),
            InstallMethod::PackageManager,
        ),
        Tool::OhMyZsh => (
            CheckMethod::HomeMarker(".oh-my-zsh"),
            InstallMethod::Script {
                url: "https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh",
                command: r#"RUNZSH=no CHSH=no sh -c "$(curl -fsSL https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh)""#,
                required: true,
            },
        ),
        Tool::Gvm => (
            CheckMethod::HomeMarker(".gvm"),
            InstallMethod::Script {
                url: "https://raw.githubusercontent.com/moovweb/gvm/master/binscripts/gvm-installer",
                command: "bash < <(curl -s -S -L https://raw.githubusercontent.com/moovweb/gvm/master/binscripts/gvm-installer)",
                required: false,
            },
        ),
        Tool::Sdkman => (
            CheckMethod::HomeMarker(".sdkman"),
            InstallMethod::Script {
                url: "https://get.sdkman.io",
                command: r#"curl -s "https://get.sdkman.io" | bash"#,
                required: false,
            },
        ),
        Tool::Rustup => (
            CheckMethod::PathOrHome {
                binary: "rustup",
                home_path: ".cargo/bin/rustup",
            },
            InstallMethod::Script {
                url: "https://sh.rustup.rs",
                command: "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh -s -- -y",
                required: false,
            },
        ),
        Tool::Fzf => (CheckMethod::OnPath("fzf"), InstallMethod::BinaryRelease),
        Tool::Bat => (CheckMethod::OnPath("bat"), InstallMethod::BinaryRelease),
        Tool::Eza => (CheckMethod::OnPath("eza"), InstallMethod::BinaryRelease),
    };

    ToolSpec {
        tool,
        check,
        install,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_has_a_spec() {
        for tool in Tool::ALL {
            let s = spec(tool);
            assert_eq!(s.tool, tool);
        }
    }

    #[test]
    fn binary_release_tools() {
        for tool in [Tool::Fzf, Tool::Bat, Tool::Eza] {
            assert_eq!(spec(tool).install, InstallMethod::BinaryRelease);
        }
    }

    #[test]
    fn package_manager_tools() {
        for tool in [Tool::Git, Tool::Vim, Tool::Zsh, Tool::TheFuck] {
            assert_eq!(spec(tool).install, InstallMethod::PackageManager);
        }
    }

    #[test]
    fn oh_my_zsh_script_is_required() {
        match spec(Tool::OhMyZsh).install {
            InstallMethod::Script { required, .. } => assert!(required),
            other => panic!("expected Script, got {:?}", other),
        }
    }

    #[test]
    fn version_managers_are_best_effort() {
        for tool in [Tool::Gvm, Tool::Sdkman, Tool::Rustup] {
            match spec(tool).install {
                InstallMethod::Script { required, .. } => {
                    assert!(!required, "{} should be best-effort", tool)
                }
                other => panic!("expected Script for {}, got {:?}", tool, other),
            }
        }
    }

    #[test]
    fn sourced_managers_use_home_markers() {
        assert_eq!(
            spec(Tool::OhMyZsh).check,
            CheckMethod::HomeMarker(".oh-my-zsh")
        );
        assert_eq!(spec(Tool::Gvm).check, CheckMethod::HomeMarker(".gvm"));
        assert_eq!(spec(Tool::Sdkman).check, CheckMethod::HomeMarker(".sdkman"));
    }
}
