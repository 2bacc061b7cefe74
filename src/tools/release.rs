//! Pinned prebuilt release locations for fzf, bat, and eza.
//!
//! These tools ship prebuilt archives on GitHub; package-manager versions
//! lag badly on some distributions (fzf especially), so kitbag installs
//! pinned releases directly.

use crate::detection::platform::{Os, Platform};

use super::Tool;

pub const FZF_VERSION: &str = "0.67.0";
pub const BAT_VERSION: &str = "0.26.1";
pub const EZA_VERSION: &str = "0.23.4";

/// Everything needed to download and install one prebuilt release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub tool: Tool,
    pub url: String,
    /// Local file name for the downloaded archive.
    pub archive_name: String,
    /// Name of the executable to dig out of the archive.
    pub binary: &'static str,
}

/// Build the release plan for a tool on a platform.
///
/// Returns `None` when the tool has no prebuilt archive for the platform
/// (eza on Darwin) or is not distributed as a prebuilt release at all;
/// callers fall back to the package manager.
pub fn plan(tool: Tool, platform: Platform) -> Option<ReleasePlan> {
    match tool {
        Tool::Fzf => Some(ReleasePlan {
            tool,
            url: format!(
                "https://github.com/junegunn/fzf/releases/download/v{v}/fzf-{v}-{os}_{arch}.tar.gz",
                v = FZF_VERSION,
                os = platform.os,
                arch = platform.arch,
            ),
            archive_name: "fzf.tar.gz".to_string(),
            binary: "fzf",
        }),
        Tool::Bat => Some(ReleasePlan {
            tool,
            url: format!(
                "https://github.com/sharkdp/bat/releases/download/v{v}/bat-v{v}-{triple}.tar.gz",
                v = BAT_VERSION,
                triple = platform.release_triple(),
            ),
            archive_name: "bat.tar.gz".to_string(),
            binary: "bat",
        }),
        Tool::Eza => {
            if platform.os == Os::Darwin {
                // No prebuilt Darwin archive; Homebrew covers it.
                return None;
            }
            Some(ReleasePlan {
                tool,
                url: format!(
                    "https://github.com/eza-community/eza/releases/download/v{v}/eza_{triple}.tar.gz",
                    v = EZA_VERSION,
                    triple = platform.release_triple(),
                ),
                archive_name: "eza.tar.gz".to_string(),
                binary: "eza",
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::platform::Arch;

    fn linux_amd64() -> Platform {
        Platform {
            os: Os::Linux,
            arch: Arch::Amd64,
        }
    }

    fn darwin_arm64() -> Platform {
        Platform {
            os: Os::Darwin,
            arch: Arch::Arm64,
        }
    }

    #[test]
    fn fzf_url_uses_os_and_arch_names() {
        let plan = plan(Tool::Fzf, linux_amd64()).unwrap();
        assert_eq!(
            plan.url,
            format!(
                "https://github.com/junegunn/fzf/releases/download/v{v}/fzf-{v}-linux_amd64.tar.gz",
                v = FZF_VERSION
            )
        );
        assert_eq!(plan.binary, "fzf");
    }

    #[test]
    fn fzf_darwin_arm64() {
        let plan = plan(Tool::Fzf, darwin_arm64()).unwrap();
        assert!(plan.url.contains("darwin_arm64"));
    }

    #[test]
    fn bat_url_uses_release_triple() {
        let plan = plan(Tool::Bat, linux_amd64()).unwrap();
        assert!(plan.url.contains("x86_64-unknown-linux-gnu"));
        assert!(plan.url.contains(BAT_VERSION));
    }

    #[test]
    fn bat_darwin_triple() {
        let plan = plan(Tool::Bat, darwin_arm64()).unwrap();
        assert!(plan.url.contains("aarch64-apple-darwin"));
    }

    #[test]
    fn eza_linux_has_plan() {
        let plan = plan(Tool::Eza, linux_amd64()).unwrap();
        assert!(plan.url.contains("eza_x86_64-unknown-linux-gnu"));
    }

    #[test]
    fn eza_darwin_has_no_prebuilt() {
        assert!(plan(Tool::Eza, darwin_arm64()).is_none());
    }

    #[test]
    fn non_release_tools_have_no_plan() {
        assert!(plan(Tool::Git, linux_amd64()).is_none());
        assert!(plan(Tool::OhMyZsh, linux_amd64()).is_none());
    }
}
