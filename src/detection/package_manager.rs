//! Package manager detection.

use serde::Serialize;

use super::command::on_path;
use super::platform::Os;
use crate::error::{KitbagError, Result};

/// Detected system package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Homebrew,
    Apt,
    Yum,
    Dnf,
    Pacman,
}

/// Linux package managers in probe priority order.
const LINUX_MANAGERS: &[PackageManager] = &[
    PackageManager::Apt,
    PackageManager::Yum,
    PackageManager::Dnf,
    PackageManager::Pacman,
];

impl PackageManager {
    /// The binary name probed on PATH and used to invoke the manager.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Homebrew => "brew",
            Self::Apt => "apt",
            Self::Yum => "yum",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
        }
    }

    /// Arguments for a non-interactive install, before the package name.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            Self::Homebrew => &["install"],
            Self::Apt | Self::Yum | Self::Dnf => &["install", "-y"],
            Self::Pacman => &["-S", "--noconfirm"],
        }
    }

    /// Whether installs need root privileges.
    pub fn needs_root(&self) -> bool {
        !matches!(self, Self::Homebrew)
    }

    /// Whether the manager refuses to run as root (Homebrew).
    pub fn refuses_root(&self) -> bool {
        matches!(self, Self::Homebrew)
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.binary())
    }
}

/// Detect the system package manager for the given OS.
///
/// Darwin always resolves to Homebrew. Linux probes PATH for
/// apt → yum → dnf → pacman in that priority order.
pub fn detect(os: Os) -> Result<PackageManager> {
    detect_with(os, on_path)
}

/// Detection with an injectable PATH probe, for tests.
pub fn detect_with<F>(os: Os, probe: F) -> Result<PackageManager>
where
    F: Fn(&str) -> bool,
{
    if os == Os::Darwin {
        return Ok(PackageManager::Homebrew);
    }

    LINUX_MANAGERS
        .iter()
        .copied()
        .find(|pm| probe(pm.binary()))
        .ok_or(KitbagError::NoPackageManager)
}

/// Build the full argv for installing a package, applying elevation rules.
///
/// - Homebrew as root: demote to the invoking sudo user (`sudo -u <user>`),
///   since Homebrew refuses to run as root. Without a sudo user the direct
///   invocation is returned and the caller warns.
/// - Root-requiring managers without root: prefix `sudo`.
pub fn install_command(
    pm: PackageManager,
    package: &str,
    elevated: bool,
    sudo_user: Option<&str>,
) -> Vec<String> {
    let mut argv: Vec<String> = Vec::new();

    if pm.refuses_root() && elevated {
        if let Some(user) = sudo_user {
            argv.extend(["sudo".to_string(), "-u".to_string(), user.to_string()]);
        }
    } else if pm.needs_root() && !elevated {
        argv.push("sudo".to_string());
    }

    argv.push(pm.binary().to_string());
    argv.extend(pm.install_args().iter().map(|s| s.to_string()));
    argv.push(package.to_string());
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darwin_always_homebrew() {
        let pm = detect_with(Os::Darwin, |_| false).unwrap();
        assert_eq!(pm, PackageManager::Homebrew);
    }

    #[test]
    fn linux_prefers_apt() {
        let pm = detect_with(Os::Linux, |_| true).unwrap();
        assert_eq!(pm, PackageManager::Apt);
    }

    #[test]
    fn linux_falls_through_to_yum() {
        let pm = detect_with(Os::Linux, |name| name == "yum").unwrap();
        assert_eq!(pm, PackageManager::Yum);
    }

    #[test]
    fn linux_falls_through_to_pacman() {
        let pm = detect_with(Os::Linux, |name| name == "pacman").unwrap();
        assert_eq!(pm, PackageManager::Pacman);
    }

    #[test]
    fn linux_yum_beats_dnf() {
        // Priority order is positional, not preference-based: yum is probed
        // before dnf even on systems where dnf is the newer frontend.
        let pm = detect_with(Os::Linux, |name| name == "yum" || name == "dnf").unwrap();
        assert_eq!(pm, PackageManager::Yum);
    }

    #[test]
    fn linux_no_manager_errors() {
        let err = detect_with(Os::Linux, |_| false).unwrap_err();
        assert!(matches!(err, KitbagError::NoPackageManager));
    }

    #[test]
    fn install_args_shapes() {
        assert_eq!(PackageManager::Apt.install_args(), &["install", "-y"]);
        assert_eq!(
            PackageManager::Pacman.install_args(),
            &["-S", "--noconfirm"]
        );
        assert_eq!(PackageManager::Homebrew.install_args(), &["install"]);
    }

    #[test]
    fn install_command_plain_root() {
        let argv = install_command(PackageManager::Apt, "git", true, None);
        assert_eq!(argv, vec!["apt", "install", "-y", "git"]);
    }

    #[test]
    fn install_command_sudo_prefix_for_non_root() {
        let argv = install_command(PackageManager::Apt, "git", false, None);
        assert_eq!(argv, vec!["sudo", "apt", "install", "-y", "git"]);
    }

    #[test]
    fn install_command_brew_demotes_root() {
        let argv = install_command(PackageManager::Homebrew, "eza", true, Some("alice"));
        assert_eq!(argv, vec!["sudo", "-u", "alice", "brew", "install", "eza"]);
    }

    #[test]
    fn install_command_brew_root_without_sudo_user() {
        // No sudo user to demote to: direct invocation, caller warns.
        let argv = install_command(PackageManager::Homebrew, "eza", true, None);
        assert_eq!(argv, vec!["brew", "install", "eza"]);
    }

    #[test]
    fn install_command_brew_non_root_is_direct() {
        let argv = install_command(PackageManager::Homebrew, "eza", false, None);
        assert_eq!(argv, vec!["brew", "install", "eza"]);
    }
}
