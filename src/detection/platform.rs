//! Host operating system and architecture detection.

use crate::error::{KitbagError, Result};

/// Supported operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Darwin,
}

impl Os {
    /// Detect the host operating system.
    ///
    /// Windows (and anything else) is unsupported and returns
    /// [`KitbagError::UnsupportedOs`].
    pub fn current() -> Result<Self> {
        Self::from_name(std::env::consts::OS)
    }

    /// Parse an OS from a `std::env::consts::OS`-style name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::Darwin),
            other => Err(KitbagError::UnsupportedOs {
                os: other.to_string(),
            }),
        }
    }

    /// Name used in release asset URLs ("linux" / "darwin").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported CPU architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    Arm64,
}

impl Arch {
    /// Detect the host architecture.
    ///
    /// Unknown architectures fall back to Arm64.
    pub fn current() -> Self {
        match std::env::consts::ARCH {
            "x86_64" => Self::Amd64,
            "aarch64" => Self::Arm64,
            _ => Self::Arm64,
        }
    }

    /// Name used in release asset URLs ("amd64" / "arm64").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The detected host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Detect the host platform.
    pub fn current() -> Result<Self> {
        Ok(Self {
            os: Os::current()?,
            arch: Arch::current(),
        })
    }

    /// Rust-style target triple used in bat/eza release asset names.
    pub fn release_triple(&self) -> &'static str {
        match (self.os, self.arch) {
            (Os::Linux, Arch::Amd64) => "x86_64-unknown-linux-gnu",
            (Os::Linux, Arch::Arm64) => "aarch64-unknown-linux-gnu",
            (Os::Darwin, Arch::Amd64) => "x86_64-apple-darwin",
            (Os::Darwin, Arch::Arm64) => "aarch64-apple-darwin",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_from_name_linux() {
        assert_eq!(Os::from_name("linux").unwrap(), Os::Linux);
    }

    #[test]
    fn os_from_name_macos() {
        assert_eq!(Os::from_name("macos").unwrap(), Os::Darwin);
    }

    #[test]
    fn os_from_name_windows_unsupported() {
        let err = Os::from_name("windows").unwrap_err();
        assert!(matches!(err, KitbagError::UnsupportedOs { .. }));
        assert!(err.to_string().contains("windows"));
    }

    #[test]
    fn os_display_uses_url_names() {
        assert_eq!(Os::Darwin.to_string(), "darwin");
        assert_eq!(Os::Linux.to_string(), "linux");
    }

    #[test]
    fn arch_current_is_known_value() {
        let arch = Arch::current();
        assert!(matches!(arch, Arch::Amd64 | Arch::Arm64));
    }

    #[test]
    fn release_triple_linux_amd64() {
        let platform = Platform {
            os: Os::Linux,
            arch: Arch::Amd64,
        };
        assert_eq!(platform.release_triple(), "x86_64-unknown-linux-gnu");
    }

    #[test]
    fn release_triple_darwin_arm64() {
        let platform = Platform {
            os: Os::Darwin,
            arch: Arch::Arm64,
        };
        assert_eq!(platform.release_triple(), "aarch64-apple-darwin");
    }

    #[test]
    fn platform_display() {
        let platform = Platform {
            os: Os::Linux,
            arch: Arch::Arm64,
        };
        assert_eq!(platform.to_string(), "linux/arm64");
    }
}
