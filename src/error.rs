//! Error types for kitbag operations.
//!
//! This module defines [`KitbagError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `KitbagError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `KitbagError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kitbag operations.
#[derive(Debug, Error)]
pub enum KitbagError {
    /// Host operating system is not supported.
    #[error("Unsupported operating system: {os}")]
    UnsupportedOs { os: String },

    /// No usable package manager was found on the host.
    #[error("No supported package manager found (looked for apt, yum, dnf, pacman)")]
    NoPackageManager,

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// Installing a tool failed.
    #[error("Failed to install '{tool}': {message}")]
    ToolInstall { tool: String, message: String },

    /// Downloading a file failed.
    #[error("Download from {url} failed: {message}")]
    Download { url: String, message: String },

    /// A downloaded archive did not contain the expected binary.
    #[error("No executable named '{name}' found in {archive}")]
    BinaryNotFound { name: String, archive: PathBuf },

    /// Applying a configuration file failed.
    #[error("Failed to apply {name} configuration: {message}")]
    ConfigApply { name: String, message: String },

    /// Template rendering failed.
    #[error("Template error: {message}")]
    Template { message: String },

    /// The user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for kitbag operations.
pub type Result<T> = std::result::Result<T, KitbagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_os_displays_os_name() {
        let err = KitbagError::UnsupportedOs {
            os: "windows".into(),
        };
        assert!(err.to_string().contains("windows"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = KitbagError::CommandFailed {
            command: "apt install -y git".into(),
            code: Some(100),
            output: String::new(),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt install -y git"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn tool_install_displays_tool_and_message() {
        let err = KitbagError::ToolInstall {
            tool: "fzf".into(),
            message: "archive was empty".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fzf"));
        assert!(msg.contains("archive was empty"));
    }

    #[test]
    fn download_displays_url() {
        let err = KitbagError::Download {
            url: "https://example.com/fzf.tar.gz".into(),
            message: "connection refused".into(),
        };
        assert!(err.to_string().contains("https://example.com/fzf.tar.gz"));
    }

    #[test]
    fn binary_not_found_displays_name_and_archive() {
        let err = KitbagError::BinaryNotFound {
            name: "bat".into(),
            archive: PathBuf::from("/tmp/bat.tar.gz"),
        };
        let msg = err.to_string();
        assert!(msg.contains("bat"));
        assert!(msg.contains("/tmp/bat.tar.gz"));
    }

    #[test]
    fn config_apply_displays_name_and_message() {
        let err = KitbagError::ConfigApply {
            name: "zsh".into(),
            message: "could not create config dir".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("zsh"));
        assert!(msg.contains("could not create config dir"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: KitbagError = io_err.into();
        assert!(matches!(err, KitbagError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(KitbagError::NoPackageManager)
        }
        assert!(returns_error().is_err());
    }
}
