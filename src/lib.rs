//! kitbag - Personal development environment bootstrapper.
//!
//! kitbag detects the host platform, checks whether a fixed set of CLI
//! tools is installed (installing the missing ones via the system package
//! manager, an upstream install script, or a pinned prebuilt release), and
//! copies bundled configuration files into the home directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - OS, architecture, and package-manager detection
//! - [`dotfiles`] - Embedded config files and the appliers that install them
//! - [`error`] - Error types and result aliases
//! - [`macos`] - macOS desktop extras
//! - [`shell`] - Command execution and privilege handling
//! - [`tools`] - Tool registry, presence checks, and installers
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use kitbag::detection::package_manager::{detect_with, PackageManager};
//! use kitbag::detection::platform::Os;
//!
//! // Resolve the package manager for a Linux host that has apt
//! let pm = detect_with(Os::Linux, |binary| binary == "apt").unwrap();
//! assert_eq!(pm, PackageManager::Apt);
//! ```

pub mod cli;
pub mod detection;
pub mod dotfiles;
pub mod error;
pub mod macos;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{KitbagError, Result};
