//! Host platform and package-manager detection.

pub mod command;
pub mod package_manager;
pub mod platform;

pub use command::{command_version, lookup_on_path, on_path};
pub use package_manager::{detect as detect_package_manager, PackageManager};
pub use platform::{Arch, Os, Platform};
