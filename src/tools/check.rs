//! Tool presence checks.

use std::path::Path;

use crate::detection::command::{is_executable, on_path};

use super::registry::{spec, CheckMethod};
use super::Tool;

/// Check whether a tool is installed.
pub fn is_installed(tool: Tool, home: &Path) -> bool {
    is_installed_with(tool, home, on_path)
}

/// Presence check with an injectable PATH probe, for tests.
pub fn is_installed_with<F>(tool: Tool, home: &Path, probe: F) -> bool
where
    F: Fn(&str) -> bool,
{
    match spec(tool).check {
        CheckMethod::OnPath(binary) => probe(binary),
        CheckMethod::HomeMarker(marker) => home.join(marker).is_dir(),
        CheckMethod::PathOrHome { binary, home_path } => {
            probe(binary) || is_executable(&home.join(home_path))
        }
    }
}
