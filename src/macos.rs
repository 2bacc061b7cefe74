//! macOS personalization: desktop apps installed via Homebrew.

use crate::detection::platform::Os;
use crate::error::{KitbagError, Result};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Homebrew invocations, in install order.
const BREW_EXTRAS: &[&[&str]] = &[
    &["install", "raycast"],
    &["install", "--cask", "rectangle"],
    &["install", "--cask", "snipaste"],
    &["install", "monitorcontrol"],
];

/// Install the macOS desktop extras.
///
/// Each install is best-effort. On a non-Darwin host the step errors when
/// requested explicitly (`--macos`) and is skipped with a warning when it
/// was only reached through `--all`.
pub fn apply(
    os: Os,
    explicit: bool,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    if os != Os::Darwin {
        if explicit {
            return Err(KitbagError::ConfigApply {
                name: "macos".to_string(),
                message: "macOS personalization is only available on macOS".to_string(),
            });
        }
        ui.warning("Skipping macOS personalization on a non-macOS host");
        return Ok(());
    }

    ui.show_header("macOS personalization");

    for args in BREW_EXTRAS {
        if let Err(e) = runner.run("brew", args) {
            ui.warning(&format!("brew {} failed: {}", args.join(" "), e));
        }
    }

    ui.success("macOS personalization complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    #[test]
    fn darwin_installs_all_extras() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        apply(Os::Darwin, true, &runner, &mut ui).unwrap();

        assert!(runner.ran("brew install raycast"));
        assert!(runner.ran("brew install --cask rectangle"));
        assert!(runner.ran("brew install --cask snipaste"));
        assert!(runner.ran("brew install monitorcontrol"));
    }

    #[test]
    fn failures_are_warnings() {
        let runner = MockRunner::new().fail_on("rectangle");
        let mut ui = MockUI::new();

        apply(Os::Darwin, true, &runner, &mut ui).unwrap();

        assert!(ui.has_warning("rectangle"));
        // Later installs still ran
        assert!(runner.ran("monitorcontrol"));
    }

    #[test]
    fn linux_explicit_is_an_error() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let err = apply(Os::Linux, true, &runner, &mut ui).unwrap_err();
        assert!(matches!(err, KitbagError::ConfigApply { .. }));
    }

    #[test]
    fn linux_via_all_is_skipped_with_warning() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        apply(Os::Linux, false, &runner, &mut ui).unwrap();

        assert!(ui.has_warning("Skipping macOS personalization"));
        assert!(runner.calls().is_empty());
    }
}
