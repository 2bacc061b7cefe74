//! Git configuration applier.

use std::path::Path;

use crate::error::Result;
use crate::ui::UserInterface;

use super::template;
use super::writer::{FileWriter, WriteOutcome};

/// User identity for the rendered `.gitconfig`.
#[derive(Debug, Clone, Default)]
pub struct GitIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

const DEFAULT_NAME: &str = "Your Name";
const DEFAULT_EMAIL: &str = "you@example.com";

/// Write `~/.gitconfig` from the bundled template.
pub fn apply(
    home: &Path,
    writer: &FileWriter,
    identity: &GitIdentity,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.show_header("Configuring git");

    if identity.name.is_none() || identity.email.is_none() {
        ui.warning(
            "No --git-name/--git-email given; writing a placeholder identity \
             (edit ~/.gitconfig afterwards)",
        );
    }

    let vars = template::vars([
        ("git_name", identity.name.as_deref().unwrap_or(DEFAULT_NAME)),
        (
            "git_email",
            identity.email.as_deref().unwrap_or(DEFAULT_EMAIL),
        ),
    ]);
    let rendered = template::render(super::asset("git/gitconfig")?, &vars)?;

    let dest = home.join(".gitconfig");
    match writer.write_config(&dest, rendered.as_bytes())? {
        WriteOutcome::Written => ui.success("Wrote ~/.gitconfig"),
        WriteOutcome::SkippedExisting => {
            ui.message("~/.gitconfig exists, skipping (use --force to overwrite)")
        }
        WriteOutcome::WouldWrite => ui.message("dry-run: would write ~/.gitconfig"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_rendered_identity() {
        let temp = TempDir::new().unwrap();
        let writer = FileWriter::new(false, false);
        let mut ui = MockUI::new();
        let identity = GitIdentity {
            name: Some("Alice Example".to_string()),
            email: Some("alice@example.com".to_string()),
        };

        apply(temp.path(), &writer, &identity, &mut ui).unwrap();

        let written = fs::read_to_string(temp.path().join(".gitconfig")).unwrap();
        assert!(written.contains("name = Alice Example"));
        assert!(written.contains("email = alice@example.com"));
        assert!(!written.contains("${git_name}"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_identity_warns_and_uses_placeholders() {
        let temp = TempDir::new().unwrap();
        let writer = FileWriter::new(false, false);
        let mut ui = MockUI::new();

        apply(temp.path(), &writer, &GitIdentity::default(), &mut ui).unwrap();

        assert!(ui.has_warning("placeholder identity"));
        let written = fs::read_to_string(temp.path().join(".gitconfig")).unwrap();
        assert!(written.contains(DEFAULT_NAME));
        assert!(written.contains(DEFAULT_EMAIL));
    }

    #[test]
    fn existing_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let writer = FileWriter::new(false, false);
        let mut ui = MockUI::new();
        fs::write(temp.path().join(".gitconfig"), "mine").unwrap();

        apply(temp.path(), &writer, &GitIdentity::default(), &mut ui).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join(".gitconfig")).unwrap(),
            "mine"
        );
        assert!(ui.has_output("skipping"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let writer = FileWriter::new(false, true);
        let mut ui = MockUI::new();

        apply(temp.path(), &writer, &GitIdentity::default(), &mut ui).unwrap();

        assert!(!temp.path().join(".gitconfig").exists());
        assert!(ui.has_output("dry-run"));
    }
}
