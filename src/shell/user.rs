//! Privilege and user-identity helpers.
//!
//! kitbag is often run under `sudo` so package installs can write to system
//! paths, but config files still belong to the invoking user. These helpers
//! answer "who is the real user" and hand ownership of written files back.

use std::path::Path;

/// Check if running as root.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

/// The invoking user when running under sudo.
pub fn sudo_user() -> Option<String> {
    std::env::var("SUDO_USER").ok().filter(|s| !s.is_empty())
}

/// Name of the real user: `SUDO_USER` when elevated, `USER` otherwise.
///
/// Falls back to `"default"` when neither variable is set, so callers can
/// still derive per-user paths.
pub fn real_user_name() -> String {
    let name = if is_elevated() {
        sudo_user().or_else(|| std::env::var("USER").ok())
    } else {
        std::env::var("USER").ok()
    };

    name.filter(|s| !s.is_empty())
        .unwrap_or_else(|| "default".to_string())
}

/// Resolve the uid/gid of the invoking sudo user.
///
/// Returns `None` when not elevated, when there is no sudo user (a genuine
/// root login), or when lookup fails.
#[cfg(unix)]
fn real_uid_gid() -> Option<(u32, u32)> {
    if !is_elevated() {
        return None;
    }
    let user = sudo_user()?;

    let uid = id_lookup("-u", &user)?;
    let gid = id_lookup("-g", &user)?;
    Some((uid, gid))
}

#[cfg(unix)]
fn id_lookup(flag: &str, user: &str) -> Option<u32> {
    let output = std::process::Command::new("id")
        .args([flag, user])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}

/// Hand ownership of a path back to the invoking user.
///
/// Only acts when running as root under sudo. Lookup or chown failures are
/// logged, not fatal: a root-owned dotfile is annoying but the run already
/// did its work.
pub fn chown_if_needed(path: &Path) {
    #[cfg(unix)]
    {
        let Some((uid, gid)) = real_uid_gid() else {
            return;
        };

        if let Err(e) = std::os::unix::fs::chown(path, Some(uid), Some(gid)) {
            tracing::warn!(path = %path.display(), error = %e, "could not restore file ownership");
        }
    }

    #[cfg(not(unix))]
    {
        let _ = path;
    }
}
