//! Download and install prebuilt release archives.
//!
//! Pipeline: stream the archive to a scratch dir (hashing as we go),
//! extract it, dig out the executable, and drop it into the target bin
//! dir with sane permissions.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::detection::command::is_executable;
use crate::error::{KitbagError, Result};

use super::release::ReleasePlan;

/// HTTP client for release downloads.
pub struct Downloader {
    http: reqwest::blocking::Client,
}

impl Downloader {
    /// Create a downloader.
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| KitbagError::Download {
                url: String::new(),
                message: format!("could not build HTTP client: {}", e),
            })?;
        Ok(Self { http })
    }

    /// Stream `url` to `dest`, returning the SHA-256 digest of the body.
    ///
    /// Writes to `<dest>.download` first and renames on completion, so a
    /// torn download never leaves a plausible-looking archive behind.
    pub fn fetch(&self, url: &str, dest: &Path) -> Result<[u8; 32]> {
        let mut response = self
            .http
            .get(url)
            .send()
            .map_err(|e| KitbagError::Download {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(KitbagError::Download {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = dest.with_extension("download");
        let mut file = File::create(&temp_path)?;

        let mut hasher = Sha256::new();
        let mut buffer = [0u8; 8192];
        loop {
            let read = response
                .read(&mut buffer)
                .map_err(|e| KitbagError::Download {
                    url: url.to_string(),
                    message: format!("failed while reading body: {}", e),
                })?;
            if read == 0 {
                break;
            }
            file.write_all(&buffer[..read])?;
            hasher.update(&buffer[..read]);
        }

        file.flush()?;
        drop(file);
        fs::rename(&temp_path, dest)?;

        Ok(hasher.finalize().into())
    }
}

/// Extract an archive into `dest`, dispatching on the file name suffix.
///
/// Supports `.tar.gz`/`.tgz` and `.zip`, the formats the pinned releases
/// ship in.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    let name = archive.file_name().and_then(|n| n.to_str()).unwrap_or("");

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        let file = File::open(archive)?;
        let mut tar = tar::Archive::new(GzDecoder::new(file));
        tar.unpack(dest)?;
        Ok(())
    } else if name.ends_with(".zip") {
        let file = File::open(archive)?;
        let mut zip = zip::ZipArchive::new(file)
            .map_err(|e| anyhow::anyhow!("could not open zip archive: {}", e))?;
        zip.extract(dest)
            .map_err(|e| anyhow::anyhow!("could not extract zip archive: {}", e))?;
        Ok(())
    } else {
        Err(KitbagError::Other(anyhow::anyhow!(
            "unsupported archive format: {}",
            archive.display()
        )))
    }
}

/// Find an executable named `name` (exactly, or as a prefix) under `root`.
pub fn find_binary(root: &Path, name: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .map(|f| f == name || f.starts_with(name))
                    .unwrap_or(false)
                && is_executable(entry.path())
        })
        .map(|entry| entry.into_path())
}

/// Pick the install target: the system bin dir when present or creatable,
/// the user's `~/.local/bin` otherwise.
pub fn target_bin_dir(home: &Path) -> PathBuf {
    target_bin_dir_from(Path::new("/usr/local/bin"), home)
}

fn target_bin_dir_from(system: &Path, home: &Path) -> PathBuf {
    if system.is_dir() || fs::create_dir_all(system).is_ok() {
        system.to_path_buf()
    } else {
        home.join(".local/bin")
    }
}

/// Copy `src` into `target_dir` as `name` with mode 0755.
pub fn install_binary(src: &Path, target_dir: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(target_dir)?;
    let dest = target_dir.join(name);
    fs::copy(src, &dest)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&dest, fs::Permissions::from_mode(0o755))?;
    }

    Ok(dest)
}

/// Run the full pipeline for a release plan, installing into the default
/// target bin dir.
pub fn install_release(plan: &ReleasePlan, home: &Path) -> Result<PathBuf> {
    let target = target_bin_dir(home);
    install_release_into(plan, &target)
}

/// Run the full pipeline for a release plan into an explicit target dir.
pub fn install_release_into(plan: &ReleasePlan, target_dir: &Path) -> Result<PathBuf> {
    let scratch = ScratchDir::create(plan.binary)?;
    let archive = scratch.path().join(&plan.archive_name);

    let digest = Downloader::new()?.fetch(&plan.url, &archive)?;
    tracing::info!(
        url = %plan.url,
        sha256 = %hex::encode(digest),
        "downloaded release archive"
    );

    let stage = scratch.path().join("extract");
    extract_archive(&archive, &stage)?;

    let found = find_binary(&stage, plan.binary).ok_or_else(|| KitbagError::BinaryNotFound {
        name: plan.binary.to_string(),
        archive: archive.clone(),
    })?;

    let installed = install_binary(&found, target_dir, plan.binary)?;
    tracing::info!(binary = plan.binary, path = %installed.display(), "installed release binary");
    Ok(installed)
}

/// Scratch directory under the system temp dir, removed on drop.
struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    fn create(label: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("kitbag-{}-{}", label, std::process::id()));
        if path.exists() {
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
