//! Resource extraction through the bundle's `--appimage-extract` mode.

use crate::artifact::Resource;
use crate::error::{BundleError, ErrorExt, InstallError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;

/// Directory the AppImage runtime extracts into, relative to its working directory
pub const EXTRACT_ROOT: &str = "squashfs-root";

/// Scratch directory owning the extraction output of one bundle.
///
/// The directory and everything extracted into it are removed when the
/// value is dropped, whichever way the install step ends.
#[derive(Debug)]
pub struct ExtractionDir {
    dir: TempDir,
}

impl ExtractionDir {
    /// Create a fresh scratch directory under the system temp dir
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("appimage-extract-")
            .tempdir()
            .fs_context("creating extraction directory", std::env::temp_dir())?;
        Ok(Self { dir })
    }

    /// Working directory the bundle is run in
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory holding the extracted files
    pub fn root(&self) -> PathBuf {
        self.dir.path().join(EXTRACT_ROOT)
    }

    /// Extract `resource` from `bundle` and return the single matching file.
    ///
    /// No match is [`BundleError::MissingResource`], several matches are
    /// [`BundleError::DuplicateResource`]. A non-zero exit of the bundle is
    /// only logged; the match count decides the outcome.
    pub async fn extract(&self, bundle: &Path, resource: Resource) -> Result<PathBuf> {
        log::debug!(
            "Extracting {} from {} into {}",
            resource.pattern(),
            bundle.display(),
            self.path().display()
        );

        let output = tokio::process::Command::new(bundle)
            .arg("--appimage-extract")
            .arg(resource.pattern())
            .current_dir(self.path())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|error| BundleError::ExtractionFailed {
                bundle: bundle.to_path_buf(),
                error,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            log::debug!("{}", line);
        }
        if !output.status.success() {
            log::warn!(
                "{} --appimage-extract {} exited with {:?}: {}",
                bundle.display(),
                resource.pattern(),
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let mut found = self.matches(resource)?;
        match found.len() {
            0 => Err(BundleError::MissingResource {
                bundle: bundle.to_path_buf(),
                resource,
            }
            .into()),
            1 => Ok(found.remove(0)),
            _ => Err(BundleError::DuplicateResource {
                bundle: bundle.to_path_buf(),
                resource,
                found,
            }
            .into()),
        }
    }

    /// Files directly under the extraction root matching `resource`, sorted
    pub fn matches(&self, resource: Resource) -> Result<Vec<PathBuf>> {
        let root = self.root();
        let root_str = root.to_str().ok_or_else(|| {
            InstallError::Defect(format!(
                "extraction directory {root:?} is not valid UTF-8"
            ))
        })?;
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(root_str),
            resource.pattern()
        );

        let mut found = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| InstallError::Fs {
                context: "reading extracted file",
                path: e.path().to_path_buf(),
                error: e.into_error(),
            })?;
            found.push(path);
        }
        found.sort();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_matches_only_top_level() {
        let dir = ExtractionDir::new().expect("Failed to create extraction dir");
        let root = dir.root();
        fs::create_dir_all(root.join("usr/share/icons")).unwrap();
        fs::write(root.join("app.png"), b"").unwrap();
        fs::write(root.join("app.desktop"), b"").unwrap();
        fs::write(root.join("usr/share/icons/other.png"), b"").unwrap();

        assert_eq!(dir.matches(Resource::Icon).unwrap(), vec![root.join("app.png")]);
        assert_eq!(
            dir.matches(Resource::Descriptor).unwrap(),
            vec![root.join("app.desktop")]
        );
    }

    #[test]
    fn test_matches_empty_before_extraction() {
        let dir = ExtractionDir::new().expect("Failed to create extraction dir");
        assert!(dir.matches(Resource::Icon).unwrap().is_empty());
    }

    #[test]
    fn test_directory_removed_on_drop() {
        let dir = ExtractionDir::new().expect("Failed to create extraction dir");
        let path = dir.path().to_path_buf();
        fs::create_dir_all(dir.root()).unwrap();
        fs::write(dir.root().join("app.png"), b"").unwrap();

        drop(dir);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_bundle_is_extraction_error() {
        let dir = ExtractionDir::new().expect("Failed to create extraction dir");
        let err = dir
            .extract(Path::new("/nonexistent/App.AppImage"), Resource::Icon)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InstallError::Bundle(BundleError::ExtractionFailed { .. })
        ));
    }
}
