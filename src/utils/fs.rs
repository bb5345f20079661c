//! File system helpers for installing artifacts.
//!
//! Every installed file goes through the same overwrite policy: when the
//! destination already exists it is only replaced if `force` is set.
//! Otherwise an [`InstallError::ArtifactExists`] is returned and nothing is
//! touched.

use crate::artifact::Artifact;
use crate::error::{ErrorExt, InstallError, Result};
use std::path::Path;
use tokio::fs;

/// Fails with [`InstallError::ArtifactExists`] if `to` exists and `force` is not set.
pub async fn check_overwrite(artifact: Artifact, to: &Path, force: bool) -> Result<()> {
    let exists = fs::try_exists(to)
        .await
        .fs_context("checking destination", to)?;
    if exists && !force {
        return Err(InstallError::ArtifactExists {
            artifact,
            path: to.to_path_buf(),
        });
    }
    if exists {
        log::debug!("Overwriting {} at {}", artifact, to.display());
    }
    Ok(())
}

/// Copies a regular file into place under the overwrite policy, then removes
/// the source.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn install_file(artifact: Artifact, from: &Path, to: &Path, force: bool) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading source metadata", from)?;
    if !metadata.is_file() {
        return Err(InstallError::Defect(format!(
            "{from:?} is not a file"
        )));
    }

    check_overwrite(artifact, to, force).await?;

    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file to", to)?;
    fs::remove_file(from)
        .await
        .fs_context("removing extracted file", from)?;

    log::info!("Installed {} {}", artifact, to.display());
    Ok(())
}

/// Writes `contents` to `to` under the overwrite policy.
pub async fn install_bytes(
    artifact: Artifact,
    contents: impl AsRef<[u8]>,
    to: &Path,
    force: bool,
) -> Result<()> {
    check_overwrite(artifact, to, force).await?;

    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::write(to, contents).await.fs_context("writing", to)?;

    log::info!("Installed {} {}", artifact, to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_install_file_moves_into_place() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src = temp_dir.path().join("app.png");
        let dst = temp_dir.path().join("icons").join("app.png");
        std::fs::write(&src, b"png").unwrap();

        install_file(Artifact::Icon, &src, &dst, false).await.unwrap();

        assert_eq!(std::fs::read(&dst).unwrap(), b"png");
        assert!(!src.exists());
    }

    #[tokio::test]
    async fn test_install_file_refuses_existing_without_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src = temp_dir.path().join("new.png");
        let dst = temp_dir.path().join("old.png");
        std::fs::write(&src, b"new").unwrap();
        std::fs::write(&dst, b"old").unwrap();

        let err = install_file(Artifact::Icon, &src, &dst, false)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InstallError::ArtifactExists {
                artifact: Artifact::Icon,
                ..
            }
        ));
        assert_eq!(std::fs::read(&dst).unwrap(), b"old");
        assert!(src.exists());
    }

    #[tokio::test]
    async fn test_install_file_overwrites_with_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src = temp_dir.path().join("new.png");
        let dst = temp_dir.path().join("old.png");
        std::fs::write(&src, b"new").unwrap();
        std::fs::write(&dst, b"old").unwrap();

        install_file(Artifact::Icon, &src, &dst, true).await.unwrap();

        assert_eq!(std::fs::read(&dst).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_install_file_rejects_directory_source() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dst = temp_dir.path().join("out");

        let err = install_file(Artifact::Icon, temp_dir.path(), &dst, false)
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Defect(_)));
    }

    #[tokio::test]
    async fn test_install_bytes_policy() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dst = temp_dir.path().join("appimages.menu");

        install_bytes(Artifact::MenuLayout, "first", &dst, false)
            .await
            .unwrap();
        assert!(install_bytes(Artifact::MenuLayout, "second", &dst, false)
            .await
            .is_err());
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "first");

        install_bytes(Artifact::MenuLayout, "third", &dst, true)
            .await
            .unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "third");
    }
}
