//! Installing the extracted descriptor and icon of a bundle.

use super::descriptor::DescriptorRewriter;
use super::extract::ExtractionDir;
use crate::artifact::Resource;
use crate::config::InstallConfig;
use crate::error::{BundleError, ErrorExt, Result};
use crate::utils::fs::{install_bytes, install_file};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Files installed for one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledBundle {
    /// Absolute path of the bundle
    pub bundle: PathBuf,
    /// Installed desktop entry
    pub desktop_entry: PathBuf,
    /// Installed icon
    pub icon: PathBuf,
}

/// Install the desktop entry and icon of `bundle`.
///
/// Extraction happens in a scratch directory owned by this call and removed
/// before it returns. The descriptor is installed before the icon; the first
/// failure stops the bundle.
pub async fn install_bundle(config: &InstallConfig, bundle: &Path) -> Result<InstalledBundle> {
    let bundle = bundle
        .absolutize()
        .fs_context("resolving bundle path", bundle)?
        .into_owned();

    // the path ends up on a single `Exec=` line
    if bundle
        .as_os_str()
        .as_encoded_bytes()
        .iter()
        .any(|&b| b == b'\n' || b == b'\r')
    {
        return Err(BundleError::UnsupportedPath { bundle }.into());
    }

    let workspace = ExtractionDir::new()?;

    let descriptor = workspace.extract(&bundle, Resource::Descriptor).await?;
    let desktop_entry = install_descriptor(config, &bundle, &descriptor).await?;

    let icon = workspace.extract(&bundle, Resource::Icon).await?;
    let icon = install_icon(config, &icon).await?;

    Ok(InstalledBundle {
        bundle,
        desktop_entry,
        icon,
    })
}

/// Rewrite the extracted descriptor for `bundle` and install it into the
/// applications directory. The extracted file is removed afterwards.
pub async fn install_descriptor(
    config: &InstallConfig,
    bundle: &Path,
    extracted: &Path,
) -> Result<PathBuf> {
    let dest = destination(&config.paths.applications_dir, Resource::Descriptor, extracted)?;

    let raw = tokio::fs::read(extracted)
        .await
        .fs_context("reading desktop file", extracted)?;

    let rewriter = DescriptorRewriter::new(bundle, &config.paths.icons_dir, &config.category);
    install_bytes(
        Resource::Descriptor.artifact(),
        rewriter.rewrite(&raw),
        &dest,
        config.force,
    )
    .await?;

    tokio::fs::remove_file(extracted)
        .await
        .fs_context("removing extracted file", extracted)?;

    Ok(dest)
}

/// Copy the extracted icon into the icons directory
pub async fn install_icon(config: &InstallConfig, extracted: &Path) -> Result<PathBuf> {
    let dest = destination(&config.paths.icons_dir, Resource::Icon, extracted)?;
    install_file(Resource::Icon.artifact(), extracted, &dest, config.force).await?;
    Ok(dest)
}

fn destination(dir: &Path, resource: Resource, extracted: &Path) -> Result<PathBuf> {
    let name = extracted
        .file_name()
        .ok_or_else(|| BundleError::UnnamedResource {
            resource,
            path: extracted.to_path_buf(),
        })?;
    Ok(dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, InstallConfig) {
        let home = TempDir::new().expect("Failed to create temp dir");
        let config = InstallConfig::for_home(home.path());
        (home, config)
    }

    #[tokio::test]
    async fn test_install_descriptor_rewrites_and_removes_source() {
        let (home, config) = setup();
        let extracted = home.path().join("myapp.desktop");
        fs::write(
            &extracted,
            "[Desktop Entry]\nName=My App\nExec=myapp %U\nIcon=myapp\nCategories=Utility;\n",
        )
        .unwrap();

        let dest = install_descriptor(&config, Path::new("/opt/My.AppImage"), &extracted)
            .await
            .unwrap();

        assert_eq!(dest, config.paths.applications_dir.join("myapp.desktop"));
        let installed = fs::read_to_string(&dest).unwrap();
        assert!(installed.contains("Exec='/opt/My.AppImage' %U\n"));
        assert!(installed.contains("Categories=Utility;AppImage;\n"));
        assert!(installed.contains(&format!(
            "Icon={}/myapp.png\n",
            config.paths.icons_dir.display()
        )));
        assert!(!extracted.exists());
    }

    #[tokio::test]
    async fn test_install_descriptor_keeps_latin1_bytes() {
        let (home, config) = setup();
        let extracted = home.path().join("editor.desktop");
        fs::write(
            &extracted,
            b"[Desktop Entry]\nName=Editor\nName[fr]=\xC9diteur\nExec=editor %F\n",
        )
        .unwrap();

        let dest = install_descriptor(&config, Path::new("/opt/Editor.AppImage"), &extracted)
            .await
            .unwrap();

        let installed = fs::read(&dest).unwrap();
        let expected: &[u8] = b"[Desktop Entry]\nName=Editor\nName[fr]=\xC9diteur\nExec='/opt/Editor.AppImage' %F\n";
        assert_eq!(installed, expected);
    }

    #[tokio::test]
    async fn test_bundle_path_with_line_break_is_rejected() {
        let (home, config) = setup();
        let bundle = home.path().join("Bad\nName.AppImage");

        let err = install_bundle(&config, &bundle).await.unwrap_err();

        assert!(matches!(
            err,
            InstallError::Bundle(BundleError::UnsupportedPath { .. })
        ));
        assert!(!config.paths.applications_dir.exists());
    }

    #[tokio::test]
    async fn test_install_descriptor_keeps_existing_entry() {
        let (home, config) = setup();
        fs::create_dir_all(&config.paths.applications_dir).unwrap();
        let dest = config.paths.applications_dir.join("myapp.desktop");
        fs::write(&dest, "old").unwrap();
        let extracted = home.path().join("myapp.desktop");
        fs::write(&extracted, "Exec=myapp\n").unwrap();

        let err = install_descriptor(&config, Path::new("/opt/My.AppImage"), &extracted)
            .await
            .unwrap_err();

        assert!(matches!(err, InstallError::ArtifactExists { .. }));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
    }

    #[tokio::test]
    async fn test_install_icon_uses_extracted_name() {
        let (home, mut config) = setup();
        config.force = true;
        let extracted = home.path().join("org.example.App.png");
        fs::write(&extracted, b"\x89PNG").unwrap();

        let dest = install_icon(&config, &extracted).await.unwrap();

        assert_eq!(dest, config.paths.icons_dir.join("org.example.App.png"));
        assert_eq!(fs::read(&dest).unwrap(), b"\x89PNG");
    }
}
