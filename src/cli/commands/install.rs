//! Install command implementation.
//!
//! Discovers the AppImages, optionally registers the menu, installs every
//! bundle, and refreshes the desktop cache.

use crate::bundle::install_bundle;
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::{cache, discovery, menu};

/// Execute the install run
pub(super) async fn execute_install(args: &Args, runtime: &RuntimeConfig) -> Result<i32> {
    let config = args.install_config()?;
    let root = args.bundle_dir()?;

    config.paths.ensure_all().await?;

    runtime.verbose_println(&format!("Scanning {}", root.display()));
    let bundles = discovery::find_bundles(&root)?;

    if bundles.is_empty() {
        runtime.println(&format!("No AppImages found in {}", root.display()));
    } else {
        runtime.section(&format!(
            "Found {} AppImage{}",
            bundles.len(),
            if bundles.len() == 1 { "" } else { "s" }
        ));
        for bundle in &bundles {
            runtime.indent(&bundle.display().to_string());
        }
    }

    // A failed menu registration does not stop the bundle installs
    if config.create_menu {
        match menu::register_menu(&config).await {
            Ok(files) => {
                runtime.success_println("Registered the AppImages menu");
                for path in [&files.icon, &files.directory, &files.layout] {
                    runtime.verbose_println(&path.display().to_string());
                }
            }
            Err(e) => {
                log::warn!("Menu registration failed: {}", e);
                runtime.warning_println(&format!("Failed to create menu: {}", e));
            }
        }
    }

    for bundle in &bundles {
        let name = bundle
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| bundle.display().to_string());
        runtime.progress_println(&format!("Installing {}", name));

        let installed = match install_bundle(&config, bundle).await {
            Ok(installed) => installed,
            Err(e) => {
                runtime.error_println(&format!("Failed to install {}", name));
                return Err(e);
            }
        };

        runtime.success_println(&format!("Installed {}", name));
        runtime.verbose_println(&installed.desktop_entry.display().to_string());
        runtime.verbose_println(&installed.icon.display().to_string());
    }

    if let Some(command) = &config.cache_command {
        runtime.progress_println(&format!("Refreshing desktop cache with {}", command.program));
        cache::refresh(command).await?;
        runtime.success_println("Desktop cache refreshed");
    }

    Ok(0)
}
