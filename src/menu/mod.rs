//! AppImages menu registration.
//!
//! Writes the three files that make desktop environments following the
//! freedesktop.org menu specification show a dedicated "AppImages" submenu:
//!
//! ```text
//! ~/.local/share/icons/appimages/appimage_icon.svg        (menu icon)
//! ~/.local/share/desktop-directories/appimages.directory  (directory entry)
//! ~/.config/menus/applications-merged/appimages.menu      (menu layout)
//! ```
//!
//! The files are written in that order, each under the overwrite policy.
//! When one of them already exists and force is not set, registration stops
//! there and the files written before it are kept.

use crate::artifact::Artifact;
use crate::config::InstallConfig;
use crate::error::{InstallError, MenuError, Result};
use crate::utils::fs::install_bytes;
use handlebars::Handlebars;
use serde_json::json;
use std::path::PathBuf;

/// Menu title shown in the launcher
pub const MENU_NAME: &str = "AppImages";

/// File name of the menu icon
pub const MENU_ICON_NAME: &str = "appimage_icon.svg";

/// File name of the directory entry
pub const DIRECTORY_FILE_NAME: &str = "appimages.directory";

/// File name of the menu layout
pub const LAYOUT_FILE_NAME: &str = "appimages.menu";

const MENU_ICON: &[u8] = include_bytes!("../../assets/appimage_icon.svg");
const DIRECTORY_TEMPLATE: &str = include_str!("templates/appimages.directory.hbs");
const LAYOUT_TEMPLATE: &str = include_str!("templates/appimages.menu.hbs");

/// Destinations of the menu files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFiles {
    /// Menu icon
    pub icon: PathBuf,
    /// Directory entry
    pub directory: PathBuf,
    /// Menu layout
    pub layout: PathBuf,
}

impl MenuFiles {
    /// Menu file locations for `config`
    pub fn for_config(config: &InstallConfig) -> Self {
        Self {
            icon: config.paths.icons_dir.join(MENU_ICON_NAME),
            directory: config.paths.directories_dir.join(DIRECTORY_FILE_NAME),
            layout: config.paths.menus_dir.join(LAYOUT_FILE_NAME),
        }
    }
}

/// Rendered contents of the two text menu files
#[derive(Debug, Clone)]
pub struct MenuContents {
    /// `.directory` entry
    pub directory: String,
    /// XML menu layout
    pub layout: String,
}

/// Render the directory entry and menu layout for `config`
pub fn render(config: &InstallConfig, files: &MenuFiles) -> Result<MenuContents> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    for (name, template) in [
        (DIRECTORY_FILE_NAME, DIRECTORY_TEMPLATE),
        (LAYOUT_FILE_NAME, LAYOUT_TEMPLATE),
    ] {
        handlebars
            .register_template_string(name, template)
            .map_err(|e| InstallError::Defect(format!("menu template {name}: {e}")))?;
    }

    let data = json!({
        "name": MENU_NAME,
        "icon": files.icon.display().to_string(),
        "directory": DIRECTORY_FILE_NAME,
        "category": config.category,
    });

    Ok(MenuContents {
        directory: handlebars.render(DIRECTORY_FILE_NAME, &data)?,
        layout: handlebars.render(LAYOUT_FILE_NAME, &data)?,
    })
}

/// Write the menu icon, directory entry, and layout.
///
/// Returns the installed locations. Stops at the first artifact that cannot
/// be written; nothing written before it is rolled back.
pub async fn register_menu(config: &InstallConfig) -> Result<MenuFiles> {
    let files = MenuFiles::for_config(config);
    let contents = render(config, &files)?;

    for (artifact, bytes, dest) in [
        (Artifact::MenuIcon, MENU_ICON, &files.icon),
        (
            Artifact::MenuDirectory,
            contents.directory.as_bytes(),
            &files.directory,
        ),
        (Artifact::MenuLayout, contents.layout.as_bytes(), &files.layout),
    ] {
        install_bytes(artifact, bytes, dest, config.force)
            .await
            .map_err(|source| MenuError::Incomplete {
                artifact,
                source: Box::new(source),
            })?;
    }

    Ok(files)
}
