//! Install configuration built once from the command line.

use crate::error::{ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Default category tag appended to installed desktop entries
pub const DEFAULT_CATEGORY: &str = "AppImage";

/// Default desktop cache rebuild program (KDE)
pub const DEFAULT_CACHE_COMMAND: &str = "kbuildsycoca5";

/// Target directories, all derived from one home directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    /// Desktop entries (`~/.local/share/applications`)
    pub applications_dir: PathBuf,
    /// Bundle and menu icons (`~/.local/share/icons/appimages`)
    pub icons_dir: PathBuf,
    /// Menu fragments (`~/.config/menus/applications-merged`)
    pub menus_dir: PathBuf,
    /// Menu directory entries (`~/.local/share/desktop-directories`)
    pub directories_dir: PathBuf,
}

impl InstallPaths {
    /// Derive the standard per-user locations from `home`
    pub fn from_home(home: &Path) -> Self {
        let data = home.join(".local").join("share");
        Self {
            applications_dir: data.join("applications"),
            icons_dir: data.join("icons").join("appimages"),
            menus_dir: home.join(".config").join("menus").join("applications-merged"),
            directories_dir: data.join("desktop-directories"),
        }
    }

    /// All four directories
    pub fn all(&self) -> [&Path; 4] {
        [
            &self.applications_dir,
            &self.icons_dir,
            &self.menus_dir,
            &self.directories_dir,
        ]
    }

    /// Create every target directory that does not exist yet
    pub async fn ensure_all(&self) -> Result<()> {
        for dir in self.all() {
            tokio::fs::create_dir_all(dir)
                .await
                .fs_context("creating target directory", dir)?;
        }
        Ok(())
    }
}

/// Desktop cache rebuild invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheCommand {
    /// Program name or path
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl CacheCommand {
    /// Full, non-incremental rebuild with the given program
    pub fn rebuild(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec!["--noincremental".to_string()],
        }
    }
}

impl Default for CacheCommand {
    fn default() -> Self {
        Self::rebuild(DEFAULT_CACHE_COMMAND)
    }
}

/// Configuration for an install run
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Target directories
    pub paths: InstallPaths,
    /// Overwrite previously installed artifacts
    pub force: bool,
    /// Register the AppImages menu
    pub create_menu: bool,
    /// Category tag appended to desktop entries and included by the menu
    pub category: String,
    /// Cache rebuild to run at the end (`None` skips the refresh)
    pub cache_command: Option<CacheCommand>,
}

impl InstallConfig {
    /// Default configuration for the given home directory
    pub fn for_home(home: &Path) -> Self {
        Self {
            paths: InstallPaths::from_home(home),
            force: false,
            create_menu: false,
            category: DEFAULT_CATEGORY.to_string(),
            cache_command: Some(CacheCommand::default()),
        }
    }
}
