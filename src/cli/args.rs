//! Command line argument parsing and validation.
//!
//! The tool is designed to "just work": point it at the directory holding
//! your AppImages and they show up in the application menu.

use crate::config::{CacheCommand, DEFAULT_CACHE_COMMAND, DEFAULT_CATEGORY, InstallConfig};
use crate::error::{CliError, ErrorExt, Result};
use clap::Parser;
use path_absolutize::Absolutize;
use std::path::PathBuf;

/// Install AppImages into the desktop application menu
#[derive(Parser, Debug)]
#[command(
    name = "appimage_menu",
    version,
    about = "Install AppImages into the desktop application menu",
    long_about = "Scan a directory for AppImages, extract their desktop entries and icons, \
and install them for the current user so they show up in the application launcher.

Usage:
  appimage_menu ~/Applications
  appimage_menu --create-menu ~/Applications
  appimage_menu -f ~/Applications          # replace previously installed entries"
)]
pub struct Args {
    /// Directory containing the AppImages (not searched recursively)
    #[arg(index = 1, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite previously installed desktop entries, icons, and menu files
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Register an "AppImages" submenu in the application launcher
    #[arg(long)]
    pub create_menu: bool,

    /// Home directory the desktop files are installed under
    #[arg(long, value_name = "DIR", env = "HOME", hide_env_values = true)]
    pub home: Option<PathBuf>,

    /// Category tag added to installed entries and shown by the submenu
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CATEGORY)]
    pub category: String,

    /// Program that rebuilds the desktop cache (run with --noincremental)
    #[arg(long, value_name = "CMD", default_value = DEFAULT_CACHE_COMMAND)]
    pub cache_command: String,

    /// Skip rebuilding the desktop cache
    #[arg(long)]
    pub no_refresh: bool,

    /// Show every installed file
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| -> Result<()> {
            Err(CliError::InvalidArguments { reason }.into())
        };

        if self.category.is_empty() {
            return invalid("Category must not be empty".to_string());
        }
        if self
            .category
            .chars()
            .any(|c| c == ';' || c == '=' || c.is_whitespace() || c.is_control())
        {
            return invalid(format!(
                "Category '{}' must not contain ';', '=' or whitespace",
                self.category
            ));
        }
        if !self.no_refresh && self.cache_command.trim().is_empty() {
            return invalid("Cache command must not be empty (use --no-refresh to skip)".to_string());
        }

        Ok(())
    }

    /// Absolute path of the directory to scan
    pub fn bundle_dir(&self) -> Result<PathBuf> {
        Ok(self
            .dir
            .absolutize()
            .fs_context("resolving bundle directory", &self.dir)?
            .into_owned())
    }

    /// Build the install configuration, resolving the home directory
    pub fn install_config(&self) -> Result<InstallConfig> {
        let home = self
            .home
            .clone()
            .filter(|h| !h.as_os_str().is_empty())
            .or_else(dirs::home_dir)
            .ok_or(CliError::HomeNotFound)?;
        let home = home
            .absolutize()
            .fs_context("resolving home directory", &home)?
            .into_owned();

        let mut config = InstallConfig::for_home(&home);
        config.force = self.force;
        config.create_menu = self.create_menu;
        config.category = self.category.clone();
        config.cache_command = if self.no_refresh {
            None
        } else {
            Some(CacheCommand::rebuild(self.cache_command.trim()))
        };

        Ok(config)
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(verbose, quiet),
        }
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print message only in verbose mode
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print progress message
    pub fn progress_println(&self, message: &str) {
        let _ = self.output.progress(message);
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        let _ = self.output.section(title);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.verbose, args.quiet)
    }
}
