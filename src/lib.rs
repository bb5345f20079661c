//! # appimage_menu
//!
//! Install AppImages into the desktop application menu.
//!
//! Each AppImage in a directory is asked to extract its launcher descriptor
//! and icon. The descriptor is rewritten to launch the AppImage in place and
//! both files are installed into the per-user freedesktop.org directories.
//! Optionally an "AppImages" submenu is registered to group them.
//!
//! ## Features
//!
//! - **No manual setup**: desktop entry and icon come from the AppImage itself
//! - **Safe by default**: installed files are never replaced without `--force`
//! - **Menu integration**: optional dedicated submenu via the menu specification
//! - **Scoped extraction**: every bundle is extracted in its own temporary directory
//!
//! ## Usage
//!
//! ```bash
//! appimage_menu ~/Applications                  # install all AppImages
//! appimage_menu --create-menu ~/Applications    # also add the AppImages submenu
//! appimage_menu -f ~/Applications               # replace installed entries
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod artifact;
pub mod bundle;
pub mod cache;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod menu;
pub mod utils;

// Re-export main types for public API
pub use artifact::{Artifact, Resource};
pub use bundle::{InstalledBundle, install_bundle};
pub use cli::Args;
pub use config::{CacheCommand, InstallConfig, InstallPaths};
pub use discovery::find_bundles;
pub use error::{ErrorKind, InstallError, Result};
pub use menu::{MenuFiles, register_menu};
