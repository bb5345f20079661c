//! Per-bundle installation.
//!
//! For every discovered AppImage the launcher descriptor and the icon are
//! extracted with the bundle's own `--appimage-extract` support, the
//! descriptor is rewritten to point at the bundle, and both are copied into
//! the user's desktop directories.
//!
//! # Installed Files
//!
//! | Extracted | Destination |
//! |-----------|-------------|
//! | `squashfs-root/<name>.desktop` | `~/.local/share/applications/<name>.desktop` |
//! | `squashfs-root/<name>.png` | `~/.local/share/icons/appimages/<name>.png` |

pub mod descriptor;
mod extract;
mod install;

pub use descriptor::DescriptorRewriter;
pub use extract::{EXTRACT_ROOT, ExtractionDir};
pub use install::{InstalledBundle, install_bundle, install_descriptor, install_icon};
