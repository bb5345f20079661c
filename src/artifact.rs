//! Kinds of files extracted from bundles and installed on the system.

use std::fmt;

/// A resource extracted from a bundle with `--appimage-extract`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Launcher descriptor (`*.desktop`)
    Descriptor,
    /// Application icon (`*.png`)
    Icon,
}

impl Resource {
    /// Glob passed to the bundle and matched inside the extraction root
    pub fn pattern(&self) -> &'static str {
        match self {
            Resource::Descriptor => "*.desktop",
            Resource::Icon => "*.png",
        }
    }

    /// Artifact this resource becomes once installed
    pub fn artifact(&self) -> Artifact {
        match self {
            Resource::Descriptor => Artifact::DesktopEntry,
            Resource::Icon => Artifact::Icon,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Descriptor => write!(f, "desktop file"),
            Resource::Icon => write!(f, "icon"),
        }
    }
}

/// A file written into the user's desktop environment directories.
///
/// All artifacts share one overwrite policy: an existing file is only
/// replaced when force is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Bundle icon in the icons directory
    Icon,
    /// Rewritten launcher descriptor in the applications directory
    DesktopEntry,
    /// Icon of the AppImages menu
    MenuIcon,
    /// `.directory` entry describing the AppImages menu
    MenuDirectory,
    /// XML menu fragment in `applications-merged`
    MenuLayout,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Artifact::Icon => "icon",
            Artifact::DesktopEntry => "desktop entry",
            Artifact::MenuIcon => "menu icon",
            Artifact::MenuDirectory => "menu directory entry",
            Artifact::MenuLayout => "menu layout",
        };
        f.write_str(name)
    }
}
