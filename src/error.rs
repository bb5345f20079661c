//! Error types for appimage_menu operations.
//!
//! Every failure is propagated as an [`InstallError`]. Errors are classified
//! by [`InstallError::kind`] into environment problems the user can fix and
//! defects that indicate a bug.

use crate::artifact::{Artifact, Resource};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appimage_menu operations
pub type Result<T> = std::result::Result<T, InstallError>;

/// Main error type for all appimage_menu operations
#[derive(Error, Debug)]
pub enum InstallError {
    /// Bundle extraction and installation errors
    #[error("Bundle error: {0}")]
    Bundle(#[from] BundleError),

    /// Menu registration errors
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    /// Desktop cache refresh errors
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// An installed artifact is already present and overwriting was not requested
    #[error("{artifact} already exists at {}", path.display())]
    ArtifactExists {
        /// Kind of artifact
        artifact: Artifact,
        /// Destination that already exists
        path: PathBuf,
    },

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// Operation that failed (e.g., "copying icon")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: std::io::Error,
    },

    /// Error walking the bundle directory
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Invalid glob pattern for extracted resources
    #[error("Invalid resource pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Menu template rendering error
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Internal invariant violated
    #[error("Internal error: {0}")]
    Defect(String),
}

/// Bundle extraction and installation errors
#[derive(Error, Debug)]
pub enum BundleError {
    /// The bundle could not be executed for extraction
    #[error("Failed to run '{}' for extraction: {error}", bundle.display())]
    ExtractionFailed {
        /// Bundle path
        bundle: PathBuf,
        /// Spawn error
        #[source]
        error: std::io::Error,
    },

    /// Extraction produced no matching file
    #[error("No {resource} extracted from '{}'", bundle.display())]
    MissingResource {
        /// Bundle path
        bundle: PathBuf,
        /// Expected resource
        resource: Resource,
    },

    /// Extraction produced more than one matching file
    #[error("More than one {resource} extracted from '{}': {found:?}", bundle.display())]
    DuplicateResource {
        /// Bundle path
        bundle: PathBuf,
        /// Resource kind
        resource: Resource,
        /// All matching files
        found: Vec<PathBuf>,
    },

    /// An extracted file has no usable file name
    #[error("Extracted {resource} has no file name: {}", path.display())]
    UnnamedResource {
        /// Resource kind
        resource: Resource,
        /// Offending path
        path: PathBuf,
    },

    /// The bundle path cannot be written into an `Exec=` line
    #[error("Bundle path '{}' contains a line break", bundle.display())]
    UnsupportedPath {
        /// Bundle path
        bundle: PathBuf,
    },
}

/// Menu registration errors
#[derive(Error, Debug)]
pub enum MenuError {
    /// Registration stopped at an artifact; earlier artifacts stay written
    #[error("Menu registration stopped at {artifact}: {source}")]
    Incomplete {
        /// Artifact that failed
        artifact: Artifact,
        /// Underlying failure
        #[source]
        source: Box<InstallError>,
    },
}

/// Desktop cache refresh errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache command not found on PATH
    #[error("Cache command '{command}' not found: {reason}")]
    CommandNotFound {
        /// Command name
        command: String,
        /// Lookup failure
        reason: String,
    },

    /// Cache command could not be started
    #[error("Failed to run cache command '{command}': {error}")]
    SpawnFailed {
        /// Command name
        command: String,
        /// Spawn error
        #[source]
        error: std::io::Error,
    },

    /// Cache command exited unsuccessfully
    #[error("Cache command '{command}' failed with exit code {code:?}: {stderr}")]
    CommandFailed {
        /// Command name
        command: String,
        /// Exit code, if any
        code: Option<i32>,
        /// Captured stderr
        stderr: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Home directory could not be determined
    #[error("Could not determine home directory. Set HOME or pass --home.")]
    HomeNotFound,

    /// Bundle directory missing or not a directory
    #[error("Bundle directory '{}' does not exist or is not a directory", path.display())]
    NotADirectory {
        /// Offending path
        path: PathBuf,
    },
}

/// Classification of an error for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caused by the environment; reportable and fixable by the user
    Environment,
    /// Caused by a bug in this tool
    Defect,
}

impl InstallError {
    /// Classify this error as an environment problem or a defect
    pub fn kind(&self) -> ErrorKind {
        match self {
            InstallError::Pattern(_) | InstallError::Template(_) | InstallError::Defect(_) => {
                ErrorKind::Defect
            }
            InstallError::Menu(MenuError::Incomplete { source, .. }) => source.kind(),
            _ => ErrorKind::Environment,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            InstallError::ArtifactExists { .. } => vec![
                "Re-run with --force to overwrite installed files".to_string(),
            ],
            InstallError::Menu(MenuError::Incomplete { source, .. }) => {
                source.recovery_suggestions()
            }
            InstallError::Bundle(BundleError::ExtractionFailed { bundle, error })
                if error.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                vec![format!("Make the bundle executable: chmod +x '{}'", bundle.display())]
            }
            InstallError::Bundle(BundleError::DuplicateResource { .. }) => vec![
                "Install this bundle manually; it ships more than one candidate file".to_string(),
            ],
            InstallError::Cache(CacheError::CommandNotFound { .. }) => vec![
                "Install the cache tool or pass --cache-command <CMD>".to_string(),
                "Skip the refresh with --no-refresh".to_string(),
            ],
            InstallError::Bundle(BundleError::UnsupportedPath { .. }) => vec![
                "Rename the bundle so its path has no line breaks".to_string(),
            ],
            InstallError::Cli(CliError::InvalidArguments { .. }) => vec![
                "Run with --help to see the accepted values".to_string(),
            ],
            InstallError::Cli(CliError::HomeNotFound) => vec![
                "Pass the target home directory with --home <DIR>".to_string(),
            ],
            _ if self.kind() == ErrorKind::Defect => vec![
                "This is a bug in appimage_menu; please report it".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading file", "creating directory", "copying icon".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| InstallError::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_exists_is_environment() {
        let err = InstallError::ArtifactExists {
            artifact: Artifact::Icon,
            path: PathBuf::from("/tmp/x.png"),
        };
        assert_eq!(err.kind(), ErrorKind::Environment);
        assert!(err.recovery_suggestions()[0].contains("--force"));
    }

    #[test]
    fn test_defect_classification() {
        let err = InstallError::Defect("broken".to_string());
        assert_eq!(err.kind(), ErrorKind::Defect);
        assert!(err.recovery_suggestions()[0].contains("bug"));
    }

    #[test]
    fn test_menu_error_inherits_kind() {
        let err = InstallError::Menu(MenuError::Incomplete {
            artifact: Artifact::MenuLayout,
            source: Box::new(InstallError::ArtifactExists {
                artifact: Artifact::MenuLayout,
                path: PathBuf::from("/tmp/appimages.menu"),
            }),
        });
        assert_eq!(err.kind(), ErrorKind::Environment);
        assert!(err.recovery_suggestions()[0].contains("--force"));
    }

    #[test]
    fn test_fs_context_keeps_path() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.fs_context("reading descriptor", "/tmp/a.desktop").unwrap_err();
        assert_eq!(err.to_string(), "reading descriptor /tmp/a.desktop: gone");
    }
}
