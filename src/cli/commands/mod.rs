//! Command execution.
//!
//! Validates arguments, runs the install and turns its outcome into an exit
//! code with user-facing error reporting.

mod install;

use crate::cli::{Args, RuntimeConfig};
use crate::error::{ErrorKind, InstallError, Result};

use install::execute_install;

/// Execute the install based on parsed arguments.
///
/// Environment errors are reported here and yield exit code 1. Defects are
/// returned to the caller.
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    let outcome = match args.validate() {
        Ok(()) => execute_install(&args, &config).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => report_failure(e, &config),
    }
}

fn report_failure(e: InstallError, config: &RuntimeConfig) -> Result<i32> {
    if e.kind() == ErrorKind::Defect {
        return Err(e);
    }

    match &e {
        InstallError::Cli(_) => config.error_println(&e.to_string()),
        _ => config.error_println(&format!("Install failed: {}", e)),
    }

    let suggestions = e.recovery_suggestions();
    if !suggestions.is_empty() && !config.is_quiet() {
        config.println("\n💡 Recovery suggestions:");
        for suggestion in suggestions {
            config.println(&format!("  • {}", suggestion));
        }
    }

    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Artifact;
    use crate::error::CliError;
    use std::path::PathBuf;

    fn quiet() -> RuntimeConfig {
        RuntimeConfig::new(false, true)
    }

    #[test]
    fn test_environment_errors_exit_with_one() {
        let err = InstallError::ArtifactExists {
            artifact: Artifact::DesktopEntry,
            path: PathBuf::from("/tmp/myapp.desktop"),
        };
        assert_eq!(report_failure(err, &quiet()).unwrap(), 1);

        let err = InstallError::from(CliError::InvalidArguments {
            reason: "Category must not be empty".to_string(),
        });
        assert_eq!(report_failure(err, &quiet()).unwrap(), 1);
    }

    #[test]
    fn test_defects_are_returned() {
        let err = InstallError::Defect("extracted path is a directory".to_string());
        let returned = report_failure(err, &quiet()).unwrap_err();
        assert_eq!(returned.kind(), ErrorKind::Defect);
        assert!(returned.to_string().contains("extracted path is a directory"));
    }
}
