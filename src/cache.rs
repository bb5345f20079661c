//! Desktop application cache refresh.
//!
//! Launchers read installed desktop entries from a cache. After installing,
//! the cache is rebuilt from scratch (`kbuildsycoca5 --noincremental` on KDE).

use crate::config::CacheCommand;
use crate::error::{CacheError, Result};
use std::process::Stdio;

/// Run the cache rebuild command and wait for it to finish.
///
/// The program is looked up on `PATH` first so a missing tool is reported
/// as such instead of as a spawn failure.
pub async fn refresh(command: &CacheCommand) -> Result<()> {
    let program = which::which(&command.program).map_err(|e| CacheError::CommandNotFound {
        command: command.program.clone(),
        reason: e.to_string(),
    })?;

    log::debug!(
        "Running {} {}",
        program.display(),
        command.args.join(" ")
    );

    let output = tokio::process::Command::new(&program)
        .args(&command.args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|error| CacheError::SpawnFailed {
            command: command.program.clone(),
            error,
        })?;

    if !output.status.success() {
        return Err(CacheError::CommandFailed {
            command: command.program.clone(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    log::info!("Refreshed desktop cache with {}", command.program);
    Ok(())
}
