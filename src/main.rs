//! appimage_menu - install AppImages into the desktop application menu.
//!
//! Scans a directory for AppImages, installs their desktop entries and icons
//! for the current user, and refreshes the desktop cache.

use appimage_menu::cli;
use appimage_menu::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        // only defects get here; environment errors were already reported
        Err(e) => {
            // never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));

            // Show recovery suggestions for critical errors
            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
