//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Commands, ScanArgs};
use super::handlers::{handle_scan, handle_stats, handle_versions};
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Scan {
            root,
            rules,
            output,
            include_meta,
            verbose,
        } => handle_scan(&ScanArgs {
            root,
            rules,
            output,
            include_meta,
            verbose,
        }),
        Commands::Versions { report } => handle_versions(&report),
        Commands::Stats { report } => handle_stats(&report),
    }
}
