//! Command dispatch: bridges CLI args -> snapshot views -> output formatting.

pub mod buildings;
pub mod config_cmd;
pub mod devices;
pub mod tree;
pub mod util;

use facilities_config::Config;
use facilities_core::Snapshot;

use crate::cli::Command;
use crate::error::CliError;
use crate::output::OutputOpts;

/// Dispatch a command that needs the buildings document.
pub async fn dispatch(
    cmd: Command,
    snapshot: &Snapshot,
    out: &OutputOpts,
    cfg: &Config,
) -> Result<(), CliError> {
    match cmd {
        Command::Buildings(args) => buildings::handle(snapshot, args, out),
        Command::Devices(args) => devices::handle(snapshot, args, out, cfg).await,
        Command::Tree => tree::handle(snapshot, out),
        // Config and Completions are handled before the document is loaded
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
