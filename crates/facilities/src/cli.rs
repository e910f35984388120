//! Clap derive structures for the `facilities` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// facilities -- browse a buildings, floors, rooms, and devices hierarchy
#[derive(Debug, Parser)]
#[command(
    name = "facilities",
    version,
    about = "Explore building and device hierarchies from the command line",
    long_about = "Loads a buildings document (floors, apartments, rooms, and their IoT\n\
        devices) from an HTTP endpoint or a local file, and renders building\n\
        summaries, the flattened device list, and the navigation tree.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Buildings document URL (overrides config)
    #[arg(long, short = 'u', env = "FACILITIES_URL", global = true)]
    pub url: Option<String>,

    /// Read the buildings document from a local JSON file instead
    #[arg(long, short = 'f', env = "FACILITIES_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "FACILITIES_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "FACILITIES_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Building summaries: floors, apartments, rooms, devices, online
    #[command(alias = "b")]
    Buildings(BuildingsArgs),

    /// Flattened device list, grouped by type
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Navigation tree of buildings, floors, spaces, and rooms
    Tree,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Buildings ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BuildingsArgs {
    #[command(subcommand)]
    pub command: BuildingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BuildingsCommand {
    /// List every building with its counts
    #[command(alias = "ls")]
    List,

    /// Show one building
    Get {
        /// Building id
        id: String,
    },
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List devices, one table per device type
    #[command(alias = "ls")]
    List(DeviceListArgs),

    /// Device count per type
    Groups,

    /// Read search terms from stdin, one per line, and print the matches
    /// for each term once input has settled
    Search(DeviceSearchArgs),
}

#[derive(Debug, Args)]
pub struct DeviceListArgs {
    /// Case-insensitive match on name, serial number, type, or location
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only devices of this type ("Unknown" for untyped devices)
    #[arg(long = "type", short = 't')]
    pub device_type: Option<String>,

    /// Only devices shown as online
    #[arg(long, conflicts_with = "offline")]
    pub online: bool,

    /// Only devices reported offline
    #[arg(long)]
    pub offline: bool,

    /// Mark a device as selected by key (repeatable)
    #[arg(long = "select", value_name = "KEY")]
    pub select: Vec<String>,

    /// Mark every device of a type as selected (repeatable)
    #[arg(long = "select-type", value_name = "TYPE")]
    pub select_type: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DeviceSearchArgs {
    /// Quiet period in milliseconds before a term is applied [default: from config]
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
