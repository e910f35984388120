//! Effective configuration: the config file and environment, with global
//! flags layered on top.

use clap::ValueEnum;

use facilities_config::{Config, SourceConfig};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{self, OutputOpts};

/// Load config and apply global flags. A missing config file means defaults.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = facilities_config::load_config()?;
    apply_overrides(&mut cfg.source, global);
    Ok(cfg)
}

/// Global flags win over file and environment. `--url` clears a configured
/// file so the flag is not silently shadowed.
pub fn apply_overrides(source: &mut SourceConfig, global: &GlobalOpts) {
    if let Some(ref url) = global.url {
        source.url.clone_from(url);
        source.file = None;
    }
    if let Some(ref file) = global.file {
        source.file = Some(file.clone());
    }
    if let Some(timeout) = global.timeout {
        source.timeout = timeout;
    }
}

/// Output settings from flags, else config defaults.
pub fn output_opts(global: &GlobalOpts, cfg: &Config) -> Result<OutputOpts, CliError> {
    let format = match global.output {
        Some(format) => format,
        None => parse_value::<OutputFormat>("defaults.output", &cfg.defaults.output)?,
    };
    let color = match global.color {
        Some(mode) => mode,
        None => parse_value::<ColorMode>("defaults.color", &cfg.defaults.color)?,
    };
    Ok(OutputOpts {
        format,
        color: output::should_color(color),
        quiet: global.quiet,
    })
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
