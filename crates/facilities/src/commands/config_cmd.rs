//! Config subcommand handlers.

use facilities_config::{Config, config_path, save_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let out = config::output_opts(global, &cfg)?;
            let rendered = output::render_single(
                out.format,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_default(),
                |c| toml::to_string_pretty(c).unwrap_or_default(),
            )?;
            output::print_output(rendered.trim_end(), out.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let mut cfg = Config::default();
            config::apply_overrides(&mut cfg.source, global);
            if let Some(format) = global.output {
                cfg.defaults.output = output_name(format).into();
            }
            let written = save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Wrote {}", written.display());
            }
            Ok(())
        }
    }
}

fn output_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Table => "table",
        OutputFormat::Json => "json",
        OutputFormat::JsonCompact => "json-compact",
        OutputFormat::Yaml => "yaml",
        OutputFormat::Plain => "plain",
    }
}
