//! `klass`: terminal lookups against the KLASS classification API.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use klass_client::{ClientConfig, KlassClient};

mod cli;
mod commands;
mod logging;
mod output;

use crate::cli::{Cli, Command};
use crate::logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let client = match KlassClient::new(ClientConfig::default()) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("error: cannot build HTTP client: {error}");
            std::process::exit(1);
        }
    };
    let language = cli.language.as_deref();
    let result = match &cli.command {
        Command::Search(args) => commands::run_search(&client, args),
        Command::Info(args) => commands::run_info(&client, args, language),
        Command::Codes(args) => commands::run_codes(&client, args, language),
        Command::Families(args) => commands::run_families(&client, args, language),
        Command::Family(args) => commands::run_family(&client, args, language),
        Command::Sections => commands::run_sections(&client),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}
