use std::path::{Path, PathBuf};

mod config;
mod format;
mod identifier;
mod show;
mod terminal;
mod validate;

use clap::ArgAction;
use config::Config;
use format::Format;
use show::Show;
use tracing::instrument;
use validate::Validate;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(
        short,
        long,
        default_value = identifiers::config::DEFAULT_FILE_NAME,
        global = true
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Check whether identifiers are valid
    ///
    /// Each input is reported as valid, invalid (well-formed but failing its
    /// checksum or date rules) or unparseable.
    Validate(Validate),

    /// Show the fields decoded from an identifier
    Show(Show),

    /// Print an identifier in a normalised format
    Format(Format),

    /// Show or modify configuration settings
    Config(Config),
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let load = || {
            identifiers::Config::load_or_default(config_path).map_err(|e| anyhow::anyhow!("{e}"))
        };

        match self {
            Self::Validate(command) => command.run(&load()?),
            Self::Show(command) => command.run(&load()?),
            Self::Format(command) => command.run(&load()?),
            Self::Config(command) => command.run(config_path),
        }
    }
}
