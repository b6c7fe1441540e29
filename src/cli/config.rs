use std::path::Path;

use clap::Parser;
use identifiers::{AccountNumberFormat, BirthNumberFormat};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show or modify configuration settings")]
pub struct Config {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Parser)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a configuration file with the default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl Config {
    #[instrument]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => {
                let config = load(path)?;
                let source = if path.exists() {
                    path.display().to_string()
                } else {
                    "defaults".to_string()
                };

                println!("Configuration {}:", format!("({source})").dim());
                println!(
                    "  account_format: {} ({})",
                    format_name(&config.account_format()),
                    "S|F".dim()
                );
                println!(
                    "  birth_number_format: {} ({})",
                    format_name(&config.birth_number_format()),
                    "S|N".dim()
                );
                println!("  fail_on_invalid: {}", config.fail_on_invalid);
            }
            ConfigCommand::Init { force } => {
                if path.exists() && !force {
                    anyhow::bail!(
                        "Configuration file {} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
                identifiers::Config::default()
                    .save(path)
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                println!("Created {}", path.display());
            }
            ConfigCommand::Set { key, value } => {
                let mut config = load(path)?;

                match key.as_str() {
                    "account_format" => {
                        let format: AccountNumberFormat = parse_format(&value)?;
                        config.set_account_format(format);
                    }
                    "birth_number_format" => {
                        let format: BirthNumberFormat = parse_format(&value)?;
                        config.set_birth_number_format(format);
                    }
                    "fail_on_invalid" => {
                        config.fail_on_invalid = value.parse().map_err(|_| {
                            anyhow::anyhow!("Invalid value for fail_on_invalid: {value}")
                        })?;
                    }
                    _ => anyhow::bail!(
                        "Unknown configuration key: {key} (expected account_format, \
                         birth_number_format or fail_on_invalid)"
                    ),
                }

                config.save(path).map_err(|e| anyhow::anyhow!("{e}"))?;
                println!("Set {key} = {value}");
            }
        }
        Ok(())
    }
}

fn load(path: &Path) -> anyhow::Result<identifiers::Config> {
    identifiers::Config::load_or_default(path).map_err(|e| anyhow::anyhow!("{e}"))
}

/// Accepts either a selector (`S`, `F`, `N`) or the serialized name
/// (`standard`, `full`, `number`).
fn parse_format<F>(value: &str) -> anyhow::Result<F>
where
    F: std::str::FromStr<Err = identifiers::UnknownFormatError> + serde::de::DeserializeOwned,
{
    let format = value.parse::<F>().or_else(|error| {
        serde_json::from_value(serde_json::Value::String(value.to_lowercase())).map_err(|_| error)
    })?;
    Ok(format)
}

fn format_name(format: &impl serde::Serialize) -> String {
    serde_json::to_value(format)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("S", AccountNumberFormat::Standard)]
    #[test_case("f", AccountNumberFormat::Full)]
    #[test_case("full", AccountNumberFormat::Full)]
    #[test_case("Standard", AccountNumberFormat::Standard)]
    fn parses_account_format(value: &str, expected: AccountNumberFormat) {
        assert_eq!(parse_format::<AccountNumberFormat>(value).unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_format() {
        let error = parse_format::<BirthNumberFormat>("F").unwrap_err();
        assert!(error.to_string().starts_with("Format 'F' is not valid"));
    }

    #[test]
    fn names_formats_as_serialized() {
        assert_eq!(format_name(&BirthNumberFormat::Number), "number");
        assert_eq!(format_name(&AccountNumberFormat::Standard), "standard");
    }

    #[test]
    fn set_then_show_round_trips_through_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(identifiers::config::DEFAULT_FILE_NAME);

        Config {
            command: ConfigCommand::Set {
                key: "birth_number_format".to_string(),
                value: "N".to_string(),
            },
        }
        .run(&path)
        .unwrap();

        let config = identifiers::Config::load(&path).unwrap();
        assert_eq!(config.birth_number_format(), BirthNumberFormat::Number);
        assert!(config.fail_on_invalid);
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(identifiers::config::DEFAULT_FILE_NAME);

        Config {
            command: ConfigCommand::Init { force: false },
        }
        .run(&path)
        .unwrap();
        assert!(
            Config {
                command: ConfigCommand::Init { force: false },
            }
            .run(&path)
            .is_err()
        );
    }
}
