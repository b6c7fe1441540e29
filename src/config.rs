use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountNumberFormat, BirthNumberFormat};

/// The file name used when no configuration path is given.
pub const DEFAULT_FILE_NAME: &str = "czid.toml";

/// Configuration of the `czid` command-line tool.
///
/// It controls the output formats used when identifiers are printed and how
/// strictly validation failures are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The format used to print account numbers.
    account_format: AccountNumberFormat,

    /// The format used to print birth numbers.
    birth_number_format: BirthNumberFormat,

    /// Whether validation should fail if any identifier is unparseable or
    /// invalid.
    pub fail_on_invalid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_format: AccountNumberFormat::default(),
            birth_number_format: BirthNumberFormat::default(),
            fail_on_invalid: default_fail_on_invalid(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration, falling back to the defaults if the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the format used to print account numbers.
    #[must_use]
    pub const fn account_format(&self) -> AccountNumberFormat {
        self.account_format
    }

    /// Returns the format used to print birth numbers.
    #[must_use]
    pub const fn birth_number_format(&self) -> BirthNumberFormat {
        self.birth_number_format
    }

    /// Sets the format used to print account numbers.
    pub const fn set_account_format(&mut self, format: AccountNumberFormat) {
        self.account_format = format;
    }

    /// Sets the format used to print birth numbers.
    pub const fn set_birth_number_format(&mut self, format: BirthNumberFormat) {
        self.birth_number_format = format;
    }
}

const fn default_fail_on_invalid() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        account_format: AccountNumberFormat,

        #[serde(default)]
        birth_number_format: BirthNumberFormat,

        #[serde(default = "default_fail_on_invalid")]
        fail_on_invalid: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                account_format,
                birth_number_format,
                fail_on_invalid,
            } => Self {
                account_format,
                birth_number_format,
                fail_on_invalid,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            account_format: config.account_format,
            birth_number_format: config.birth_number_format,
            fail_on_invalid: config.fail_on_invalid,
        }
    }
}
