use anyhow::Context;
use clap::Parser;
use identifiers::Config;
use tracing::instrument;

use super::identifier::Kind;

#[derive(Debug, Parser)]
#[command(about = "Print an identifier in a normalised format")]
pub struct Format {
    /// The kind of identifier
    kind: Kind,

    /// The identifier to format
    input: String,

    /// Format selector: `S` (standard) or `F` (full) for account numbers,
    /// `S` (standard) or `N` (number) for birth numbers. Defaults to the
    /// configured format
    #[arg(short, long, value_name = "SELECTOR")]
    format: Option<String>,
}

impl Format {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let parsed = self
            .kind
            .parse(&self.input)
            .with_context(|| format!("Cannot format '{}'", self.input))?;

        if !parsed.is_valid() {
            tracing::warn!(input = %self.input, "formatting an invalid {}", self.kind.identifier_kind());
        }

        let text = match self.format.as_deref() {
            Some(selector) => parsed.formatted_with(selector)?,
            None => parsed.formatted(config),
        };
        println!("{text}");
        Ok(())
    }
}
