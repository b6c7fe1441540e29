use clap::Parser;
use identifiers::Config;
use tracing::instrument;

use super::{
    identifier::{Kind, Report},
    terminal::{self, Colorize},
};

#[derive(Debug, Parser)]
#[command(about = "Display the fields decoded from an identifier")]
pub struct Show {
    /// The kind of identifier
    kind: Kind,

    /// The identifier to display
    input: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let report = Report::new(self.kind, &self.input, config, true);

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        if let Some(error) = report.error {
            anyhow::bail!(error);
        }
        Ok(())
    }

    fn output_pretty(report: &Report) {
        println!(
            "{} {}",
            report.formatted.as_deref().unwrap_or(&report.input),
            terminal::status_label(report.status, 0)
        );
        println!("{}", report.kind.to_string().dim());

        if report.details.is_empty() {
            return;
        }

        println!();
        let width = if terminal::is_narrow() {
            0
        } else {
            report
                .details
                .iter()
                .map(|detail| detail.name.len() + 1)
                .max()
                .unwrap_or_default()
        };
        for detail in &report.details {
            println!(
                "  {} {}",
                format!("{:<width$}", format!("{}:", detail.name)).dim(),
                detail.value
            );
        }
    }
}
