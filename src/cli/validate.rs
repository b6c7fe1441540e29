use std::io::{self, BufRead};

use clap::Parser;
use identifiers::Config;
use tracing::instrument;

use super::{
    identifier::{Kind, Report, Status},
    terminal::{self, Colorize},
};

#[derive(Debug, Parser)]
#[command(about = "Check whether identifiers are well-formed and valid")]
pub struct Validate {
    /// The kind of identifier to validate
    kind: Kind,

    /// Identifiers to validate. Reads one per line from stdin if none are
    /// given or if the only input is `-`
    inputs: Vec<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Only print identifiers that are not valid
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Validate {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let inputs = self.read_inputs()?;
        let reports: Vec<Report> = inputs
            .iter()
            .map(|input| Report::new(self.kind, input, config, false))
            .collect();

        match self.output {
            OutputFormat::Table => self.output_table(&reports),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        }

        let failures = reports
            .iter()
            .filter(|report| report.status != Status::Valid)
            .count();
        tracing::debug!(total = reports.len(), failures, "validation finished");

        if failures > 0 && config.fail_on_invalid {
            anyhow::bail!(
                "{failures} of {} {}s are not valid",
                reports.len(),
                self.kind.identifier_kind()
            );
        }
        Ok(())
    }

    fn read_inputs(&self) -> anyhow::Result<Vec<String>> {
        if !self.inputs.is_empty() && self.inputs != ["-"] {
            return Ok(self.inputs.clone());
        }

        let mut inputs = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                inputs.push(line.to_string());
            }
        }
        Ok(inputs)
    }

    fn output_table(&self, reports: &[Report]) {
        let narrow = terminal::is_narrow();

        for report in reports {
            if self.quiet && report.status == Status::Valid {
                continue;
            }

            let label = terminal::status_label(report.status, 11);
            let detail = report
                .error
                .as_deref()
                .or(report.formatted.as_deref())
                .unwrap_or_default();

            if narrow {
                println!("{label} {}", report.input);
                println!("  {}", detail.dim());
            } else {
                println!("{label} {:<24} {}", report.input, detail.dim());
            }
        }

        if !self.quiet {
            let valid = reports
                .iter()
                .filter(|report| report.status == Status::Valid)
                .count();
            println!();
            println!("{valid}/{} valid", reports.len());
        }
    }
}
