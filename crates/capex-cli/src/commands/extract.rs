//! Geography and renewables commands - extract one report page.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use capex_core::models::report::FieldRecord;
use capex_core::{ExtractionResult, GeographyExtractor, RenewablesExtractor, ReportExtractor};

use super::config::load_config;

/// Arguments shared by the extraction commands.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF (default: the configured report path)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Which report page to extract.
#[derive(Clone, Copy, Debug)]
pub enum Report {
    Geography,
    Renewables,
}

pub async fn run(report: Report, args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let report_config = match report {
        Report::Geography => &config.geography,
        Report::Renewables => &config.renewables,
    };
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| report_config.pdf_path.clone());

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    info!("Processing file: {}", input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Looking for '{}'...", report_config.needle));

    let output = match report {
        Report::Geography => {
            extract(&GeographyExtractor::from_config(report_config), &input, args.format)
        }
        Report::Renewables => {
            extract(&RenewablesExtractor::from_config(report_config), &input, args.format)
        }
    };
    pb.finish_and_clear();
    let output = output?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn extract<E>(extractor: &E, input: &Path, format: OutputFormat) -> anyhow::Result<String>
where
    E: ReportExtractor,
    E::Record: Serialize + FieldRecord,
{
    let result = extractor.extract_from_path(input)?;
    format_result(&result, format)
}

fn format_result<R>(result: &ExtractionResult<R>, format: OutputFormat) -> anyhow::Result<String>
where
    R: Serialize + FieldRecord,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv<R: FieldRecord>(result: &ExtractionResult<R>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["label", "value"])?;
    for record in &result.data {
        let value = record.value().map(|v| v.to_string()).unwrap_or_default();
        wtr.write_record([record.label(), value.as_str()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text<R: FieldRecord>(result: &ExtractionResult<R>) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", result.title));
    match result.total_investments_eur_bn {
        Some(total) => output.push_str(&format!("Total: {} Bn EUR\n", total)),
        None => output.push_str("Total: unknown\n"),
    }
    output.push('\n');

    for record in &result.data {
        match record.value() {
            Some(value) => output.push_str(&format!("  {:<26} {}\n", record.label(), value)),
            None => output.push_str(&format!("  {:<26} -\n", record.label())),
        }
    }

    output.push('\n');
    output.push_str(&result.summary);
    output.push('\n');

    output
}
