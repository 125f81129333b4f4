//! CLI tool to run the fixed-width round trip.
//!
//! Reads `spec.json` from the current directory, writes the sample records
//! to `output.txt` as fixed-width lines, parses them back and writes
//! `output.csv`.

use clap::Parser;
use fixedwidth_rs::{ConversionSpec, ConvertConfig, run_with_spec};
use std::process;

/// Convert sample records to a fixed-width file and back out to CSV.
#[derive(Parser)]
#[command(name = "fixed-to-csv")]
struct Cli {
    /// Show paths, encodings, record counts and truncated fields on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = ConvertConfig::default();

    let spec = match ConversionSpec::from_path(&config.spec_path) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!(
                "Error reading spec file '{}': {e}",
                config.spec_path.display()
            );
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Spec:        {}", config.spec_path.display());
        eprintln!(
            "Fixed-width: {} ({}, {} chars/line)",
            config.fixed_width_path.display(),
            spec.fixed_width_encoding,
            spec.columns.line_width()
        );
        eprintln!(
            "CSV:         {} ({}, header: {})",
            config.csv_path.display(),
            spec.delimited_encoding,
            if spec.include_header { "yes" } else { "no" }
        );
    }

    match run_with_spec(&config, &spec) {
        Ok(summary) => {
            if cli.verbose {
                for t in &summary.truncations {
                    eprintln!(
                        "Warning: row {} column '{}' truncated to {} chars",
                        t.row + 1,
                        spec.columns.names()[t.column],
                        spec.columns.widths()[t.column]
                    );
                }
                eprintln!(
                    "Records:     {} written -> {} read -> {} CSV rows",
                    summary.rows_written, summary.rows_read, summary.csv_rows
                );
            }
        }
        Err(e) => {
            eprintln!("Conversion error: {e}");
            process::exit(1);
        }
    }
}
