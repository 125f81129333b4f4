//! CLI tool to generate a sample CSV and anonymize it with both strategies.
//!
//! Writes `sample_data.csv` (1,000,000 generated records) to the current
//! directory, then `anonymized_data.csv` (sequential) and
//! `anonymized_data_large.csv` (partitioned).

use anonymize::{AnonymizeConfig, RecordGenerator, Strategy, generate_csv_file};
use clap::Parser;
use std::process;
use std::time::Instant;

/// Generate synthetic personal data and hash its identifying columns.
#[derive(Parser)]
#[command(name = "anonymize-run")]
struct Cli {
    /// Show paths, strategies, record counts and timings on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = AnonymizeConfig::default();

    if cli.verbose {
        eprintln!("Sample:      {}", config.sample_path.display());
        eprintln!("Columns:     {}", config.columns.join(", "));
    }

    let started = Instant::now();
    let mut generator = RecordGenerator::new(config.seed);
    if let Err(e) = generate_csv_file(&config.sample_path, config.sample_rows, &mut generator) {
        eprintln!(
            "Error writing sample file '{}': {e}",
            config.sample_path.display()
        );
        process::exit(1);
    }
    if cli.verbose {
        eprintln!(
            "Generated:   {} records in {:.2?}",
            config.sample_rows,
            started.elapsed()
        );
    }

    let runs = [
        (Strategy::Sequential, &config.output_path),
        (
            Strategy::Partitioned {
                chunk_rows: config.chunk_rows,
            },
            &config.large_output_path,
        ),
    ];

    for (strategy, output) in runs {
        let started = Instant::now();
        match strategy.run(&config.sample_path, output, &config.columns) {
            Ok(count) => {
                if cli.verbose {
                    eprintln!(
                        "Anonymized:  {count} records -> {} ({}, {:.2?})",
                        output.display(),
                        strategy.name(),
                        started.elapsed()
                    );
                }
            }
            Err(e) => {
                eprintln!("Anonymization error ({}): {e}", strategy.name());
                process::exit(1);
            }
        }
    }
}
