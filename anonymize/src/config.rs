//! Run parameters for generation and anonymization.

use crate::error::Result;
use crate::mask::DEFAULT_COLUMNS;
use crate::partitioned::{DEFAULT_CHUNK_ROWS, anonymize_csv_partitioned_file};
use crate::sequential::anonymize_csv_file;
use std::path::{Path, PathBuf};

/// How to drive the masking transform over a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One record at a time on the calling thread.
    Sequential,
    /// Fixed-size chunks masked in parallel.
    Partitioned { chunk_rows: usize },
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Partitioned { .. } => "partitioned",
        }
    }

    /// Anonymize `input` into `output` with this strategy.
    pub fn run<S: AsRef<str>>(
        self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        columns: &[S],
    ) -> Result<usize> {
        match self {
            Strategy::Sequential => anonymize_csv_file(input, output, columns),
            Strategy::Partitioned { chunk_rows } => {
                anonymize_csv_partitioned_file(input, output, columns, chunk_rows)
            }
        }
    }
}

/// Paths and sizes for one generate-then-anonymize run.
#[derive(Debug, Clone)]
pub struct AnonymizeConfig {
    pub sample_path: PathBuf,
    pub sample_rows: usize,
    pub output_path: PathBuf,
    pub large_output_path: PathBuf,
    pub columns: Vec<String>,
    pub chunk_rows: usize,
    /// `None` draws a fresh seed each run.
    pub seed: Option<u64>,
}

impl AnonymizeConfig {
    /// Default configuration with every path placed under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            sample_path: dir.join(defaults.sample_path),
            output_path: dir.join(defaults.output_path),
            large_output_path: dir.join(defaults.large_output_path),
            ..defaults
        }
    }
}

impl Default for AnonymizeConfig {
    fn default() -> Self {
        Self {
            sample_path: PathBuf::from("sample_data.csv"),
            sample_rows: 1_000_000,
            output_path: PathBuf::from("anonymized_data.csv"),
            large_output_path: PathBuf::from("anonymized_data_large.csv"),
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            chunk_rows: DEFAULT_CHUNK_ROWS,
            seed: None,
        }
    }
}
