//! Fixed-width round trip: spec → fixed-width file → rows → CSV.

use crate::config::ConvertConfig;
use crate::delimited::write_delimited_file;
use crate::error::Result;
use crate::fixed_width::{Truncation, read_fixed_width_file, write_fixed_width_file};
use crate::spec::ConversionSpec;

/// Counts from one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub rows_written: usize,
    pub rows_read: usize,
    pub csv_rows: usize,
    pub header_written: bool,
    pub truncations: Vec<Truncation>,
}

/// Run the whole conversion described by `config`.
///
/// Fails fast on the first error; files already written are left in place.
pub fn run(config: &ConvertConfig) -> Result<ConvertSummary> {
    let spec = ConversionSpec::from_path(&config.spec_path)?;
    run_with_spec(config, &spec)
}

/// Same as [`run`] with an already loaded spec.
pub fn run_with_spec(config: &ConvertConfig, spec: &ConversionSpec) -> Result<ConvertSummary> {
    let widths = spec.columns.widths();

    let report = write_fixed_width_file(
        &config.fixed_width_path,
        &config.rows,
        widths,
        spec.fixed_width_encoding,
    )?;

    let parsed = read_fixed_width_file(&config.fixed_width_path, widths, spec.fixed_width_encoding)?;

    let header = spec.include_header.then(|| spec.columns.names());
    let csv_rows = write_delimited_file(
        &config.csv_path,
        &parsed,
        header,
        spec.delimited_encoding,
        &config.delimited,
    )?;

    Ok(ConvertSummary {
        rows_written: report.rows,
        rows_read: parsed.len(),
        csv_rows,
        header_written: header.is_some(),
        truncations: report.truncations,
    })
}
