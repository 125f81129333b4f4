//! Record-at-a-time anonymization.
//!
//! Reads one record, masks it and writes it before reading the next, so
//! memory use does not grow with the input.

use crate::dialect;
use crate::error::Result;
use crate::mask::FieldMask;
use csv::StringRecord;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Copy a CSV from `input` to `output`, masking `columns`.
///
/// Returns the number of data records written.
pub fn anonymize_csv<R, W, S>(input: R, output: W, columns: &[S]) -> Result<usize>
where
    R: Read,
    W: Write,
    S: AsRef<str>,
{
    let mut reader = dialect::reader(input);
    let headers = reader.headers()?.clone();
    let mask = FieldMask::resolve(&headers, columns)?;

    let mut writer = dialect::writer(output);
    writer.write_record(&headers)?;

    let mut record = StringRecord::new();
    let mut count = 0;
    while reader.read_record(&mut record)? {
        writer.write_record(&mask.apply(&record))?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

pub fn anonymize_csv_file<S: AsRef<str>>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    columns: &[S],
) -> Result<usize> {
    let input = File::open(input)?;
    let output = File::create(output)?;
    anonymize_csv(input, output, columns)
}
