//! Chunked parallel anonymization.
//!
//! The input is read in chunks of `chunk_rows` records. Each chunk is
//! masked on the rayon thread pool, collected back in input order and
//! written before the next chunk is read. The output is byte-for-byte the
//! same as [`crate::sequential::anonymize_csv`].

use crate::dialect;
use crate::error::Result;
use crate::mask::FieldMask;
use csv::StringRecord;
use rayon::prelude::*;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Records per chunk when no size is given.
pub const DEFAULT_CHUNK_ROWS: usize = 100_000;

/// Copy a CSV from `input` to `output`, masking `columns` one chunk at a
/// time in parallel. A `chunk_rows` of zero is treated as one.
///
/// Returns the number of data records written.
pub fn anonymize_csv_partitioned<R, W, S>(
    input: R,
    output: W,
    columns: &[S],
    chunk_rows: usize,
) -> Result<usize>
where
    R: Read,
    W: Write,
    S: AsRef<str>,
{
    let chunk_rows = chunk_rows.max(1);

    let mut reader = dialect::reader(input);
    let headers = reader.headers()?.clone();
    let mask = FieldMask::resolve(&headers, columns)?;

    let mut writer = dialect::writer(output);
    writer.write_record(&headers)?;

    let mut records = reader.into_records();
    let mut chunk: Vec<StringRecord> = Vec::with_capacity(chunk_rows);
    let mut count = 0;
    loop {
        chunk.clear();
        for record in records.by_ref().take(chunk_rows) {
            chunk.push(record?);
        }
        if chunk.is_empty() {
            break;
        }

        let masked: Vec<StringRecord> = chunk.par_iter().map(|r| mask.apply(r)).collect();
        for record in &masked {
            writer.write_record(record)?;
        }
        count += masked.len();

        if chunk.len() < chunk_rows {
            break;
        }
    }

    writer.flush()?;
    Ok(count)
}

pub fn anonymize_csv_partitioned_file<S: AsRef<str>>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    columns: &[S],
    chunk_rows: usize,
) -> Result<usize> {
    let input = File::open(input)?;
    let output = File::create(output)?;
    anonymize_csv_partitioned(input, output, columns, chunk_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnonymizeError;
    use crate::hash::anonymize;
    use crate::mask::DEFAULT_COLUMNS;

    fn input(rows: usize) -> String {
        let mut text = String::from("first_name,last_name,address,date_of_birth\n");
        for i in 0..rows {
            text.push_str(&format!("First{i},Last{i},\"{i} Main St\nTown\",2000-01-01\n"));
        }
        text
    }

    #[test]
    fn test_preserves_order_across_chunks() {
        let mut out = Vec::new();
        let count =
            anonymize_csv_partitioned(input(10).as_bytes(), &mut out, &["first_name"], 3).unwrap();
        assert_eq!(count, 10);

        let text = String::from_utf8(out).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let firsts: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        let expected: Vec<String> = (0..10).map(|i| anonymize(&format!("First{i}"))).collect();
        assert_eq!(firsts, expected);
    }

    #[test]
    fn test_chunk_size_edges() {
        for chunk_rows in [0, 1, 4, 5, 6, 1000] {
            let mut out = Vec::new();
            let count =
                anonymize_csv_partitioned(input(5).as_bytes(), &mut out, &DEFAULT_COLUMNS, chunk_rows)
                    .unwrap();
            assert_eq!(count, 5, "chunk_rows = {chunk_rows}");
        }
    }

    #[test]
    fn test_empty_input_keeps_header() {
        let mut out = Vec::new();
        let count =
            anonymize_csv_partitioned(input(0).as_bytes(), &mut out, &DEFAULT_COLUMNS, 2).unwrap();
        assert_eq!(count, 0);
        assert_eq!(out, b"first_name,last_name,address,date_of_birth\r\n");
    }

    #[test]
    fn test_missing_column() {
        let err = anonymize_csv_partitioned("a,b\n1,2\n".as_bytes(), Vec::new(), &["address"], 2)
            .unwrap_err();
        assert!(matches!(err, AnonymizeError::MissingColumn(_)));
    }
}
