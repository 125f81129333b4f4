//! Delimited (CSV) output.
//!
//! Records are serialized with the `csv` crate in the usual spreadsheet
//! dialect (comma, minimal quoting, CRLF) and then transcoded to the
//! requested encoding.

use crate::encoding::TextEncoding;
use crate::error::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Dialect settings for delimited output.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedOptions {
    pub delimiter: u8,
    pub terminator: Terminator,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            terminator: Terminator::CRLF,
        }
    }
}

/// Write an optional header followed by `rows`.
///
/// Rows may differ in length. Returns the number of data rows written.
pub fn write_delimited<W, R, S>(
    mut out: W,
    rows: &[R],
    header: Option<&[String]>,
    encoding: TextEncoding,
    options: &DelimitedOptions,
) -> Result<usize>
where
    W: Write,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(options.terminator)
        .quote_style(QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(Vec::new());

    if let Some(names) = header {
        writer.write_record(names)?;
    }
    for row in rows {
        writer.write_record(row.as_ref().iter().map(AsRef::<str>::as_ref))?;
    }

    let buffer = writer.into_inner().map_err(|e| e.into_error())?;
    let text = std::str::from_utf8(&buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(&encoding.encode(text)?)?;
    out.flush()?;

    Ok(rows.len())
}

pub fn write_delimited_file<R, S>(
    path: impl AsRef<Path>,
    rows: &[R],
    header: Option<&[String]>,
    encoding: TextEncoding,
    options: &DelimitedOptions,
) -> Result<usize>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let file = File::create(path)?;
    write_delimited(file, rows, header, encoding, options)
}
