//! Reading and writing fixed-width files.
//!
//! One record per line, `\n` terminated. Each line is encoded and decoded
//! with the file's [`TextEncoding`]; the layout itself is handled by
//! [`crate::codec`].

use crate::codec::{decode_line, encode_row_checked};
use crate::encoding::TextEncoding;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// A field that was cut short while writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub row: usize,
    pub column: usize,
}

/// Summary of a fixed-width write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub rows: usize,
    pub truncations: Vec<Truncation>,
}

/// Write `rows` as fixed-width lines to `out`.
pub fn write_fixed_width<W, R, S>(
    out: W,
    rows: &[R],
    widths: &[usize],
    encoding: TextEncoding,
) -> Result<WriteReport>
where
    W: Write,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut out = BufWriter::new(out);
    let mut report = WriteReport::default();

    for (row, fields) in rows.iter().enumerate() {
        let mut encoded = encode_row_checked(fields.as_ref(), widths);
        report
            .truncations
            .extend(encoded.truncated.iter().map(|&column| Truncation { row, column }));
        encoded.line.push('\n');
        out.write_all(&encoding.encode(&encoded.line)?)?;
        report.rows += 1;
    }

    out.flush()?;
    Ok(report)
}

pub fn write_fixed_width_file<R, S>(
    path: impl AsRef<Path>,
    rows: &[R],
    widths: &[usize],
    encoding: TextEncoding,
) -> Result<WriteReport>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let file = File::create(path)?;
    write_fixed_width(file, rows, widths, encoding)
}

/// Read every line of `input` and split it into fields.
///
/// The whole input is read and decoded before it is split, so that
/// multi-byte encodings (UTF-16, Shift_JIS, ...) are never cut mid-character
/// and a decoding error is reported before any row is returned.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Blank lines become rows of
/// empty fields; a final terminator does not add an extra row.
pub fn read_fixed_width<R: Read>(
    mut input: R,
    widths: &[usize],
    encoding: TextEncoding,
) -> Result<Vec<Vec<String>>> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = encoding.decode(&bytes)?;
    Ok(physical_lines(&text)
        .map(|line| decode_line(line, widths))
        .collect())
}

/// Split on `\n`, `\r\n` and lone `\r`, without the terminators.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

pub fn read_fixed_width_file(
    path: impl AsRef<Path>,
    widths: &[usize],
    encoding: TextEncoding,
) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    read_fixed_width(file, widths, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    fn cp1252() -> TextEncoding {
        TextEncoding::for_label("windows-1252").unwrap()
    }

    #[test]
    fn test_write_lines() {
        let rows = [["1", "Bob"], ["22", "Alice"]];
        let mut out = Vec::new();
        let report = write_fixed_width(&mut out, &rows, &[3, 6], TextEncoding::utf8()).unwrap();
        assert_eq!(out, b"1  Bob   \n22 Alice \n");
        assert_eq!(report.rows, 2);
        assert!(report.truncations.is_empty());
    }

    #[test]
    fn test_write_reports_truncations() {
        let rows = vec![
            vec!["00001".to_string(), "Order Processed".to_string()],
            vec!["000002".to_string(), "Ok".to_string()],
        ];
        let mut out = Vec::new();
        let report = write_fixed_width(&mut out, &rows, &[5, 5], TextEncoding::utf8()).unwrap();
        assert_eq!(
            report.truncations,
            vec![
                Truncation { row: 0, column: 1 },
                Truncation { row: 1, column: 0 },
            ]
        );
        assert_eq!(out, b"00001Order\n00000Ok   \n");
    }

    #[test]
    fn test_write_uses_encoding() {
        let rows = [["café"]];
        let mut out = Vec::new();
        write_fixed_width(&mut out, &rows, &[5], cp1252()).unwrap();
        assert_eq!(out, b"caf\xe9 \n");
    }

    #[test]
    fn test_write_unencodable_is_error() {
        let rows = [["東京"]];
        let err = write_fixed_width(Vec::new(), &rows, &[5], cp1252()).unwrap_err();
        assert!(matches!(err, ConvertError::Unencodable { .. }));
    }

    #[test]
    fn test_read_lines() {
        let input = "1  Bob   \n22 Alice \n".as_bytes();
        let rows = read_fixed_width(input, &[3, 6], TextEncoding::utf8()).unwrap();
        assert_eq!(rows, vec![vec!["1", "Bob"], vec!["22", "Alice"]]);
    }

    #[test]
    fn test_read_crlf_and_short_lines() {
        let input = "1  Bob   \r\n7\r\n\r\n".as_bytes();
        let rows = read_fixed_width(input, &[3, 6], TextEncoding::utf8()).unwrap();
        assert_eq!(
            rows,
            vec![vec!["1", "Bob"], vec!["7", ""], vec!["", ""]]
        );
    }

    #[test]
    fn test_read_lone_carriage_returns() {
        let input = "1  Bob   \r22 Alice \r\n3\n\r".as_bytes();
        let rows = read_fixed_width(input, &[3, 6], TextEncoding::utf8()).unwrap();
        assert_eq!(
            rows,
            vec![vec!["1", "Bob"], vec!["22", "Alice"], vec!["3", ""], vec!["", ""]]
        );
    }

    #[test]
    fn test_physical_lines() {
        let lines: Vec<_> = physical_lines("a\rb\r\nc\n\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);
        assert_eq!(physical_lines("x\r\n").collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(physical_lines("").count(), 0);
    }

    #[test]
    fn test_write_ascii_rejects_accents() {
        let ascii = TextEncoding::for_label("ascii").unwrap();
        let err = write_fixed_width(Vec::new(), &[["café"]], &[5], ascii).unwrap_err();
        assert!(matches!(err, ConvertError::Unencodable { encoding: "US-ASCII" }));
    }

    #[test]
    fn test_read_ascii_rejects_high_bytes() {
        let ascii = TextEncoding::for_label("ascii").unwrap();
        let err = read_fixed_width(&b"caf\xe9 \n"[..], &[5], ascii).unwrap_err();
        assert!(matches!(err, ConvertError::Undecodable { encoding: "US-ASCII" }));
    }

    #[test]
    fn test_read_empty_input() {
        let rows = read_fixed_width(&b""[..], &[3], TextEncoding::utf8()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_undecodable_is_error() {
        let err = read_fixed_width(&b"ab\xff\n"[..], &[3], TextEncoding::utf8()).unwrap_err();
        assert!(matches!(err, ConvertError::Undecodable { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_fixed_width_file("/nonexistent/fixed.txt", &[3], TextEncoding::utf8())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
