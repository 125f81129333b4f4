//! JSON column specification.
//!
//! ```json
//! {
//!     "ColumnNames": ["ID", "Name"],
//!     "Offsets": ["5", "10"],
//!     "FixedWidthEncoding": "windows-1252",
//!     "IncludeHeader": "True",
//!     "DelimitedEncoding": "utf-8"
//! }
//! ```
//!
//! `Offsets` are the per-column widths, usually written as strings. Every
//! key is required; unknown keys are ignored.

use crate::encoding::TextEncoding;
use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Ordered column names and their fixed widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    names: Vec<String>,
    widths: Vec<usize>,
}

impl ColumnSpec {
    /// Build a column spec; names and widths must pair up and every width
    /// must be positive.
    pub fn new(names: Vec<String>, widths: Vec<usize>) -> Result<Self> {
        if names.len() != widths.len() {
            return Err(ConvertError::ColumnCountMismatch {
                names: names.len(),
                offsets: widths.len(),
            });
        }
        if let Some(index) = widths.iter().position(|&w| w == 0) {
            return Err(ConvertError::InvalidOffset {
                index,
                value: "0".to_string(),
            });
        }
        Ok(Self { names, widths })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Character length of every encoded line.
    pub fn line_width(&self) -> usize {
        crate::codec::line_width(&self.widths)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.widths.iter().copied())
    }
}

/// A loaded spec file: layout, encodings and the header flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSpec {
    pub columns: ColumnSpec,
    pub fixed_width_encoding: TextEncoding,
    pub include_header: bool,
    pub delimited_encoding: TextEncoding,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSpec {
    column_names: Vec<String>,
    offsets: Vec<RawOffset>,
    fixed_width_encoding: String,
    include_header: RawFlag,
    delimited_encoding: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOffset {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Text(String),
}

impl RawOffset {
    fn to_width(&self, index: usize) -> Result<usize> {
        let parsed = match self {
            RawOffset::Number(n) => Some(*n),
            RawOffset::Text(s) => s.trim().parse::<i64>().ok(),
        };
        match parsed {
            Some(n) if n > 0 => usize::try_from(n).map_err(|_| self.invalid(index)),
            _ => Err(self.invalid(index)),
        }
    }

    fn invalid(&self, index: usize) -> ConvertError {
        let value = match self {
            RawOffset::Number(n) => n.to_string(),
            RawOffset::Text(s) => s.clone(),
        };
        ConvertError::InvalidOffset { index, value }
    }
}

impl RawFlag {
    /// Only a case-insensitive "true" enables the flag.
    fn is_set(&self) -> bool {
        match self {
            RawFlag::Bool(b) => *b,
            RawFlag::Text(s) => s.eq_ignore_ascii_case("true"),
        }
    }
}

impl ConversionSpec {
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(text)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawSpec) -> Result<Self> {
        let widths = raw
            .offsets
            .iter()
            .enumerate()
            .map(|(index, offset)| offset.to_width(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            columns: ColumnSpec::new(raw.column_names, widths)?,
            fixed_width_encoding: TextEncoding::for_label(&raw.fixed_width_encoding)?,
            include_header: raw.include_header.is_set(),
            delimited_encoding: TextEncoding::for_label(&raw.delimited_encoding)?,
        })
    }
}
