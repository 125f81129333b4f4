//! # fixedwidth-rs
//!
//! Fixed-width record encoding and decoding, driven by a JSON column spec,
//! with conversion of the decoded records to CSV.
//!
//! ## Overview
//!
//! A fixed-width file stores one record per line with no delimiter between
//! fields; each field occupies a fixed number of characters:
//! - **Encoding** pads short values with spaces and truncates long ones
//! - **Decoding** slices each line by width and trims the padding
//! - **Spec files** name the columns, their widths and the text encodings
//!
//! ## Example
//!
//! ```
//! use fixedwidth_rs::{decode_line, encode_row};
//!
//! let widths = [5, 10];
//! let line = encode_row(&["1", "Bob"], &widths);
//! assert_eq!(line, "1    Bob       ");
//! assert_eq!(decode_line(&line, &widths), vec!["1", "Bob"]);
//! ```

pub mod codec;
pub mod config;
pub mod convert;
pub mod delimited;
pub mod encoding;
pub mod error;
pub mod fixed_width;
pub mod spec;

pub use codec::{EncodedRow, decode_line, encode_row, encode_row_checked, fit_field, line_width};
pub use config::{ConvertConfig, SAMPLE_ROWS};
pub use convert::{ConvertSummary, run, run_with_spec};
pub use delimited::{DelimitedOptions, write_delimited, write_delimited_file};
pub use encoding::TextEncoding;
pub use error::{ConvertError, Result};
pub use fixed_width::{
    Truncation, WriteReport, read_fixed_width, read_fixed_width_file, write_fixed_width,
    write_fixed_width_file,
};
pub use spec::{ColumnSpec, ConversionSpec};
