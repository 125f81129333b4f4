//! CSV reader and writer settings shared by every stage.
//!
//! Input may have ragged rows and quoted multi-line fields; output always
//! uses minimal quoting and CRLF terminators so that both anonymization
//! strategies emit identical bytes.

use csv::{QuoteStyle, Reader, ReaderBuilder, Terminator, Writer, WriterBuilder};
use std::io::{Read, Write};

pub(crate) fn reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

pub(crate) fn writer<W: Write>(output: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(output)
}
