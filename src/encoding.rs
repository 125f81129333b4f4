//! Named text encodings for the fixed-width and delimited files.
//!
//! `ascii` and `latin-1` (with their usual aliases) are handled here
//! directly: WHATWG folds both into windows-1252, which would accept
//! characters and bytes the declared encoding cannot hold. Every other label
//! is resolved through `encoding_rs` after a little normalization so that
//! names such as `utf_8` are accepted.
//!
//! Encoding and decoding are strict: a character that cannot be
//! represented, or bytes that do not decode, are errors rather than
//! replacement characters.

use crate::error::{ConvertError, Result};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

const ASCII_LABELS: &[&str] = &[
    "ascii",
    "us-ascii",
    "646",
    "ansi-x3.4-1968",
    "iso646-us",
    "cp367",
];

const LATIN1_LABELS: &[&str] = &[
    "latin-1",
    "latin1",
    "latin",
    "l1",
    "iso-8859-1",
    "iso8859-1",
    "8859",
    "cp819",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Codec {
    /// 7-bit US-ASCII.
    Ascii,
    /// ISO-8859-1: bytes map one-to-one onto U+0000..=U+00FF.
    Latin1,
    Whatwg(&'static Encoding),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(Codec);

impl TextEncoding {
    pub fn utf8() -> Self {
        TextEncoding(Codec::Whatwg(UTF_8))
    }

    /// Look up an encoding by label, e.g. `"utf-8"`, `"latin-1"`,
    /// `"windows-1252"`.
    pub fn for_label(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        if ASCII_LABELS.contains(&normalized.as_str()) {
            return Ok(TextEncoding(Codec::Ascii));
        }
        if LATIN1_LABELS.contains(&normalized.as_str()) {
            return Ok(TextEncoding(Codec::Latin1));
        }

        Encoding::for_label(label.trim().as_bytes())
            .or_else(|| Encoding::for_label(normalized.as_bytes()))
            .map(|encoding| TextEncoding(Codec::Whatwg(encoding)))
            .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            Codec::Ascii => "US-ASCII",
            Codec::Latin1 => "ISO-8859-1",
            Codec::Whatwg(encoding) => encoding.name(),
        }
    }

    fn unencodable(&self) -> ConvertError {
        ConvertError::Unencodable {
            encoding: self.name(),
        }
    }

    fn undecodable(&self) -> ConvertError {
        ConvertError::Undecodable {
            encoding: self.name(),
        }
    }

    /// Encode `text`, failing if any character is unmappable.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        let encoding = match self.0 {
            Codec::Ascii if text.is_ascii() => return Ok(Cow::Borrowed(text.as_bytes())),
            Codec::Ascii => return Err(self.unencodable()),
            Codec::Latin1 => {
                return text
                    .chars()
                    .map(|c| u8::try_from(c).map_err(|_| self.unencodable()))
                    .collect::<Result<Vec<u8>>>()
                    .map(Cow::Owned);
            }
            Codec::Whatwg(encoding) => encoding,
        };

        if encoding == UTF_16LE {
            return Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            ));
        }
        if encoding == UTF_16BE {
            return Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            ));
        }
        // Encodings without an encoder of their own (e.g. "replacement")
        // would silently fall back to UTF-8.
        if encoding.output_encoding() != encoding {
            return Err(self.unencodable());
        }

        let (bytes, _, had_unmappable) = encoding.encode(text);
        if had_unmappable {
            return Err(self.unencodable());
        }
        Ok(bytes)
    }

    /// Decode `bytes`, failing on malformed input. A byte order mark is
    /// kept as text.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        match self.0 {
            Codec::Ascii if bytes.is_ascii() => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|_| self.undecodable()),
            Codec::Ascii => Err(self.undecodable()),
            Codec::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
            Codec::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or_else(|| self.undecodable()),
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl FromStr for TextEncoding {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::for_label(s)
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
