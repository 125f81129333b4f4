//! Fixed-width record codec.
//!
//! A fixed-width line is a run of fields with no separator, each field
//! left-justified and space-padded to its width. Widths are counted in
//! characters, not bytes, so multi-byte text keeps its column layout.
//!
//! Both directions are total: encoding truncates oversized values and
//! decoding fills missing characters with empty fields.

use std::borrow::Cow;

/// A fixed-width line together with the fields that had to be cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRow {
    pub line: String,
    /// Positions of fields whose value was longer than its width.
    pub truncated: Vec<usize>,
}

impl EncodedRow {
    pub fn was_truncated(&self) -> bool {
        !self.truncated.is_empty()
    }
}

/// Fit `value` into exactly `width` characters.
///
/// Returns the fitted text and whether anything was cut off.
pub fn fit_field(value: &str, width: usize) -> (Cow<'_, str>, bool) {
    match value.char_indices().nth(width) {
        Some((cut, _)) => (Cow::Borrowed(&value[..cut]), true),
        None => {
            let len = value.chars().count();
            if len == width {
                (Cow::Borrowed(value), false)
            } else {
                let mut padded = String::with_capacity(value.len() + width - len);
                padded.push_str(value);
                padded.extend(std::iter::repeat_n(' ', width - len));
                (Cow::Owned(padded), false)
            }
        }
    }
}

/// Encode one row into a fixed-width line.
///
/// Fields and widths are paired by position; whichever sequence is longer
/// has its extra entries ignored.
///
/// ```
/// use fixedwidth_rs::encode_row;
///
/// assert_eq!(encode_row(&["1", "Bob"], &[5, 10]), "1    Bob       ");
/// assert_eq!(encode_row(&["Springfield"], &[6]), "Spring");
/// ```
pub fn encode_row<S: AsRef<str>>(fields: &[S], widths: &[usize]) -> String {
    encode_row_checked(fields, widths).line
}

/// Like [`encode_row`], but also reports which fields were truncated.
pub fn encode_row_checked<S: AsRef<str>>(fields: &[S], widths: &[usize]) -> EncodedRow {
    let capacity = widths.iter().take(fields.len()).sum();
    let mut line = String::with_capacity(capacity);
    let mut truncated = Vec::new();

    for (index, (field, &width)) in fields.iter().zip(widths).enumerate() {
        let (fitted, cut) = fit_field(field.as_ref(), width);
        if cut {
            truncated.push(index);
        }
        line.push_str(&fitted);
    }

    EncodedRow { line, truncated }
}

/// Split a fixed-width line back into trimmed fields.
///
/// Always yields one field per width. A line shorter than the layout
/// produces partial or empty trailing fields rather than an error.
///
/// ```
/// use fixedwidth_rs::decode_line;
///
/// assert_eq!(decode_line("1    Bob       ", &[5, 10]), vec!["1", "Bob"]);
/// assert_eq!(decode_line("42", &[5, 10]), vec!["42", ""]);
/// ```
pub fn decode_line(line: &str, widths: &[usize]) -> Vec<String> {
    let mut rest = line;
    widths
        .iter()
        .map(|&width| {
            let end = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(i, _)| i);
            let (field, tail) = rest.split_at(end);
            rest = tail;
            field.trim().to_string()
        })
        .collect()
}

/// Total character width of a layout.
pub fn line_width(widths: &[usize]) -> usize {
    widths.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_field_pads_short_value() {
        let (fitted, cut) = fit_field("AB", 5);
        assert_eq!(fitted, "AB   ");
        assert!(!cut);
    }

    #[test]
    fn test_fit_field_exact_width_is_borrowed() {
        let (fitted, cut) = fit_field("ABCDE", 5);
        assert!(matches!(fitted, Cow::Borrowed("ABCDE")));
        assert!(!cut);
    }

    #[test]
    fn test_fit_field_truncates_long_value() {
        let (fitted, cut) = fit_field("ABCDEFG", 3);
        assert_eq!(fitted, "ABC");
        assert!(cut);
    }

    #[test]
    fn test_fit_field_counts_characters_not_bytes() {
        let (fitted, cut) = fit_field("Zoë", 4);
        assert_eq!(fitted, "Zoë ");
        assert!(!cut);

        let (fitted, cut) = fit_field("Müller", 2);
        assert_eq!(fitted, "Mü");
        assert!(cut);
    }

    #[test]
    fn test_encode_row_example() {
        assert_eq!(encode_row(&["1", "Bob"], &[5, 10]), "1    Bob       ");
    }

    #[test]
    fn test_encode_row_line_length() {
        let widths = [5, 12, 3, 2, 13];
        let rows: [&[&str]; 3] = [
            &["00001", "John Doe", "A12", "CA", "Order Processed"],
            &["", "", "", "", ""],
            &["000000001", "A very long name indeed", "ABCD", "NYC", "x"],
        ];
        for row in rows {
            assert_eq!(encode_row(row, &widths).chars().count(), line_width(&widths));
        }
    }

    #[test]
    fn test_encode_row_ignores_extra_fields() {
        assert_eq!(encode_row(&["a", "b", "c"], &[2, 2]), "a b ");
    }

    #[test]
    fn test_encode_row_ignores_extra_widths() {
        assert_eq!(encode_row(&["a"], &[2, 4, 6]), "a ");
    }

    #[test]
    fn test_encode_row_checked_reports_truncation() {
        let encoded = encode_row_checked(&["00001", "Order Processed", "CA"], &[5, 5, 5]);
        assert_eq!(encoded.line, "00001OrderCA   ");
        assert_eq!(encoded.truncated, vec![1]);
        assert!(encoded.was_truncated());

        let clean = encode_row_checked(&["1", "Bob"], &[5, 10]);
        assert!(!clean.was_truncated());
    }

    #[test]
    fn test_decode_line_example() {
        assert_eq!(decode_line("1    Bob       ", &[5, 10]), vec!["1", "Bob"]);
    }

    #[test]
    fn test_decode_short_line_fills_empty_fields() {
        let fields = decode_line("12345Bo", &[5, 10, 4]);
        assert_eq!(fields, vec!["12345", "Bo", ""]);
    }

    #[test]
    fn test_decode_empty_line() {
        assert_eq!(decode_line("", &[3, 3]), vec!["", ""]);
    }

    #[test]
    fn test_decode_ignores_trailing_characters() {
        assert_eq!(decode_line("ab cd extra", &[2, 3]), vec!["ab", "cd"]);
    }

    #[test]
    fn test_decode_strips_leading_whitespace() {
        assert_eq!(decode_line("  7  x", &[5, 1]), vec!["7", "x"]);
    }

    #[test]
    fn test_round_trip_within_width() {
        let widths = [5, 12, 28];
        let row = ["00002", "Jane Smith", "4321 Oak Avenue, Metropolis"];
        let line = encode_row(&row, &widths);
        assert_eq!(decode_line(&line, &widths), row);
    }

    #[test]
    fn test_truncation_is_not_recoverable() {
        let widths = [4];
        let line = encode_row(&["Shipment In Transit"], &widths);
        assert_eq!(line, "Ship");
        assert_eq!(decode_line(&line, &widths), vec!["Ship"]);
    }

    #[test]
    fn test_round_trip_multibyte() {
        let widths = [6, 6];
        let line = encode_row(&["José", "東京"], &widths);
        assert_eq!(line.chars().count(), 12);
        assert_eq!(decode_line(&line, &widths), vec!["José", "東京"]);
    }
}
