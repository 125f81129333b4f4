//! The per-record masking transform.

use crate::error::{AnonymizeError, Result};
use crate::hash::anonymize;
use csv::StringRecord;
use std::borrow::Cow;

/// Columns masked by default.
pub const DEFAULT_COLUMNS: [&str; 3] = ["first_name", "last_name", "address"];

/// Positions of the columns to mask within a record.
///
/// Built once from the input header; [`FieldMask::apply`] is pure and can
/// be called from any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMask {
    positions: Vec<usize>,
}

impl FieldMask {
    /// Resolve column names against a header record.
    pub fn resolve<S: AsRef<str>>(headers: &StringRecord, columns: &[S]) -> Result<Self> {
        let positions = columns
            .iter()
            .map(|column| {
                let column = column.as_ref();
                headers
                    .iter()
                    .position(|name| name == column)
                    .ok_or_else(|| AnonymizeError::MissingColumn(column.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Copy `record`, replacing every masked field with its digest.
    ///
    /// Short records keep their length; missing fields are not invented.
    pub fn apply(&self, record: &StringRecord) -> StringRecord {
        record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if self.positions.contains(&i) {
                    Cow::Owned(anonymize(field))
                } else {
                    Cow::Borrowed(field)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::DIGEST_HEX_LEN;

    fn header() -> StringRecord {
        StringRecord::from(vec!["first_name", "last_name", "address", "date_of_birth"])
    }

    #[test]
    fn test_resolve_default_columns() {
        let mask = FieldMask::resolve(&header(), &DEFAULT_COLUMNS).unwrap();
        assert_eq!(mask.positions(), [0, 1, 2]);
    }

    #[test]
    fn test_resolve_missing_column() {
        let err = FieldMask::resolve(&header(), &["first_name", "email"]).unwrap_err();
        assert!(matches!(err, AnonymizeError::MissingColumn(ref c) if c == "email"));
    }

    #[test]
    fn test_apply_masks_selected_fields() {
        let mask = FieldMask::resolve(&header(), &["last_name"]).unwrap();
        let record = StringRecord::from(vec!["Ada", "Lovelace", "12 St James Sq", "1815-12-10"]);

        let masked = mask.apply(&record);

        assert_eq!(masked.len(), 4);
        assert_eq!(&masked[0], "Ada");
        assert_eq!(&masked[1], anonymize("Lovelace"));
        assert_eq!(masked[1].len(), DIGEST_HEX_LEN);
        assert_eq!(&masked[2], "12 St James Sq");
        assert_eq!(&masked[3], "1815-12-10");
    }

    #[test]
    fn test_apply_short_record() {
        let mask = FieldMask::resolve(&header(), &DEFAULT_COLUMNS).unwrap();
        let masked = mask.apply(&StringRecord::from(vec!["Ada"]));
        assert_eq!(masked.len(), 1);
        assert_eq!(&masked[0], anonymize("Ada"));
    }
}
