//! # anonymize
//!
//! Synthetic personal-data generation and one-way masking of CSV columns.
//!
//! Masking is a single pure transform ([`FieldMask::apply`]) with two
//! drivers over it:
//! - **Sequential**: one record read, masked and written at a time
//! - **Partitioned**: chunks of records masked in parallel with rayon,
//!   written back in input order
//!
//! Both drivers produce identical output for the same input.
//!
//! ## Example
//!
//! ```
//! use anonymize::{DEFAULT_COLUMNS, anonymize, anonymize_csv};
//!
//! let input = "first_name,last_name,address,date_of_birth\nAda,Lovelace,London,1815-12-10\n";
//! let mut output = Vec::new();
//! anonymize_csv(input.as_bytes(), &mut output, &DEFAULT_COLUMNS).unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains(&anonymize("Lovelace")));
//! assert!(text.ends_with(",1815-12-10\r\n"));
//! ```

mod dialect;

pub mod config;
pub mod error;
pub mod generate;
pub mod hash;
pub mod mask;
pub mod partitioned;
pub mod sequential;

pub use config::{AnonymizeConfig, Strategy};
pub use error::{AnonymizeError, Result};
pub use generate::{HEADER, Person, RecordGenerator, generate_csv, generate_csv_file};
pub use hash::{DIGEST_HEX_LEN, anonymize};
pub use mask::{DEFAULT_COLUMNS, FieldMask};
pub use partitioned::{DEFAULT_CHUNK_ROWS, anonymize_csv_partitioned, anonymize_csv_partitioned_file};
pub use sequential::{anonymize_csv, anonymize_csv_file};
