//! Run parameters for the fixed-width round trip.

use crate::delimited::DelimitedOptions;
use std::path::PathBuf;

/// Sample records written by the default run.
///
/// Column layout: ID, Name, Code, State, Description, Status, ID Number,
/// Invoice No, Address/Desc, Additional Desc.
pub const SAMPLE_ROWS: [[&str; 10]; 3] = [
    [
        "00001",
        "John Doe    ",
        "A12",
        "CA",
        "Order Processed",
        "Active",
        "ID12345678",
        "INV123456789",
        "1234 Elm Street, Springfield",
        "Order Confirmed",
    ],
    [
        "00002",
        "Jane Smith  ",
        "B34",
        "NY",
        "Payment Received",
        "Closed",
        "ID87654321",
        "INV987654321",
        "4321 Oak Avenue, Metropolis ",
        "Payment Complete",
    ],
    [
        "00003",
        "Alice Brown ",
        "C56",
        "TX",
        "Shipped        ",
        "Shipped",
        "ID13579246",
        "INV246813579",
        "5678 Pine Road, Gotham City  ",
        "Shipment In Transit",
    ],
];

/// Paths and input rows for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub spec_path: PathBuf,
    pub fixed_width_path: PathBuf,
    pub csv_path: PathBuf,
    pub rows: Vec<Vec<String>>,
    pub delimited: DelimitedOptions,
}

impl ConvertConfig {
    /// Default configuration with every path placed under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            spec_path: dir.join(defaults.spec_path),
            fixed_width_path: dir.join(defaults.fixed_width_path),
            csv_path: dir.join(defaults.csv_path),
            ..defaults
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            spec_path: PathBuf::from("spec.json"),
            fixed_width_path: PathBuf::from("output.txt"),
            csv_path: PathBuf::from("output.csv"),
            rows: SAMPLE_ROWS
                .iter()
                .map(|row| row.iter().map(|field| field.to_string()).collect())
                .collect(),
            delimited: DelimitedOptions::default(),
        }
    }
}
