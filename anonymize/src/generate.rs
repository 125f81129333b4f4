//! Synthetic personal records.
//!
//! Names and addresses come from the `fake` crate's English locale, dates
//! of birth are drawn uniformly between 1930 and 2010. Seed the generator
//! for reproducible files.

use crate::dialect;
use crate::error::Result;
use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::name::en::{FirstName, LastName};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header of generated files.
pub const HEADER: [&str; 4] = ["first_name", "last_name", "address", "date_of_birth"];

/// Bounds of generated dates of birth.
pub const EARLIEST_BIRTH: NaiveDate = match NaiveDate::from_ymd_opt(1930, 1, 1) {
    Some(date) => date,
    None => panic!("invalid earliest birth date"),
};

pub const LATEST_BIRTH: NaiveDate = match NaiveDate::from_ymd_opt(2010, 12, 31) {
    Some(date) => date,
    None => panic!("invalid latest birth date"),
};

/// One generated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// Two lines: street, then city/state/zip.
    pub address: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
}

pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    /// Seeded generators are reproducible; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn next_person(&mut self) -> Person {
        let rng = &mut self.rng;
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);

        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);
        let address = format!("{number} {street}\n{city}, {state} {zip}");

        let span = (LATEST_BIRTH - EARLIEST_BIRTH).num_days().unsigned_abs();
        let date_of_birth = (EARLIEST_BIRTH + Days::new(rng.random_range(0..=span))).to_string();

        Person {
            first_name,
            last_name,
            address,
            date_of_birth,
        }
    }
}

/// Write a header and `rows` generated records as CSV.
pub fn generate_csv<W: Write>(output: W, rows: usize, generator: &mut RecordGenerator) -> Result<()> {
    let mut writer = dialect::writer(output);
    writer.write_record(HEADER)?;
    for _ in 0..rows {
        let person = generator.next_person();
        writer.write_record([
            &person.first_name,
            &person.last_name,
            &person.address,
            &person.date_of_birth,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn generate_csv_file(
    path: impl AsRef<Path>,
    rows: usize,
    generator: &mut RecordGenerator,
) -> Result<()> {
    let file = File::create(path)?;
    generate_csv(file, rows, generator)
}
