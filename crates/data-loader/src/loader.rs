//! CSV Record Loader

use crate::error::LoadError;
use csv::{ReaderBuilder, StringRecord, Trim};
use data_validator::Validator;
use insurance_record::Record;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Columns every input file must provide (after header normalization)
pub const REQUIRED_COLUMNS: [&str; 7] = ["age", "sex", "bmi", "children", "smoker", "region", "charges"];

/// Loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Run range validation on every record
    pub validate: bool,
    /// Drop invalid records instead of failing the load
    pub skip_invalid: bool,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            validate: true,
            skip_invalid: false,
            delimiter: b',',
        }
    }
}

/// Positions of the required columns in the header
struct ColumnIndex([usize; 7]);

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let mut positions = [0usize; 7];
        for (slot, &column) in REQUIRED_COLUMNS.iter().enumerate() {
            positions[slot] = normalized
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn(column))?;
        }
        Ok(Self(positions))
    }

    fn field<'r>(&self, row: &'r StringRecord, slot: usize) -> &'r str {
        row.get(self.0[slot]).unwrap_or("")
    }
}

/// Load records from a CSV file
pub fn load_records(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let records = load_from_reader(file, config)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load records from any reader producing CSV text
pub fn load_from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<Record>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(csv_reader.headers()?)?;
    let validator = Validator::default();

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record = parse_row(&columns, &row, line)?;

        if config.validate {
            let result = validator.validate_record(&record);
            if !result.valid {
                if config.skip_invalid {
                    warn!("Skipping line {}: {} invalid field(s)", line, result.errors.len());
                    skipped += 1;
                    continue;
                }
                return Err(LoadError::Validation {
                    line,
                    errors: result.errors,
                });
            }
        }

        records.push(record);
    }

    if skipped > 0 {
        warn!("Skipped {} invalid records", skipped);
    }
    debug!("Parsed {} records", records.len());

    Ok(records)
}

fn parse_row(columns: &ColumnIndex, row: &StringRecord, line: u64) -> Result<Record, LoadError> {
    let field = |slot: usize| columns.field(row, slot);

    Ok(Record {
        age: parse_count(field(0), "age", line)?,
        sex: parse_category(field(1), line)?,
        bmi: parse_real(field(2), "bmi", line)?,
        children: parse_count(field(3), "children", line)?,
        smoker: parse_category(field(4), line)?,
        region: parse_category(field(5), line)?,
        charges: parse_real(field(6), "charges", line)?,
    })
}

fn invalid_number(value: &str, column: &'static str, line: u64) -> LoadError {
    LoadError::InvalidNumber {
        line,
        column,
        value: value.to_string(),
    }
}

fn parse_real(value: &str, column: &'static str, line: u64) -> Result<f64, LoadError> {
    value.parse::<f64>().map_err(|_| invalid_number(value, column, line))
}

/// Non-negative integer; integral floats such as `"3.0"` are accepted
fn parse_count(value: &str, column: &'static str, line: u64) -> Result<u32, LoadError> {
    if let Ok(n) = value.parse::<u32>() {
        return Ok(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 => Ok(f as u32),
        _ => Err(invalid_number(value, column, line)),
    }
}

fn parse_category<T>(value: &str, line: u64) -> Result<T, LoadError>
where
    T: FromStr<Err = insurance_record::ParseCategoryError>,
{
    value
        .parse::<T>()
        .map_err(|source| LoadError::InvalidCategory { line, source })
}
