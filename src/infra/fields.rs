//! Header-addressed field access for CSV records.
//!
//! Each accessor either yields a parsed value or a [`FieldError`]; callers
//! chain them with `?` so a record is admitted only when every field parses.

use csv::StringRecord;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("column `{0}` is missing")]
    Missing(String),
    #[error("column `{column}`: `{value}` is not a finite number")]
    NotNumber { column: String, value: String },
    #[error("column `{0}` is empty")]
    Empty(String),
    #[error("column `{column}`: {value} must be positive")]
    NotPositive { column: String, value: f64 },
}

/// A named column and where it sits in the header row, if anywhere.
#[derive(Clone, Debug)]
pub struct Column {
    name: String,
    index: Option<usize>,
}

impl Column {
    /// Find `name` in `headers`. A repeated header resolves to its last occurrence.
    pub fn locate(headers: &StringRecord, name: &str) -> Self {
        Self {
            name: name.to_string(),
            index: headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == name)
                .map(|(index, _)| index)
                .last(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_present(&self) -> bool {
        self.index.is_some()
    }

    pub fn raw<'r>(&self, record: &'r StringRecord) -> Result<&'r str, FieldError> {
        self.index
            .and_then(|index| record.get(index))
            .ok_or_else(|| FieldError::Missing(self.name.clone()))
    }

    /// Trimmed text, rejected when blank.
    pub fn text(&self, record: &StringRecord) -> Result<String, FieldError> {
        let value = self.raw(record)?.trim();
        if value.is_empty() {
            return Err(FieldError::Empty(self.name.clone()));
        }
        Ok(value.to_string())
    }

    /// Finite real number.
    pub fn real(&self, record: &StringRecord) -> Result<f64, FieldError> {
        let raw = self.raw(record)?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FieldError::NotNumber {
                column: self.name.clone(),
                value: raw.to_string(),
            })
    }

    /// Real number truncated toward zero, so `"12.9"` reads as `12`.
    pub fn whole(&self, record: &StringRecord) -> Result<i64, FieldError> {
        self.real(record).map(|value| value.trunc() as i64)
    }
}

pub fn ensure_positive(column: &Column, value: f64) -> Result<(), FieldError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(FieldError::NotPositive {
            column: column.name().to_string(),
            value,
        })
    }
}
