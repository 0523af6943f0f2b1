use crate::error::ConversionError;
use crate::field::Field;
use crate::number::{self, DECIMAL_SENTINEL, INTEGER_SENTINEL};

/// One logical row: a fixed-length sequence of fields.
///
/// Every accessor is total. An index past the end reads as an empty string,
/// `0.0` or [`INTEGER_SENTINEL`], and malformed numbers degrade the same
/// way. Use the `parse_*` accessors to tell those cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn is_non_blank(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn as_string(&self, index: usize) -> String {
        self.field(index).map(Field::value).unwrap_or_default()
    }

    pub fn as_strings(&self) -> Vec<String> {
        self.fields.iter().map(Field::value).collect()
    }

    pub fn raw_values(&self) -> Vec<&str> {
        self.fields.iter().map(Field::raw_value).collect()
    }

    pub fn as_percent(&self, index: usize) -> f64 {
        self.parse_percent(index).unwrap_or(DECIMAL_SENTINEL)
    }

    pub fn as_dollar(&self, index: usize) -> f64 {
        self.parse_dollar(index).unwrap_or(DECIMAL_SENTINEL)
    }

    pub fn as_integer(&self, index: usize) -> i32 {
        self.parse_integer(index).unwrap_or(INTEGER_SENTINEL)
    }

    pub fn parse_percent(&self, index: usize) -> Result<f64, ConversionError> {
        number::percent(self.raw_at(index)?)
    }

    pub fn parse_dollar(&self, index: usize) -> Result<f64, ConversionError> {
        number::dollar(self.raw_at(index)?)
    }

    pub fn parse_integer(&self, index: usize) -> Result<i32, ConversionError> {
        number::integer(self.raw_at(index)?)
    }

    fn raw_at(&self, index: usize) -> Result<&str, ConversionError> {
        self.field(index)
            .map(Field::raw_value)
            .ok_or(ConversionError::OutOfRange {
                index,
                len: self.fields.len(),
            })
    }
}

impl From<Vec<Field>> for Record {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = core::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
