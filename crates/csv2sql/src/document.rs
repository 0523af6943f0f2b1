use core::convert::Infallible;
use core::str::FromStr;

use crate::decode::parser::parse_with_options;
use crate::number::{DECIMAL_SENTINEL, INTEGER_SENTINEL};
use crate::options::ParseOptions;
use crate::record::Record;

/// Parsed records plus a single forward cursor.
///
/// The cursor starts before the first record. [`advance`](Self::advance)
/// moves it one step and reports whether it landed on a record; once it
/// fails the cursor stays on the last record. The `current_*` accessors
/// read through to that record and degrade like [`Record`]'s own accessors
/// when there is none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    records: Vec<Record>,
    cursor: Option<usize>,
}

impl Document {
    pub fn new(input: &str) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &str, options: &ParseOptions) -> Self {
        if input.is_empty() {
            return Self::default();
        }
        Self::from(parse_with_options(input, options))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Zero-based index of the current record, `None` before the first advance.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn advance(&mut self) -> bool {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next < self.records.len() {
            self.cursor = Some(next);
            true
        } else {
            false
        }
    }

    /// Puts the cursor back before the first record.
    pub fn rewind(&mut self) {
        self.cursor = None;
    }

    pub fn current(&self) -> Option<&Record> {
        self.cursor.and_then(|i| self.records.get(i))
    }

    pub fn current_as_string(&self, index: usize) -> String {
        self.current()
            .map(|r| r.as_string(index))
            .unwrap_or_default()
    }

    pub fn current_as_percent(&self, index: usize) -> f64 {
        self.current()
            .map_or(DECIMAL_SENTINEL, |r| r.as_percent(index))
    }

    pub fn current_as_dollar(&self, index: usize) -> f64 {
        self.current()
            .map_or(DECIMAL_SENTINEL, |r| r.as_dollar(index))
    }

    pub fn current_as_integer(&self, index: usize) -> i32 {
        self.current()
            .map_or(INTEGER_SENTINEL, |r| r.as_integer(index))
    }

    /// `None` when the cursor is not on a record.
    pub fn current_as_strings(&self) -> Option<Vec<String>> {
        self.current().map(Record::as_strings)
    }

    pub fn current_is_non_blank(&self) -> bool {
        self.current().is_some_and(Record::is_non_blank)
    }
}

impl From<Vec<Record>> for Document {
    fn from(records: Vec<Record>) -> Self {
        Self {
            records,
            cursor: None,
        }
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
