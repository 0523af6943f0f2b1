//! Parsing and output-formatting configuration.
//!
//! [`ParseOptions`] selects the separator and the [`FieldFormat`] every
//! extracted field starts out with. [`ColumnFormats`] overrides that format
//! for individual column positions, so a caller can say "column 2 renders
//! blanks as blanks, column 5 is never quoted".

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }
}

/// How a field renders through [`Field::value`](crate::Field::value).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldFormat {
    /// Wrap the output in `quote_char` (default: true)
    pub quote_output: bool,
    /// Output quote character (default: `'`)
    pub quote_char: char,
    /// Double embedded quote characters when quoting (default: true).
    /// Disabling this is unsafe for untrusted content.
    pub escape_output: bool,
    /// Trim surrounding whitespace before rendering (default: true)
    pub trim_before_output: bool,
    /// Render an empty value as the bare token `null` (default: true)
    pub blank_is_null: bool,
}

impl Default for FieldFormat {
    fn default() -> Self {
        Self {
            quote_output: true,
            quote_char: '\'',
            escape_output: true,
            trim_before_output: true,
            blank_is_null: true,
        }
    }
}

impl FieldFormat {
    pub fn with_quote_output(mut self, on: bool) -> Self {
        self.quote_output = on;
        self
    }

    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    pub fn with_escape_output(mut self, on: bool) -> Self {
        self.escape_output = on;
        self
    }

    pub fn with_trim_before_output(mut self, on: bool) -> Self {
        self.trim_before_output = on;
        self
    }

    pub fn with_blank_is_null(mut self, on: bool) -> Self {
        self.blank_is_null = on;
        self
    }

    pub fn apply(&mut self, flag: FormatFlag) {
        match flag {
            FormatFlag::Quote(on) => self.quote_output = on,
            FormatFlag::Escape(on) => self.escape_output = on,
            FormatFlag::Trim(on) => self.trim_before_output = on,
            FormatFlag::BlankIsNull(on) => self.blank_is_null = on,
            FormatFlag::QuoteChar(c) => self.quote_char = c,
        }
    }
}

/// A single change to a [`FieldFormat`], as written in a column spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFlag {
    Quote(bool),
    Escape(bool),
    Trim(bool),
    BlankIsNull(bool),
    QuoteChar(char),
}

impl FromStr for FormatFlag {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if let Some(c) = s.strip_prefix("quotechar=") {
            let mut chars = c.chars();
            return match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(FormatFlag::QuoteChar(ch)),
                _ => Err(format!("quotechar expects exactly one character, got {c:?}")),
            };
        }
        match s {
            "quote" => Ok(FormatFlag::Quote(true)),
            "noquote" => Ok(FormatFlag::Quote(false)),
            "escape" => Ok(FormatFlag::Escape(true)),
            "noescape" => Ok(FormatFlag::Escape(false)),
            "trim" => Ok(FormatFlag::Trim(true)),
            "notrim" => Ok(FormatFlag::Trim(false)),
            "null" => Ok(FormatFlag::BlankIsNull(true)),
            "blank" => Ok(FormatFlag::BlankIsNull(false)),
            other => Err(format!("unknown flag {other:?}")),
        }
    }
}

/// `INDEX=flag[,flag...]`, e.g. `2=noquote,blank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub index: usize,
    pub flags: Vec<FormatFlag>,
}

impl FromStr for ColumnSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec_error = |message: String| Error::ColumnSpec {
            spec: s.to_string(),
            message,
        };
        let (index, flags) = s
            .split_once('=')
            .ok_or_else(|| spec_error("expected INDEX=flag[,flag...]".into()))?;
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|e| spec_error(format!("bad column index: {e}")))?;
        let flags = flags
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(|f| f.parse::<FormatFlag>().map_err(spec_error))
            .collect::<Result<Vec<_>>>()?;
        if flags.is_empty() {
            return Err(spec_error("no flags given".into()));
        }
        Ok(ColumnSpec { index, flags })
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.index)?;
        for (i, flag) in self.flags.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match flag {
                FormatFlag::Quote(on) => f.write_str(if *on { "quote" } else { "noquote" })?,
                FormatFlag::Escape(on) => f.write_str(if *on { "escape" } else { "noescape" })?,
                FormatFlag::Trim(on) => f.write_str(if *on { "trim" } else { "notrim" })?,
                FormatFlag::BlankIsNull(on) => f.write_str(if *on { "null" } else { "blank" })?,
                FormatFlag::QuoteChar(c) => write!(f, "quotechar={c}")?,
            }
        }
        Ok(())
    }
}

/// Per-column format overrides, keyed by zero-based position on the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColumnFormats {
    columns: BTreeMap<usize, FieldFormat>,
}

impl ColumnFormats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, format: FieldFormat) -> Option<FieldFormat> {
        self.columns.insert(index, format)
    }

    pub fn get(&self, index: usize) -> Option<&FieldFormat> {
        self.columns.get(&index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Format for `index`, falling back to `default` when no override exists.
    pub fn resolve<'a>(&'a self, index: usize, default: &'a FieldFormat) -> &'a FieldFormat {
        self.columns.get(&index).unwrap_or(default)
    }

    #[cfg(feature = "json")]
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub delimiter: Delimiter,
    /// Format every field starts out with
    pub format: FieldFormat,
    /// Per-column overrides of `format`
    pub columns: ColumnFormats,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_format(mut self, format: FieldFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_column(mut self, index: usize, format: FieldFormat) -> Self {
        self.columns.insert(index, format);
        self
    }

    /// Apply a spec on top of the column's current format (or the default
    /// format when the column has no override yet).
    pub fn with_column_spec(mut self, spec: &ColumnSpec) -> Self {
        let mut format = self.columns.resolve(spec.index, &self.format).clone();
        for flag in &spec.flags {
            format.apply(*flag);
        }
        self.columns.insert(spec.index, format);
        self
    }

    pub(crate) fn format_for(&self, index: usize) -> &FieldFormat {
        self.columns.resolve(index, &self.format)
    }
}
