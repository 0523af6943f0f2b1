use core::fmt;

use crate::options::FieldFormat;

const NULL_VALUE: &str = "null";

/// One cell of parsed text plus the flags that decide how it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    raw: String,
    format: FieldFormat,
}

impl Field {
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_format(raw, FieldFormat::default())
    }

    pub fn with_format(raw: impl Into<String>, format: FieldFormat) -> Self {
        Self {
            raw: raw.into(),
            format,
        }
    }

    /// The presentation-ready value.
    ///
    /// Trims (when enabled), renders an empty result as the bare token `null`
    /// when blank-is-null is on, and otherwise quotes and escapes according to
    /// the format flags.
    pub fn value(&self) -> String {
        let f = &self.format;
        let value = if f.trim_before_output {
            self.raw.trim()
        } else {
            self.raw.as_str()
        };

        if value.is_empty() && f.blank_is_null {
            return NULL_VALUE.to_string();
        }
        if !f.quote_output {
            return value.to_string();
        }

        let q = f.quote_char;
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        if f.escape_output {
            for ch in value.chars() {
                if ch == q {
                    out.push(q);
                }
                out.push(ch);
            }
        } else {
            out.push_str(value);
        }
        out.push(q);
        out
    }

    /// The text exactly as extracted, with no trimming, quoting or escaping.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// Overrides the raw text.
    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    pub fn format(&self) -> &FieldFormat {
        &self.format
    }

    pub fn set_format(&mut self, format: FieldFormat) {
        self.format = format;
    }

    pub fn quote_output(&self) -> bool {
        self.format.quote_output
    }

    pub fn set_quote_output(&mut self, on: bool) {
        self.format.quote_output = on;
    }

    pub fn quote_char(&self) -> char {
        self.format.quote_char
    }

    pub fn set_quote_char(&mut self, quote_char: char) {
        self.format.quote_char = quote_char;
    }

    pub fn escape_output(&self) -> bool {
        self.format.escape_output
    }

    pub fn set_escape_output(&mut self, on: bool) {
        self.format.escape_output = on;
    }

    pub fn trim_before_output(&self) -> bool {
        self.format.trim_before_output
    }

    pub fn set_trim_before_output(&mut self, on: bool) {
        self.format.trim_before_output = on;
    }

    pub fn blank_is_null(&self) -> bool {
        self.format.blank_is_null
    }

    pub fn set_blank_is_null(&mut self, on: bool) {
        self.format.blank_is_null = on;
    }

    pub fn blank_is_blank(&self) -> bool {
        !self.format.blank_is_null
    }

    pub fn set_blank_is_blank(&mut self, on: bool) {
        self.format.blank_is_null = !on;
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}
