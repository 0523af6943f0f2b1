use core::mem;

use tracing::{debug, trace};

use crate::decode::scanner::{Action, QUOTE, scan};
use crate::field::Field;
use crate::options::ParseOptions;
use crate::record::Record;

/// Tokens that pass through unquoted so generated SQL treats them as
/// keywords rather than strings.
const UNQUOTED_TOKENS: [&str; 2] = ["null", "NOW()"];

/// Single-use record builder. Feed it scanner actions, then [`finish`](Self::finish).
pub struct Parser<'o> {
    options: &'o ParseOptions,
    text: String,
    line: Vec<Field>,
    records: Vec<Record>,
    blank_lines: usize,
}

struct Extracted {
    field: Field,
    /// Trimmed text was empty before any normalization. A line holding only
    /// `""` is not blank even though its field ends up empty.
    blank: bool,
}

impl<'o> Parser<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            text: String::new(),
            line: Vec::new(),
            records: Vec::new(),
            blank_lines: 0,
        }
    }

    pub fn feed(&mut self, action: Action) {
        match action {
            Action::LiteralQuote => self.text.push(QUOTE),
            Action::Enter(_) => {}
            Action::Keep(c) => self.text.push(c),
            Action::EndField => {
                let extracted = self.extract_field();
                self.line.push(extracted.field);
            }
            Action::EndLine => {
                let extracted = self.extract_field();
                if self.line.is_empty() && extracted.blank {
                    // blank line, or the `\n` of a `\r\n` pair
                    self.blank_lines += 1;
                    trace!(record = self.records.len(), "skipping blank line");
                } else {
                    self.line.push(extracted.field);
                    self.end_line();
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Record> {
        let extracted = self.extract_field();
        if !self.line.is_empty() || !extracted.blank {
            self.line.push(extracted.field);
            self.end_line();
        }
        debug!(
            records = self.records.len(),
            blank_lines = self.blank_lines,
            "parsed delimited text"
        );
        self.records
    }

    fn extract_field(&mut self) -> Extracted {
        let text = self.text.trim();
        let format = self.options.format_for(self.line.len()).clone();
        let mut field = Field::with_format(text, format);
        let blank = text.is_empty();

        if text.len() == 1 && text.starts_with(QUOTE) {
            // `""` was read as an escaped quote; it was an empty string
            field.set_value("");
        } else if UNQUOTED_TOKENS.contains(&text) {
            field.set_quote_output(false);
        }

        self.text.clear();
        Extracted { field, blank }
    }

    fn end_line(&mut self) {
        let fields = mem::take(&mut self.line);
        self.records.push(Record::new(fields));
    }
}

/// Parse with default options: comma separated, default field format.
pub fn parse(input: &str) -> Vec<Record> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Vec<Record> {
    let mut parser = Parser::new(options);
    for action in scan(input, options.delimiter.as_char()) {
        parser.feed(action);
    }
    parser.finish()
}
