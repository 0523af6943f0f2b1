#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use csv2sql::{Delimiter, Document, FieldFormat, ParseOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    delimiter: u8,
    quote_char: char,
    quote_output: bool,
    escape_output: bool,
    trim_before_output: bool,
    blank_is_null: bool,
    column: u8,
}

fuzz_target!(|input: Input| {
    let delimiter = match input.delimiter % 4 {
        0 => Delimiter::Comma,
        1 => Delimiter::Tab,
        2 => Delimiter::Pipe,
        _ => Delimiter::Semicolon,
    };
    let format = FieldFormat {
        quote_output: input.quote_output,
        quote_char: input.quote_char,
        escape_output: input.escape_output,
        trim_before_output: input.trim_before_output,
        blank_is_null: input.blank_is_null,
    };
    let options = ParseOptions::new()
        .with_delimiter(delimiter)
        .with_column(input.column as usize, format);
    let mut doc = Document::with_options(&input.text, &options);
    let mut seen = 0usize;
    while doc.advance() {
        seen += 1;
        let values = doc.current_as_strings().unwrap_or_default();
        let _ = doc.current_as_string(values.len());
    }
    assert_eq!(seen, doc.len());
    assert!(!doc.advance());
});
