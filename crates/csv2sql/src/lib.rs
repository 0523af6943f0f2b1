#![doc = include_str!("../README.md")]

pub mod decode;
pub mod document;
pub mod error;
pub mod field;
pub mod number;
pub mod options;
pub mod record;

pub use crate::decode::parser::{parse, parse_with_options};
pub use crate::document::Document;
pub use crate::error::{ConversionError, Error, Result};
pub use crate::field::Field;
pub use crate::number::{DECIMAL_SENTINEL, INTEGER_SENTINEL};
pub use crate::options::{
    ColumnFormats, ColumnSpec, Delimiter, FieldFormat, FormatFlag, ParseOptions,
};
pub use crate::record::Record;
