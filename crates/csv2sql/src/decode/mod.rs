//! Text to records: a two-state scanner feeding a record builder.

pub mod parser;
pub mod scanner;
