//! `insert` statement generation over a parsed document.

use csv2sql::Document;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InsertOptions {
    pub table: String,
    /// Column list placed verbatim inside `( )` after the table name
    pub columns: Option<String>,
    /// Start the script with `delete from <table>;`
    pub prefix_delete: bool,
    /// Leading records to skip, blank or not
    pub skip_lines: usize,
    /// Placed between values
    pub separator: String,
    pub line_ending: LineEnding,
}

impl InsertOptions {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: None,
            prefix_delete: false,
            skip_lines: 0,
            separator: ",".to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub sql: String,
    pub statements: usize,
    pub skipped: usize,
}

/// Walks `doc` from its current cursor position, one statement per non-blank record.
pub fn generate(doc: &mut Document, opts: &InsertOptions) -> Generated {
    let eol = opts.line_ending.as_str();
    let mut sql = String::new();
    let mut statements = 0usize;
    let mut skipped = 0usize;

    if opts.prefix_delete {
        sql.push_str(&format!("{eol}delete from {};{eol}{eol}", opts.table));
    }

    while doc.advance() {
        if skipped < opts.skip_lines {
            skipped += 1;
            continue;
        }
        if !doc.current_is_non_blank() {
            continue;
        }
        let Some(values) = doc.current_as_strings() else {
            continue;
        };
        sql.push_str("insert into ");
        sql.push_str(&opts.table);
        if let Some(columns) = &opts.columns {
            sql.push_str(" (");
            sql.push_str(columns);
            sql.push(')');
        }
        sql.push_str(" values (");
        sql.push_str(&values.join(&opts.separator));
        sql.push_str(");");
        sql.push_str(eol);
        sql.push_str(eol);
        statements += 1;
    }

    debug!(table = %opts.table, statements, skipped, "generated insert statements");
    Generated {
        sql,
        statements,
        skipped,
    }
}
