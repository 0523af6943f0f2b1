mod metadata;
mod sql;

use std::fs;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use csv2sql::{ColumnFormats, ColumnSpec, Delimiter, Document, ParseOptions};
use tracing::{debug, info};

use crate::sql::{InsertOptions, LineEnding};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

#[derive(Parser, Debug)]
#[command(
    name = "csv2sql",
    about = "Generate SQL insert statements from a delimited text file",
    version
)]
struct Args {
    /// Delimited text file to read
    input: PathBuf,

    /// Target table (defaults to the input file name without extension)
    #[arg(short, long)]
    table: Option<String>,

    /// Column list for the inserts, e.g. "id, name, amount"
    #[arg(long, conflicts_with = "no_columns")]
    columns: Option<String>,

    /// Ignore the <table>.clm.txt column file next to the input
    #[arg(long)]
    no_columns: bool,

    /// Write the column list to <table>.clm.txt for later runs
    #[arg(long)]
    save_columns: bool,

    /// Start the script with "delete from <table>;"
    #[arg(long)]
    delete: bool,

    /// Leading records to skip (e.g. a header row)
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Field separator of the input
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Per-column format, INDEX=flag[,flag...]; flags: quote, noquote,
    /// escape, noescape, trim, notrim, null, blank, quotechar=C
    #[arg(long = "column", value_name = "SPEC", value_parser = parse_column_spec)]
    column_specs: Vec<ColumnSpec>,

    /// JSON file of per-column formats, e.g. {"2": {"quote_output": false}}
    #[arg(long)]
    formats: Option<PathBuf>,

    /// Terminate lines with \r\n
    #[arg(long)]
    crlf: bool,

    /// Write the script here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed rows as JSON instead of SQL
    #[arg(long)]
    preview: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn parse_column_spec(s: &str) -> Result<ColumnSpec, String> {
    s.parse().map_err(|e: csv2sql::Error| e.to_string())
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv2sql={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

fn table_name(args: &Args) -> Result<String> {
    if let Some(table) = &args.table {
        return Ok(table.clone());
    }
    match args.input.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => Ok(stem.to_string()),
        _ => bail!(
            "cannot derive a table name from {}; pass --table",
            args.input.display()
        ),
    }
}

fn parse_options(args: &Args) -> Result<ParseOptions> {
    let delimiter = match args.delimiter {
        DelimArg::Comma => Delimiter::Comma,
        DelimArg::Tab => Delimiter::Tab,
        DelimArg::Pipe => Delimiter::Pipe,
        DelimArg::Semicolon => Delimiter::Semicolon,
    };
    let mut options = ParseOptions::new().with_delimiter(delimiter);

    if let Some(path) = &args.formats {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading column formats from {}", path.display()))?;
        options.columns = ColumnFormats::from_json(&text)
            .with_context(|| format!("parsing column formats in {}", path.display()))?;
    }
    for spec in &args.column_specs {
        options = options.with_column_spec(spec);
    }
    Ok(options)
}

fn column_names(args: &Args, side_file: &Path) -> Result<Option<String>> {
    if args.columns.is_some() {
        return Ok(args.columns.clone());
    }
    if args.no_columns {
        return Ok(None);
    }
    let loaded = metadata::load(side_file)?;
    if loaded.is_some() {
        info!(path = %side_file.display(), "using saved column names");
    }
    Ok(loaded)
}

fn preview(doc: &mut Document) -> Result<String> {
    let mut out = String::new();
    while doc.advance() {
        if let Some(record) = doc.current() {
            out.push_str(&serde_json::to_string(&record.raw_values())?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args);

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let options = parse_options(&args)?;
    let mut doc = Document::with_options(&input, &options);
    info!(records = doc.len(), input = %args.input.display(), "parsed input");

    let text = if args.preview {
        preview(&mut doc)?
    } else {
        let table = table_name(&args)?;
        let dir = args.input.parent().unwrap_or(Path::new(""));
        let side_file = metadata::path_for(dir, &table);
        let columns = column_names(&args, &side_file)?;

        let opts = InsertOptions {
            columns: columns.clone(),
            prefix_delete: args.delete,
            skip_lines: args.skip,
            line_ending: if args.crlf {
                LineEnding::CrLf
            } else {
                LineEnding::Lf
            },
            ..InsertOptions::new(table)
        };
        let generated = sql::generate(&mut doc, &opts);
        info!(
            statements = generated.statements,
            skipped = generated.skipped,
            "generated script"
        );

        if args.save_columns {
            match &columns {
                Some(columns) => {
                    metadata::save(&side_file, columns)?;
                    info!(path = %side_file.display(), "saved column names");
                }
                None => bail!("--save-columns needs a column list (--columns or a saved file)"),
            }
        }
        generated.sql
    };

    match &args.output {
        Some(path) => fs::write(path, &text)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut out = stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
